//! Analyzer configuration and pipeline composition.
//!
//! An [`Analyzer`] holds the two tunable counts (summary length, insight
//! count) and runs the four stages in order. Configuration is validated
//! up front so [`Analyzer::analyze`] itself can never fail.

use crate::actions::generate_action_items;
use crate::error::Result;
use crate::insights::InsightExtractor;
use crate::report::Report;
use crate::sentence::split_into_sentences;
use crate::summary::generate_summary;

/// Number of sentences in the summary by default.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 2;

/// Configured text analysis pipeline.
///
/// Construction is cheap and the analyzer is reusable and cloneable;
/// `analyze` borrows it immutably, so one analyzer can serve many texts
/// (and many threads) at once.
///
/// # Examples
///
/// ```rust
/// use gist::Analyzer;
///
/// // Defaults: 2 summary sentences, 5 insights
/// let report = Analyzer::new().analyze("Short note. Nothing urgent.");
/// assert_eq!(report.summary, "Short note. Nothing urgent.");
///
/// // Tuned: single-sentence summary, 3 insights
/// let analyzer = Analyzer::new()
///     .with_summary_sentences(1)
///     .with_top_insights(3)
///     .unwrap();
/// let report = analyzer.analyze("Short note. Nothing urgent.");
/// assert_eq!(report.summary, "Short note.");
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    summary_sentences: usize,
    insights: InsightExtractor,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many leading sentences the summary keeps.
    ///
    /// Zero is allowed and yields an empty summary for non-empty text
    /// (the empty-input placeholder still applies when there are no
    /// sentences at all).
    #[must_use]
    pub fn with_summary_sentences(mut self, max_sentences: usize) -> Self {
        self.summary_sentences = max_sentences;
        self
    }

    /// Set how many keyword insights to extract.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInsightCount`] if `top_n` is zero.
    pub fn with_top_insights(self, top_n: usize) -> Result<Self> {
        Ok(Self {
            insights: InsightExtractor::new(top_n)?,
            ..self
        })
    }

    /// The configured summary length in sentences.
    #[must_use]
    pub const fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }

    /// The configured number of keyword insights.
    #[must_use]
    pub fn top_insights(&self) -> usize {
        self.insights.top_n()
    }

    /// Run the full pipeline over `text`.
    ///
    /// Splits once, then derives the summary and the action items from
    /// the sentence list while the insight extractor reads the raw text
    /// directly. Total: every input, including empty and whitespace-only
    /// text, yields a fully populated [`Report`].
    #[must_use]
    pub fn analyze(&self, text: &str) -> Report {
        let sentences = split_into_sentences(text);

        Report {
            summary: generate_summary(&sentences, self.summary_sentences()),
            insights: self.insights.extract(text),
            actions: generate_action_items(&sentences),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            insights: InsightExtractor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, EMPTY_TEXT_PLACEHOLDER, FALLBACK_ACTIONS, NO_INSIGHTS_MESSAGE};

    #[test]
    fn test_default_configuration() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.summary_sentences(), DEFAULT_SUMMARY_SENTENCES);
        assert_eq!(analyzer.top_insights(), crate::DEFAULT_TOP_INSIGHTS);
    }

    #[test]
    fn test_pipeline_composition() {
        let text = "The launch launch launch slipped. We must reset the deadline. \
                    All hands meet tomorrow.";
        let report = Analyzer::new().analyze(text);

        assert_eq!(
            report.summary,
            "The launch launch launch slipped. We must reset the deadline."
        );
        assert_eq!(
            report.insights[0],
            "'launch' is a repeated theme (mentioned 3 times)."
        );
        assert_eq!(report.actions, vec!["We must reset the deadline."]);
    }

    #[test]
    fn test_empty_text_full_fallback_report() {
        let report = Analyzer::new().analyze("");

        assert_eq!(report.summary, EMPTY_TEXT_PLACEHOLDER);
        assert_eq!(report.insights, vec![NO_INSIGHTS_MESSAGE]);
        assert_eq!(report.actions, FALLBACK_ACTIONS);
    }

    #[test]
    fn test_zero_insights_rejected() {
        let result = Analyzer::new().with_top_insights(0);
        assert!(matches!(result, Err(Error::InvalidInsightCount(0))));
    }

    #[test]
    fn test_zero_summary_sentences_allowed() {
        let analyzer = Analyzer::new().with_summary_sentences(0);
        let report = analyzer.analyze("Some text.");
        assert_eq!(report.summary, "");
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let text = "Repeat run. Must match byte for byte. Repeat run.";
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }
}
