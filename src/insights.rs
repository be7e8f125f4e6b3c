//! Keyword insight extraction.
//!
//! Finds the repeated content words in a text and reports them as ranked,
//! human-readable theme lines.
//!
//! ## How Ranking Works
//!
//! 1. Lowercase the text and tokenize into maximal runs of ASCII letters
//!    and apostrophes ("don't" is one word, "3rd" contributes "rd").
//! 2. Discard stop-words and words shorter than three characters.
//! 3. Count occurrences, then sort by descending count with a *stable*
//!    sort over first-appearance order.
//!
//! The stable sort is load-bearing: when two words tie on count, the one
//! that appeared first in the text ranks first. An unstable sort would
//! reorder ties between runs of the same input.
//!
//! ```text
//! "cat cat cat dog dog"
//!
//! counts: cat -> 3, dog -> 2
//! output: 'cat' is a repeated theme (mentioned 3 times).
//!         'dog' is a repeated theme (mentioned 2 times).
//! ```

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Number of keyword insights extracted by default.
pub const DEFAULT_TOP_INSIGHTS: usize = 5;

/// Message returned when no rankable words survive filtering.
pub const NO_INSIGHTS_MESSAGE: &str = "Not enough meaningful words to extract insights yet.";

/// Words discarded before ranking. Common function words carry no topical
/// signal, so counting them would drown the actual themes.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "for", "to", "of", "in", "on", "with",
    "at", "by", "from", "is", "are", "was", "were", "be", "been", "being", "it", "this", "that",
    "these", "those", "as", "we", "you", "they", "he", "she", "i", "our", "your", "their", "not",
    "can", "could", "should", "would", "will", "may", "might",
];

/// Words must be at least this many characters to be rankable.
const MIN_WORD_LEN: usize = 3;

// Tokens are runs of ASCII letters and apostrophes in the lowercased
// text. The regex engine matches in linear time, so pathological inputs
// cannot trigger backtracking blowups.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").expect("valid word regex"));

/// A ranked keyword: a content word and how often it occurred.
///
/// `count` is always at least 1; zero-count words are never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordInsight {
    /// The lowercased word.
    pub word: String,
    /// Number of occurrences in the filtered word sequence.
    pub count: usize,
}

impl KeywordInsight {
    /// Render this insight as a reader-facing sentence.
    ///
    /// The wording is fixed and always says "times", even for a count
    /// of one.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "'{}' is a repeated theme (mentioned {} times).",
            self.word, self.count
        )
    }
}

/// Extracts the top repeated content words from raw text.
///
/// Works on the raw text, not on split sentences: word frequency does not
/// care about sentence boundaries.
///
/// ## Example
///
/// ```rust
/// use gist::InsightExtractor;
///
/// let extractor = InsightExtractor::new(2).unwrap();
/// let insights = extractor.extract("cat cat cat dog dog bird");
///
/// assert_eq!(insights[0], "'cat' is a repeated theme (mentioned 3 times).");
/// assert_eq!(insights[1], "'dog' is a repeated theme (mentioned 2 times).");
/// ```
#[derive(Debug, Clone)]
pub struct InsightExtractor {
    top_n: usize,
    stop_words: HashSet<&'static str>,
}

impl InsightExtractor {
    /// Create an extractor that reports the `top_n` most frequent words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInsightCount`] if `top_n` is zero.
    pub fn new(top_n: usize) -> Result<Self> {
        if top_n == 0 {
            return Err(Error::InvalidInsightCount(top_n));
        }
        Ok(Self {
            top_n,
            stop_words: STOP_WORDS.iter().copied().collect(),
        })
    }

    /// The configured number of insights.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the content words of `text` by descending frequency.
    ///
    /// Returns at most `top_n` entries; fewer if the text has fewer
    /// distinct rankable words, empty if it has none. Ties on count keep
    /// first-appearance order.
    #[must_use]
    pub fn keywords(&self, text: &str) -> Vec<KeywordInsight> {
        let lowered = text.to_lowercase();

        // Counts live in a first-seen-ordered vector so the stable sort
        // below resolves ties by order of appearance.
        let mut ranked: Vec<KeywordInsight> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for word in WORD_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if word.len() < MIN_WORD_LEN || self.stop_words.contains(word) {
                continue;
            }
            if let Some(&pos) = positions.get(word) {
                ranked[pos].count += 1;
            } else {
                positions.insert(word.to_string(), ranked.len());
                ranked.push(KeywordInsight {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }

        // sort_by is stable; equal counts keep insertion (first-seen) order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(self.top_n);
        ranked
    }

    /// Extract rendered insight lines from `text`.
    ///
    /// Returns the [`KeywordInsight::render`] line for each ranked word,
    /// or a single [`NO_INSIGHTS_MESSAGE`] entry when filtering leaves
    /// nothing to rank (empty text, or text made only of stop-words and
    /// short words). Never returns an empty vector.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        let ranked = self.keywords(text);
        if ranked.is_empty() {
            return vec![NO_INSIGHTS_MESSAGE.to_string()];
        }
        ranked.iter().map(KeywordInsight::render).collect()
    }
}

impl Default for InsightExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_INSIGHTS,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }
}

/// Extract rendered keyword insights from `text`.
///
/// Convenience wrapper that builds an [`InsightExtractor`] for one call.
/// Keep an extractor around instead when analyzing many texts.
///
/// # Errors
///
/// Returns [`Error::InvalidInsightCount`] if `top_n` is zero.
pub fn generate_key_insights(text: &str, top_n: usize) -> Result<Vec<String>> {
    Ok(InsightExtractor::new(top_n)?.extract(text))
}
