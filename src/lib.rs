//! # gist
//!
//! Rule-based insight analysis for free-form text: notes, reports,
//! meeting transcripts, customer feedback.
//!
//! ## The Problem
//!
//! A wall of meeting notes answers three questions badly:
//!
//! - What is this about? (summary)
//! - What keeps coming up? (themes)
//! - What do we actually have to do? (action items)
//!
//! Answering them well needs a language model. Answering them *usefully*
//! often doesn't: the first sentences of a note state its topic, repeated
//! content words mark its themes, and task language ("should", "need to",
//! "deadline") marks its action items. This crate implements exactly that
//! set of rules. No model, no network, no tokenizer downloads. Output is a
//! pure function of input.
//!
//! ## The Pipeline
//!
//! Four stateless stages, composed by [`Analyzer::analyze`]:
//!
//! ```text
//! raw text --> split_into_sentences --> [sentences] --> generate_summary
//!                                            |
//!                                            +--------> generate_action_items
//!
//! raw text ------------------------------------------> InsightExtractor
//! ```
//!
//! ### Sentence Splitter
//!
//! Collapses whitespace, then splits where `.`, `!`, or `?` is followed by
//! whitespace. Deliberately simpler than UAX #29 segmentation: for the
//! note-taking inputs this crate targets, "punctuation then space" is the
//! boundary users mean, and the rule is easy to predict.
//!
//! ### Summarizer
//!
//! Takes the leading sentences. Lead-based extraction is a strong baseline
//! for prose that states its point up front, which notes and reports
//! usually do.
//!
//! ### Insight Extractor
//!
//! Tokenizes into lowercase words, discards stop-words and words shorter
//! than three characters, and ranks the rest by frequency:
//!
//! ```text
//! "Ship the beta. The beta needs docs. Docs ship Friday."
//!
//! tokens:   ship beta beta needs docs docs ship friday
//! ranked:   ship x2, beta x2, docs x2, needs x1, friday x1
//! rendered: 'ship' is a repeated theme (mentioned 2 times).
//! ```
//!
//! Equal counts keep first-appearance order, so reruns are stable.
//!
//! ### Action Detector
//!
//! Flags sentences containing task language (`"should"`, `"need to"`,
//! `"deadline"`, ...). When nothing matches it falls back to a fixed
//! triage checklist rather than returning nothing, capped at five items
//! either way.
//!
//! ## Quick Start
//!
//! ```rust
//! use gist::Analyzer;
//!
//! let notes = "The team met to plan the beta launch. Pricing is still open. \
//!              We should finalize pricing by Friday. Marketing must draft \
//!              the announcement.";
//!
//! let report = Analyzer::new().analyze(notes);
//!
//! assert!(report.summary.starts_with("The team met"));
//! assert_eq!(report.actions.len(), 2);
//! assert!(report.actions[0].contains("should finalize"));
//! ```
//!
//! Each stage is also public on its own, for callers that want one
//! artifact without the rest:
//!
//! ```rust
//! use gist::{generate_action_items, split_into_sentences};
//!
//! let sentences = split_into_sentences("Fix the login bug. It must ship today.");
//! let actions = generate_action_items(&sentences);
//! assert_eq!(actions, vec!["It must ship today."]);
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: every input string, including empty and whitespace-only,
//!   produces a complete [`Report`]. Edge cases have fixed fallback text,
//!   not errors. The only fallible operation is configuring a zero
//!   insight count.
//! - **Deterministic**: no randomness, no clock, no environment reads.
//!   Identical input and configuration give byte-identical output.
//! - **Linear**: splitting is a single forward scan and tokenization uses
//!   the `regex` crate's non-backtracking engine, so adversarial inputs
//!   (say, one character repeated a million times) degrade linearly.
//! - **Share-nothing**: stages read their inputs and allocate their
//!   outputs. Concurrent `analyze` calls need no synchronization.

mod actions;
mod analyzer;
mod error;
mod insights;
mod report;
mod sentence;
mod summary;

pub use actions::{generate_action_items, ACTION_TRIGGERS, FALLBACK_ACTIONS, MAX_ACTION_ITEMS};
pub use analyzer::{Analyzer, DEFAULT_SUMMARY_SENTENCES};
pub use error::{Error, Result};
pub use insights::{
    generate_key_insights, InsightExtractor, KeywordInsight, DEFAULT_TOP_INSIGHTS,
    NO_INSIGHTS_MESSAGE,
};
pub use report::Report;
pub use sentence::split_into_sentences;
pub use summary::{generate_summary, EMPTY_TEXT_PLACEHOLDER};

/// Analyze text with the default configuration.
///
/// Shorthand for `Analyzer::new().analyze(text)`: two summary sentences,
/// five keyword insights, at most five action items.
///
/// ```rust
/// let report = gist::analyze("Release notes are late. We need to ship them.");
/// assert!(report.actions[0].contains("need to"));
/// ```
pub fn analyze(text: &str) -> Report {
    Analyzer::new().analyze(text)
}
