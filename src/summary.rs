//! Lead-based summarization.
//!
//! Takes the first N sentences as the summary. For text that states its
//! point up front (notes, reports, announcements) this is a strong
//! baseline, and it never misquotes: the summary is verbatim source text.

/// Summary returned when there are no sentences to summarize.
pub const EMPTY_TEXT_PLACEHOLDER: &str = "Please paste some text first.";

/// Build a short summary from the leading sentences.
///
/// Joins the first `max_sentences` entries with single spaces, in order.
/// A shorter list is used whole. An empty list yields
/// [`EMPTY_TEXT_PLACEHOLDER`]; `max_sentences == 0` with a non-empty list
/// yields an empty string (a join of zero sentences).
///
/// ## Example
///
/// ```rust
/// use gist::generate_summary;
///
/// let sentences = ["A.", "B.", "C."];
/// assert_eq!(generate_summary(&sentences, 2), "A. B.");
/// assert_eq!(generate_summary(&sentences, 10), "A. B. C.");
/// ```
#[must_use]
pub fn generate_summary<S: AsRef<str>>(sentences: &[S], max_sentences: usize) -> String {
    if sentences.is_empty() {
        return EMPTY_TEXT_PLACEHOLDER.to_string();
    }

    sentences
        .iter()
        .take(max_sentences)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
