//! Sentence splitting.
//!
//! Segments text on terminal punctuation followed by whitespace.
//!
//! ## The Rule
//!
//! A boundary is a `.`, `!`, or `?` immediately followed by whitespace.
//! The punctuation stays with the preceding sentence; the whitespace is
//! the delimiter and is consumed:
//!
//! ```text
//! "Hello world. This is great!"
//!              ^
//!              boundary
//!
//! ["Hello world.", "This is great!"]
//! ```
//!
//! Periods *not* followed by whitespace never split, so decimal numbers
//! ("3.14159") and glued text ("v1.2.3-rc1") survive intact. Abbreviations
//! followed by a space ("Dr. Smith") do split; that trade-off keeps the
//! rule predictable for the short, informal inputs this crate targets.
//!
//! ## Normalization
//!
//! Before splitting, all whitespace runs (spaces, tabs, newlines) collapse
//! to a single space and the ends are trimmed:
//!
//! ```text
//! "  First line.\n\n\tSecond   line.  "  ->  "First line. Second line."
//! ```
//!
//! This means the splitter is insensitive to line wrapping and
//! paste-artifact spacing, and every returned sentence is already trimmed.

/// Split text into sentences.
///
/// Whitespace is normalized first, then the text is segmented at every
/// terminal punctuation mark (`.`, `!`, `?`) that is followed by
/// whitespace. Pieces that are empty after trimming are dropped.
///
/// Never fails. Empty and whitespace-only input yield an empty vector;
/// text with no terminal punctuation yields a single-element vector
/// holding the whole normalized text.
///
/// ## Example
///
/// ```rust
/// use gist::split_into_sentences;
///
/// let sentences = split_into_sentences("Hello world. This is great!");
/// assert_eq!(sentences, vec!["Hello world.", "This is great!"]);
///
/// assert!(split_into_sentences("   \n\t ").is_empty());
/// assert_eq!(split_into_sentences("No punctuation"), vec!["No punctuation"]);
/// ```
#[must_use]
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    // After normalization the only whitespace left is single ASCII spaces,
    // so "punctuation followed by whitespace" reduces to "punctuation
    // followed by one space". All boundary bytes are ASCII, which keeps
    // the byte-index arithmetic valid for multi-byte text around them.
    let bytes = normalized.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if is_terminal(bytes[i]) && bytes.get(i + 1) == Some(&b' ') {
            push_nonempty(&normalized[start..=i], &mut sentences);
            start = i + 2; // skip the delimiter space
            i += 2;
        } else {
            i += 1;
        }
    }

    if start < normalized.len() {
        push_nonempty(&normalized[start..], &mut sentences);
    }

    sentences
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const fn is_terminal(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

fn push_nonempty(piece: &str, sentences: &mut Vec<String>) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
