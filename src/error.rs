//! Error types for gist.

/// Errors that can occur while configuring analysis.
///
/// The pipeline itself is total: every input string produces a complete
/// result, with fixed fallback text for the edge cases. Only
/// configuration can fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid insight count (must be > 0).
    #[error("invalid insight count: {0} (must be > 0)")]
    InvalidInsightCount(usize),
}

/// Result type for gist operations.
pub type Result<T> = std::result::Result<T, Error>;
