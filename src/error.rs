//! Error types for puzzle generation and book composition.
//!
//! Only structurally invalid input is an error. Per-unit problems (a word
//! that does not fit, a puzzle set with too few words, a missing font) are
//! recorded as data and never abort a book.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a book.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every puzzle set was skipped, so there is nothing to print
    #[error("No usable puzzle sets: {skipped} set(s) were skipped and none remain")]
    NoUsablePuzzles {
        /// Number of puzzle sets that were skipped
        skipped: usize,
    },

    /// Page specification cannot produce a printable content box
    #[error("Invalid page spec: {reason}")]
    InvalidPageSpec {
        /// Why the spec was rejected
        reason: String,
    },

    /// A placement does not agree with its grid
    #[error("Invalid placement of '{word}': {reason}")]
    InvalidPlacement {
        /// The word whose placement is broken
        word: String,
        /// What is wrong with it
        reason: String,
    },

    /// External resource (font, image, decorator) could not be provided
    #[error("Resource error: {0}")]
    Resource(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
