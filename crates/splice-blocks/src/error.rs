//! Error types for splice-blocks

/// Result type for splice-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a structural scan could not find a balanced end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Imbalance {
    #[error("{depth} block(s) still open at end of document (byte {len})")]
    UnclosedAtEnd { depth: usize, len: usize },

    #[error("close token at byte {offset} has no matching open token")]
    UnexpectedClose { offset: usize },

    #[error("no open token between the start and end of document (byte {len})")]
    NeverOpened { len: usize },
}

/// Errors that can occur in splice-blocks operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Marker not found: {marker:?} occurs {found} time(s), occurrence {occurrence} requested")]
    MarkerNotFound {
        marker: String,
        occurrence: usize,
        found: usize,
    },

    #[error("Unbalanced structure in block starting at byte {start}: {imbalance}")]
    UnbalancedStructure { start: usize, imbalance: Imbalance },

    #[error("Occurrence index is 1-based, got 0")]
    InvalidOccurrence,

    #[error("Marker must not be empty")]
    EmptyMarker,

    #[error("{which} token must not be empty")]
    EmptyToken { which: &'static str },

    #[error("Offset {offset} is outside the document or splits a character (length {len})")]
    InvalidOffset { offset: usize, len: usize },

    #[error("Invalid span {start}..{end} for document of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
}

impl Error {
    /// Whether this error means the document no longer has the expected shape,
    /// as opposed to the caller passing bad arguments.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            Self::MarkerNotFound { .. } | Self::UnbalancedStructure { .. }
        )
    }
}
