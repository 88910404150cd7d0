//! Error types for splice-core

use std::path::PathBuf;

/// Result type for splice-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in splice-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edit could not be applied to an in-memory document
    #[error("edit {edit} failed: {source}")]
    Edit {
        /// 1-based position of the edit in its list
        edit: usize,
        #[source]
        source: splice_blocks::Error,
    },

    /// An edit could not be applied to a file; the file was not written
    #[error("{path}: edit {edit} failed: {source}")]
    EditInFile {
        path: PathBuf,
        edit: usize,
        #[source]
        source: splice_blocks::Error,
    },

    /// Two jobs in one manifest target the same file
    #[error("{path} is targeted by jobs {first} and {second}; merge their edits into one job")]
    DuplicateTarget {
        path: PathBuf,
        first: usize,
        second: usize,
    },

    /// Manifest is structurally valid but semantically unusable
    #[error("Invalid manifest: {message}")]
    InvalidManifest { message: String },

    /// Text-level error outside of an edit list
    #[error(transparent)]
    Blocks(#[from] splice_blocks::Error),

    /// Filesystem error from splice-fs
    #[error(transparent)]
    Fs(#[from] splice_fs::Error),
}

impl Error {
    pub fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }
}
