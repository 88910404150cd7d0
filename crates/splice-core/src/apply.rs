//! Applying an edit list to one file on disk.

use serde::{Deserialize, Serialize};
use splice_fs::{NormalizedPath, RobustnessConfig, checksum, io};

use crate::diff::{DiffSummary, unified_diff};
use crate::edit::Edit;
use crate::error::{Error, Result};
use crate::transform::apply_edits;

/// Options for [`apply_to_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Compute the result and a diff, but leave the file untouched.
    pub dry_run: bool,
    /// Locking and fsync settings for the final write.
    pub robustness: RobustnessConfig,
}

impl ApplyOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: String,
    /// The edits produced different text
    pub changed: bool,
    /// The new text was written to disk
    pub written: bool,
    pub checksum_before: String,
    pub checksum_after: String,
    pub summary: DiffSummary,
    /// Unified diff, present on dry runs that change the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Reads `path`, applies `edits` in order and writes the result back.
///
/// Every edit must succeed before anything is written; on error the file is
/// left exactly as it was. A file whose text does not change is not
/// rewritten.
///
/// The file is read before the write lock is taken, so the lock does not make
/// the read-modify-write atomic. Concurrent runs against one file must be
/// serialized by the caller.
///
/// # Errors
///
/// - `Error::Fs` if the file cannot be read as UTF-8 or the write fails
/// - `Error::EditInFile` naming the first edit that could not be applied
pub fn apply_to_file(
    path: &NormalizedPath,
    edits: &[Edit],
    options: &ApplyOptions,
) -> Result<FileOutcome> {
    let original = io::read_text(path)?;

    let updated = apply_edits(&original, edits).map_err(|err| match err {
        Error::Edit { edit, source } => Error::EditInFile {
            path: path.to_native(),
            edit,
            source,
        },
        other => other,
    })?;

    let changed = updated != original;
    let written = changed && !options.dry_run;

    if written {
        io::write_atomic(path, updated.as_bytes(), options.robustness)?;
        tracing::debug!(path = %path, "wrote transformed document");
    } else if !changed {
        tracing::debug!(path = %path, "edits produced identical text, skipping write");
    }

    let diff = (options.dry_run && changed).then(|| unified_diff(path.as_str(), &original, &updated));

    Ok(FileOutcome {
        path: path.to_string(),
        changed,
        written,
        checksum_before: checksum::content_checksum(&original),
        checksum_after: checksum::content_checksum(&updated),
        summary: DiffSummary::between(&original, &updated),
        diff,
    })
}
