//! Applying edits to in-memory documents.

use splice_blocks::{Span, insert_at, locate_nth_block, replace_span};

use crate::edit::Edit;
use crate::error::{Error, Result};

/// Applies one edit, returning the new document.
///
/// The input is never modified; on error no output exists.
pub fn apply_edit(text: &str, edit: &Edit) -> splice_blocks::Result<String> {
    match edit {
        Edit::Insert {
            marker,
            occurrence,
            placement,
            content,
        } => insert_at(text, marker, *occurrence, *placement, content),
        Edit::ReplaceBlock {
            marker,
            occurrence,
            tokens,
            replacement,
        } => {
            let span = locate_nth_block(text, marker, *occurrence, tokens)?;
            tracing::debug!(%span, "replacing located block");
            replace_span(text, span, replacement)
        }
        Edit::ReplaceSpan {
            start,
            end,
            replacement,
        } => replace_span(text, Span::new(*start, *end), replacement),
    }
}

/// Applies edits in order, each one seeing the output of the previous.
///
/// Stops at the first failing edit and reports its 1-based position.
pub fn apply_edits(text: &str, edits: &[Edit]) -> Result<String> {
    let mut current = text.to_string();
    for (idx, edit) in edits.iter().enumerate() {
        tracing::debug!(edit = idx + 1, %edit, "applying edit");
        current = apply_edit(&current, edit).map_err(|source| Error::Edit {
            edit: idx + 1,
            source,
        })?;
    }
    Ok(current)
}
