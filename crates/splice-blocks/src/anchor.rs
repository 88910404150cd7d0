//! Literal anchors: finding the N-th occurrence of a marker and inserting
//! content next to it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which side of the anchor inserted content lands on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Immediately before the marker's first byte.
    #[default]
    Before,
    /// Immediately after the marker's last byte.
    After,
}

/// Counts non-overlapping occurrences of `marker`, scanning left to right.
pub fn count_occurrences(document: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    document.matches(marker).count()
}

/// Returns the byte offset where the `occurrence`-th (1-based) match of
/// `marker` starts.
///
/// Matches are counted left to right without overlap, so in `"aaaa"` the
/// marker `"aa"` occurs twice, at offsets 0 and 2.
///
/// # Errors
/// - `Error::InvalidOccurrence` if `occurrence` is 0
/// - `Error::EmptyMarker` if `marker` is empty
/// - `Error::MarkerNotFound` if fewer than `occurrence` matches exist
///
/// # Example
/// ```
/// use splice_blocks::find_nth;
///
/// let doc = r#"<div className="col-md-6">a</div><div className="col-md-6">b</div>"#;
/// let second = find_nth(doc, r#"<div className="col-md-6">"#, 2).unwrap();
/// assert_eq!(second, 33);
/// ```
pub fn find_nth(document: &str, marker: &str, occurrence: usize) -> Result<usize> {
    if occurrence == 0 {
        return Err(Error::InvalidOccurrence);
    }
    if marker.is_empty() {
        return Err(Error::EmptyMarker);
    }

    document
        .match_indices(marker)
        .nth(occurrence - 1)
        .map(|(offset, _)| offset)
        .ok_or_else(|| Error::MarkerNotFound {
            marker: marker.to_string(),
            occurrence,
            found: count_occurrences(document, marker),
        })
}

/// Inserts `content` next to the `occurrence`-th match of `marker`.
///
/// Exactly one insertion is made regardless of how many other matches exist.
pub fn insert_at(
    document: &str,
    marker: &str,
    occurrence: usize,
    placement: Placement,
    content: &str,
) -> Result<String> {
    let start = find_nth(document, marker, occurrence)?;
    let at = match placement {
        Placement::Before => start,
        Placement::After => start + marker.len(),
    };

    let mut out = String::with_capacity(document.len() + content.len());
    out.push_str(&document[..at]);
    out.push_str(content);
    out.push_str(&document[at..]);
    Ok(out)
}

/// Inserts `content` immediately before the first occurrence of `marker`.
///
/// # Example
/// ```
/// use splice_blocks::insert_before;
///
/// assert_eq!(insert_before("X{M}Y", "{M}", "Z").unwrap(), "XZ{M}Y");
/// ```
pub fn insert_before(document: &str, marker: &str, content: &str) -> Result<String> {
    insert_at(document, marker, 1, Placement::Before, content)
}
