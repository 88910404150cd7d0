//! Edit types for structural document changes.

use std::fmt;

use serde::{Deserialize, Serialize};
use splice_blocks::{Placement, TokenPair};

fn first_occurrence() -> usize {
    1
}

fn div_tokens() -> TokenPair {
    TokenPair::element("div")
}

/// One structural change to a document.
///
/// Serialized with a `kind` tag so manifests read naturally:
///
/// ```toml
/// kind = "replace-block"
/// marker = '<div className="col-md-6">'
/// occurrence = 2
/// replacement = '<div className="col-md-6">...</div>'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Edit {
    /// Insert content next to the N-th occurrence of a literal marker.
    Insert {
        marker: String,
        #[serde(default = "first_occurrence")]
        occurrence: usize,
        #[serde(default)]
        placement: Placement,
        content: String,
    },

    /// Replace the balanced block that starts at the N-th occurrence of a
    /// marker. Tokens default to `<div` / `</div>`.
    ReplaceBlock {
        marker: String,
        #[serde(default = "first_occurrence")]
        occurrence: usize,
        #[serde(default = "div_tokens")]
        tokens: TokenPair,
        replacement: String,
    },

    /// Replace a fixed `[start, end)` byte range.
    ReplaceSpan {
        start: usize,
        end: usize,
        replacement: String,
    },
}

impl Edit {
    /// Insert `content` before the first occurrence of `marker`.
    pub fn insert_before(marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Insert {
            marker: marker.into(),
            occurrence: 1,
            placement: Placement::Before,
            content: content.into(),
        }
    }

    /// Replace the `<div>` block starting at the `occurrence`-th `marker`.
    pub fn replace_div(
        marker: impl Into<String>,
        occurrence: usize,
        replacement: impl Into<String>,
    ) -> Self {
        Self::ReplaceBlock {
            marker: marker.into(),
            occurrence,
            tokens: div_tokens(),
            replacement: replacement.into(),
        }
    }
}

/// Longest marker prefix shown in log lines and reports.
const MARKER_PREVIEW: usize = 40;

fn preview(marker: &str) -> String {
    let first_line = marker.lines().next().unwrap_or("");
    let mut shown: String = first_line.chars().take(MARKER_PREVIEW).collect();
    if shown.len() < marker.len() {
        shown.push('…');
    }
    shown
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert {
                marker,
                occurrence,
                placement,
                ..
            } => {
                let side = match placement {
                    Placement::Before => "before",
                    Placement::After => "after",
                };
                write!(f, "insert {side} {:?} #{occurrence}", preview(marker))
            }
            Self::ReplaceBlock {
                marker,
                occurrence,
                tokens,
                ..
            } => write!(
                f,
                "replace {}…{} block at {:?} #{occurrence}",
                tokens.open,
                tokens.close,
                preview(marker)
            ),
            Self::ReplaceSpan { start, end, .. } => write!(f, "replace span {start}..{end}"),
        }
    }
}
