//! Structural block location by lexical depth counting.
//!
//! Given the offset of an open token, the locator walks forward counting open
//! and close token occurrences and stops at the first close that brings the
//! depth back to zero:
//!
//! ```text
//! <div>a<div>b</div>c</div>tail
//! ^ start                  ^ end (exclusive)
//! ```
//!
//! # Lexical, not syntactic
//!
//! Tokens are matched as literal byte sequences. The locator knows nothing
//! about quoting, escaping, comments or self-closing shorthand, so an open
//! token inside a string literal counts like any other, and `<div` also
//! matches the start of `<divider`. Callers pick markers and token pairs for
//! documents whose shape they know.

use serde::{Deserialize, Serialize};

use crate::anchor::find_nth;
use crate::error::{Error, Imbalance, Result};
use crate::span::Span;

/// Open/close literals of one nested structure family.
///
/// A position matches the open token when the text there starts with `open`;
/// it matches the close token when the text there starts with `close`. The
/// open test runs first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub open: String,
    pub close: String,
}

impl TokenPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Tokens for an HTML/JSX element: `<name` opens and `</name>` closes.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::TokenPair;
    ///
    /// let div = TokenPair::element("div");
    /// assert_eq!(div.open, "<div");
    /// assert_eq!(div.close, "</div>");
    /// ```
    pub fn element(name: &str) -> Self {
        Self::new(format!("<{name}"), format!("</{name}>"))
    }

    fn validate(&self) -> Result<()> {
        if self.open.is_empty() {
            return Err(Error::EmptyToken { which: "open" });
        }
        if self.close.is_empty() {
            return Err(Error::EmptyToken { which: "close" });
        }
        Ok(())
    }
}

/// Returns the exclusive end offset of the balanced block that starts at
/// `start`.
///
/// `start` should sit on (or before) the open token that establishes depth 1.
/// The returned offset is the smallest `end` for which `[start, end)` holds as
/// many open as close tokens.
///
/// # Errors
/// - `Error::InvalidOffset` if `start` is past the end or splits a character
/// - `Error::EmptyToken` if either literal is empty
/// - `Error::UnbalancedStructure` if the document ends while blocks are still
///   open, a close token appears before any open token, or no open token
///   appears at all
///
/// # Example
/// ```
/// use splice_blocks::{TokenPair, locate_block_end};
///
/// let doc = "<div>a<div>b</div>c</div>";
/// let div = TokenPair::element("div");
/// assert_eq!(locate_block_end(doc, 0, &div).unwrap(), doc.len());
/// assert_eq!(locate_block_end(doc, 6, &div).unwrap(), 18);
/// ```
pub fn locate_block_end(document: &str, start: usize, tokens: &TokenPair) -> Result<usize> {
    tokens.validate()?;
    if start > document.len() || !document.is_char_boundary(start) {
        return Err(Error::InvalidOffset {
            offset: start,
            len: document.len(),
        });
    }

    let bytes = document.as_bytes();
    let open = tokens.open.as_bytes();
    let close = tokens.close.as_bytes();

    let mut pos = start;
    let mut depth = 0usize;
    let mut max_depth = 0usize;

    while pos < bytes.len() {
        let rest = &bytes[pos..];

        if rest.starts_with(open) {
            depth += 1;
            max_depth = max_depth.max(depth);
            pos += open.len();
        } else if rest.starts_with(close) {
            if depth == 0 {
                return Err(Error::UnbalancedStructure {
                    start,
                    imbalance: Imbalance::UnexpectedClose { offset: pos },
                });
            }
            depth -= 1;
            pos += close.len();
            if depth == 0 {
                tracing::trace!(start, end = pos, max_depth, "located balanced block");
                return Ok(pos);
            }
        } else {
            // Step a whole character so `pos` stays on a boundary
            pos += document[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    let imbalance = if depth == 0 {
        Imbalance::NeverOpened { len: document.len() }
    } else {
        Imbalance::UnclosedAtEnd {
            depth,
            len: document.len(),
        }
    };
    Err(Error::UnbalancedStructure { start, imbalance })
}

/// Like [`locate_block_end`], returning the whole `[start, end)` span.
pub fn locate_block(document: &str, start: usize, tokens: &TokenPair) -> Result<Span> {
    locate_block_end(document, start, tokens).map(|end| Span::new(start, end))
}

/// Finds the `occurrence`-th match of `marker` and returns the balanced block
/// starting there.
///
/// The marker normally begins with the open token, e.g.
/// `<div className="col-md-6">` with [`TokenPair::element("div")`](TokenPair::element).
pub fn locate_nth_block(
    document: &str,
    marker: &str,
    occurrence: usize,
    tokens: &TokenPair,
) -> Result<Span> {
    let start = find_nth(document, marker, occurrence)?;
    locate_block(document, start, tokens)
}
