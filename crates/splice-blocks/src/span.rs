//! Half-open byte spans and the span replacer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A half-open interval `[start, end)` of byte offsets into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check that this span fits `document` and does not split a character.
    pub fn validate(&self, document: &str) -> Result<()> {
        if self.start > self.end
            || self.end > document.len()
            || !document.is_char_boundary(self.start)
            || !document.is_char_boundary(self.end)
        {
            return Err(Error::InvalidSpan {
                start: self.start,
                end: self.end,
                len: document.len(),
            });
        }
        Ok(())
    }

    /// The text this span denotes, if it is valid for `document`.
    pub fn slice<'a>(&self, document: &'a str) -> Option<&'a str> {
        document.get(self.as_range())
    }

    /// 1-based line numbers of the span's first and last character.
    ///
    /// An empty span reports the line it sits on for both ends.
    pub fn lines(&self, document: &str) -> (usize, usize) {
        let line_at = |offset: usize| {
            document.as_bytes()[..offset.min(document.len())]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1
        };
        let last = if self.is_empty() {
            self.start
        } else {
            self.end - 1
        };
        (line_at(self.start), line_at(last))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Replace the text covered by `span` with `replacement`.
///
/// Produces `document[..start] + replacement + document[end..]`. Everything
/// outside the span is carried over byte for byte.
///
/// # Errors
/// Returns `Error::InvalidSpan` if `start > end`, `end` is past the end of the
/// document, or either offset splits a UTF-8 character.
///
/// # Example
/// ```
/// use splice_blocks::{Span, replace_span};
///
/// let result = replace_span("abcdef", Span::new(2, 4), "XYZ").unwrap();
/// assert_eq!(result, "abXYZef");
/// ```
pub fn replace_span(document: &str, span: Span, replacement: &str) -> Result<String> {
    span.validate(document)?;

    let mut out = String::with_capacity(document.len() - span.len() + replacement.len());
    out.push_str(&document[..span.start]);
    out.push_str(replacement);
    out.push_str(&document[span.end..]);
    Ok(out)
}
