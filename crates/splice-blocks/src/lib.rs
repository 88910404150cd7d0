//! Pure text operations behind Splice's structural edits.
//!
//! Every function here takes a document as `&str` and returns a new `String`
//! or an offset; nothing touches the filesystem.
//!
//! - [`anchor`]: find the N-th occurrence of a literal marker and insert
//!   content before or after it
//! - [`locator`]: find the end of a nested open/close block by lexical depth
//!   counting
//! - [`span`]: replace a `[start, end)` byte range
//!
//! A typical edit composes all three:
//!
//! ```
//! use splice_blocks::{TokenPair, find_nth, locate_block, replace_span};
//!
//! let doc = r#"<div className="col">old<div>x</div></div><p/>"#;
//! let start = find_nth(doc, r#"<div className="col">"#, 1).unwrap();
//! let span = locate_block(doc, start, &TokenPair::element("div")).unwrap();
//! let out = replace_span(doc, span, "<div>new</div>").unwrap();
//! assert_eq!(out, "<div>new</div><p/>");
//! ```
//!
//! Offsets are UTF-8 byte offsets and always fall on character boundaries.

pub mod anchor;
pub mod error;
pub mod locator;
pub mod span;

pub use anchor::{Placement, count_occurrences, find_nth, insert_at, insert_before};
pub use error::{Error, Imbalance, Result};
pub use locator::{TokenPair, locate_block, locate_block_end, locate_nth_block};
pub use span::{Span, replace_span};
