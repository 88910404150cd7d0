//! Edit model, per-file application and batch engine for Splice.
//!
//! An [`Edit`] describes one structural change (insert at an anchor, replace a
//! balanced block, replace a byte span). [`apply_to_file`] runs a list of
//! edits against one document and writes the result only if every edit
//! succeeded. [`BatchEngine`] runs the jobs of a [`Manifest`] under a
//! [`FailurePolicy`].

pub mod apply;
pub mod batch;
pub mod diff;
pub mod edit;
pub mod error;
pub mod manifest;
pub mod transform;

pub use apply::{ApplyOptions, FileOutcome, apply_to_file};
pub use batch::{BatchEngine, BatchReport, JobReport, JobStatus};
pub use diff::{DiffSummary, unified_diff};
pub use edit::Edit;
pub use error::{Error, Result};
pub use manifest::{FailurePolicy, Job, Manifest};
pub use transform::{apply_edit, apply_edits};
