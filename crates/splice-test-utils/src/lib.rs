//! Shared test utilities for the splice workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample UI documents under `test-fixtures/documents`
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace), a temporary
//!   directory with document helpers and assertions

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
