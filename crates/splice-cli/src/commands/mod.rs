//! Command implementations for splice-cli

pub mod apply;
pub mod edit;
pub mod locate;

pub use apply::run_apply;
pub use edit::{run_insert, run_replace_block};
pub use locate::run_locate;
