//! Filesystem layer for Splice
//!
//! Provides normalized path handling, whole-file text reads, atomic locked
//! writes and format-agnostic loading of job manifests.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
