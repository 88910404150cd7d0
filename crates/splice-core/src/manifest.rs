//! Job manifests for batch runs
//!
//! A manifest lists files and the edits to apply to each. It can be written
//! in TOML, JSON or YAML; the format follows the file extension.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use splice_fs::{ConfigStore, NormalizedPath};

use crate::Result;
use crate::edit::Edit;
use crate::error::Error;

/// What a batch does when one job fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failed job; later jobs are skipped.
    #[default]
    FailFast,
    /// Run every job and collect all failures.
    KeepGoing,
}

/// Edits targeting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Target file, relative to the manifest's directory unless absolute
    pub path: String,
    /// Edits applied in order to the file's content
    pub edits: Vec<Edit>,
}

/// Parsed job manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub policy: FailurePolicy,

    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Manifest {
    /// Load and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// [`Manifest::validate`] rejects it.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let manifest: Self = ConfigStore::new().load(path)?;
        manifest.validate()?;
        tracing::debug!(path = %path, jobs = manifest.jobs.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Check that every job has edits and that no two jobs share a target.
    ///
    /// Edits against one file must live in one job so the file is read and
    /// written exactly once per run. Paths are compared after normalization
    /// only; use [`Manifest::validate_with_root`] to also catch a relative and
    /// an absolute spelling of the same file.
    pub fn validate(&self) -> Result<()> {
        self.check_jobs(None)
    }

    /// Like [`Manifest::validate`], comparing job paths resolved against
    /// `root`.
    pub fn validate_with_root(&self, root: &NormalizedPath) -> Result<()> {
        self.check_jobs(Some(root))
    }

    fn check_jobs(&self, root: Option<&NormalizedPath>) -> Result<()> {
        let mut seen: HashMap<NormalizedPath, usize> = HashMap::new();

        for (idx, job) in self.jobs.iter().enumerate() {
            let number = idx + 1;
            if job.path.trim().is_empty() {
                return Err(Error::invalid_manifest(format!("job {number} has no path")));
            }
            if job.edits.is_empty() {
                return Err(Error::invalid_manifest(format!(
                    "job {number} ({}) has no edits",
                    job.path
                )));
            }

            let target = NormalizedPath::new(&job.path);
            let target = match root {
                Some(root) => target.resolve_against(root),
                None => target,
            };
            if let Some(first) = seen.insert(target.clone(), number) {
                return Err(Error::DuplicateTarget {
                    path: target.to_native(),
                    first,
                    second: number,
                });
            }
        }
        Ok(())
    }
}
