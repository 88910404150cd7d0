//! Batch engine
//!
//! Runs the jobs of a manifest one after another. Each job reads one file,
//! applies its edits and writes the file back only if all of them succeeded,
//! so a failing job never leaves a half-edited file behind. The
//! [`FailurePolicy`] decides whether later jobs still run after a failure.

use serde::{Deserialize, Serialize};
use splice_fs::NormalizedPath;

use crate::Result;
use crate::apply::{ApplyOptions, FileOutcome, apply_to_file};
use crate::manifest::{FailurePolicy, Job, Manifest};

/// Final state of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    /// Edits applied and the file changed (or would change, on a dry run)
    Applied,
    /// Edits applied but produced identical text
    Unchanged,
    /// An edit or the file I/O failed; the file was not written
    Failed,
    /// Not attempted because an earlier job failed under `FailFast`
    Skipped,
}

/// Report for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    /// 1-based position in the manifest
    pub job: usize,
    pub path: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<FileOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report from a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Whether every job succeeded
    pub success: bool,
    pub dry_run: bool,
    pub policy: FailurePolicy,
    pub jobs: Vec<JobReport>,
}

impl BatchReport {
    /// Number of jobs with the given status
    pub fn count(&self, status: JobStatus) -> usize {
        self.jobs.iter().filter(|j| j.status == status).count()
    }

    /// Jobs that failed, in manifest order
    pub fn failures(&self) -> impl Iterator<Item = &JobReport> {
        self.jobs.iter().filter(|j| j.status == JobStatus::Failed)
    }
}

/// Engine for running manifest jobs against files under one root.
pub struct BatchEngine {
    /// Directory relative job paths are resolved against
    root: NormalizedPath,
    policy: FailurePolicy,
    options: ApplyOptions,
}

impl BatchEngine {
    /// Create an engine that resolves job paths against `root`.
    pub fn new(root: NormalizedPath, policy: FailurePolicy) -> Self {
        Self {
            root,
            policy,
            options: ApplyOptions::default(),
        }
    }

    /// Replace the per-file apply options (dry run, robustness).
    pub fn with_options(mut self, options: ApplyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Validate `manifest` and run its jobs.
    ///
    /// # Errors
    ///
    /// Returns an error only if the manifest itself is invalid, including two
    /// jobs that resolve to the same file under this engine's root; job
    /// failures are recorded in the report.
    pub fn run_manifest(&self, manifest: &Manifest) -> Result<BatchReport> {
        manifest.validate_with_root(&self.root)?;
        Ok(self.run(&manifest.jobs))
    }

    /// Run `jobs` in order under this engine's failure policy.
    pub fn run(&self, jobs: &[Job]) -> BatchReport {
        let mut reports = Vec::with_capacity(jobs.len());
        let mut stopped = false;

        for (idx, job) in jobs.iter().enumerate() {
            let number = idx + 1;
            let path = NormalizedPath::new(&job.path).resolve_against(&self.root);

            if stopped {
                tracing::debug!(job = number, path = %path, "skipping after earlier failure");
                reports.push(JobReport {
                    job: number,
                    path: path.to_string(),
                    status: JobStatus::Skipped,
                    outcome: None,
                    error: None,
                });
                continue;
            }

            tracing::debug!(job = number, path = %path, edits = job.edits.len(), "running job");
            match apply_to_file(&path, &job.edits, &self.options) {
                Ok(outcome) => {
                    let status = if outcome.changed {
                        JobStatus::Applied
                    } else {
                        JobStatus::Unchanged
                    };
                    reports.push(JobReport {
                        job: number,
                        path: path.to_string(),
                        status,
                        outcome: Some(outcome),
                        error: None,
                    });
                }
                Err(e) => {
                    tracing::warn!(job = number, path = %path, error = %e, "job failed");
                    reports.push(JobReport {
                        job: number,
                        path: path.to_string(),
                        status: JobStatus::Failed,
                        outcome: None,
                        error: Some(e.to_string()),
                    });
                    stopped = self.policy == FailurePolicy::FailFast;
                }
            }
        }

        let success = reports.iter().all(|r| r.status != JobStatus::Failed);
        BatchReport {
            success,
            dry_run: self.options.dry_run,
            policy: self.policy,
            jobs: reports,
        }
    }
}
