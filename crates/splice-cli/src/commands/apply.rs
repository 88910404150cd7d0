//! Apply command implementation
//!
//! Runs every job of a manifest and prints a per-job report.

use std::path::Path;

use colored::Colorize;
use splice_core::{
    ApplyOptions, BatchEngine, BatchReport, FailurePolicy, JobStatus, Manifest,
};
use splice_fs::NormalizedPath;

use super::edit::print_colored_diff;
use crate::error::{CliError, Result};

/// Run the apply command
///
/// `policy` overrides the manifest's own policy when given. Returns an error
/// after printing the report if any job failed.
pub fn run_apply(
    manifest_path: &Path,
    policy: Option<FailurePolicy>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let manifest_path = NormalizedPath::try_new(manifest_path)?;
    let manifest = Manifest::load(&manifest_path)?;

    let root = manifest_path
        .parent()
        .unwrap_or_else(|| NormalizedPath::new("."));
    let policy = policy.unwrap_or(manifest.policy);

    let options = ApplyOptions {
        dry_run,
        ..ApplyOptions::default()
    };
    let engine = BatchEngine::new(root, policy).with_options(options);
    let report = engine.run_manifest(&manifest)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.success {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} job(s) failed",
            report.count(JobStatus::Failed),
            report.jobs.len()
        )))
    }
}

fn print_report(report: &BatchReport) {
    for job in &report.jobs {
        if let Some(diff) = job.outcome.as_ref().and_then(|o| o.diff.as_deref()) {
            print_colored_diff(diff);
        }

        let label = match job.status {
            JobStatus::Applied if report.dry_run => "WOULD EDIT".yellow().bold(),
            JobStatus::Applied => "EDITED".green().bold(),
            JobStatus::Unchanged => "UNCHANGED".normal(),
            JobStatus::Failed => "FAILED".red().bold(),
            JobStatus::Skipped => "SKIPPED".dimmed(),
        };
        let summary = job
            .outcome
            .as_ref()
            .map(|o| format!(" ({})", o.summary))
            .unwrap_or_default();
        println!("{:>10} {}{}", label, job.path.yellow(), summary.cyan());

        if let Some(error) = &job.error {
            println!("           {} {}", "!".red(), error);
        }
    }

    println!();
    let applied = report.count(JobStatus::Applied);
    let failed = report.count(JobStatus::Failed);
    let skipped = report.count(JobStatus::Skipped);
    if report.success {
        println!(
            "{} {} job(s) applied, {} unchanged",
            "OK".green().bold(),
            applied,
            report.count(JobStatus::Unchanged)
        );
    } else {
        println!(
            "{} {} applied, {} failed, {} skipped",
            "Errors".red().bold(),
            applied,
            failed,
            skipped
        );
    }
}
