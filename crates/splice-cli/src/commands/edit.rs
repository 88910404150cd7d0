//! Single-file edit commands: `insert` and `replace-block`.

use std::path::Path;

use colored::Colorize;
use splice_blocks::{Placement, TokenPair};
use splice_core::{ApplyOptions, Edit, FileOutcome, apply_to_file};
use splice_fs::{NormalizedPath, io};

use crate::cli::SelectorArgs;
use crate::error::{CliError, Result};

/// Inline text, or the contents of a file.
pub fn read_text_arg(inline: Option<String>, file: Option<&Path>, what: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(io::read_text(&NormalizedPath::try_new(path)?)?),
        (None, None) => Err(CliError::user(format!("no {what} given"))),
    }
}

/// Run the insert command
pub fn run_insert(
    file: &Path,
    selector: SelectorArgs,
    content: String,
    after: bool,
    dry_run: bool,
) -> Result<()> {
    let placement = if after {
        Placement::After
    } else {
        Placement::Before
    };
    let edit = Edit::Insert {
        marker: selector.marker,
        occurrence: selector.occurrence,
        placement,
        content,
    };
    run_edit(file, edit, dry_run)
}

/// Run the replace-block command
pub fn run_replace_block(
    file: &Path,
    selector: SelectorArgs,
    tokens: TokenPair,
    replacement: String,
    dry_run: bool,
) -> Result<()> {
    let edit = Edit::ReplaceBlock {
        marker: selector.marker,
        occurrence: selector.occurrence,
        tokens,
        replacement,
    };
    run_edit(file, edit, dry_run)
}

fn run_edit(file: &Path, edit: Edit, dry_run: bool) -> Result<()> {
    let path = NormalizedPath::try_new(file)?;
    tracing::debug!(path = %path, %edit, dry_run, "running single edit");

    let options = ApplyOptions {
        dry_run,
        ..ApplyOptions::default()
    };
    let outcome = apply_to_file(&path, std::slice::from_ref(&edit), &options)?;
    print_outcome(&outcome, dry_run);
    Ok(())
}

/// Print a one-line summary of a file outcome, plus the diff on dry runs
pub fn print_outcome(outcome: &FileOutcome, dry_run: bool) {
    if let Some(diff) = &outcome.diff {
        print_colored_diff(diff);
    }

    let (label, detail) = match (outcome.changed, dry_run) {
        (false, _) => ("unchanged".normal(), "edits produced identical text"),
        (true, true) => ("would edit".yellow().bold(), "dry run, file not written"),
        (true, false) => ("edited".green().bold(), "written"),
    };
    println!(
        "{} {} ({}, {})",
        label,
        outcome.path.yellow(),
        outcome.summary.to_string().cyan(),
        detail
    );
}

/// Print a unified diff with added lines green and removed lines red
pub fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
