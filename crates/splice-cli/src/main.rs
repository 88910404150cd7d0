//! Splice CLI
//!
//! Structural edits on generated UI source files: insert at a marker,
//! replace a balanced block, or run a manifest of such edits.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, policy_override};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} structural edits for generated UI sources", "splice".green().bold());
            println!();
            println!("Run {} for available commands.", "splice --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Insert {
            file,
            selector,
            content,
            content_file,
            after,
            dry_run,
        } => {
            let content = commands::edit::read_text_arg(content, content_file.as_deref(), "content")?;
            commands::run_insert(&file, selector, content, after, dry_run)
        }
        Commands::ReplaceBlock {
            file,
            selector,
            tokens,
            replacement,
            replacement_file,
            dry_run,
        } => {
            let replacement = commands::edit::read_text_arg(
                replacement,
                replacement_file.as_deref(),
                "replacement",
            )?;
            commands::run_replace_block(&file, selector, tokens.tokens(), replacement, dry_run)
        }
        Commands::Locate {
            file,
            selector,
            tokens,
            json,
        } => commands::run_locate(&file, &selector, &tokens.tokens(), json),
        Commands::Apply {
            manifest,
            keep_going,
            fail_fast,
            dry_run,
            json,
        } => commands::run_apply(&manifest, policy_override(keep_going, fail_fast), dry_run, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "splice", &mut std::io::stdout());
            Ok(())
        }
    }
}
