//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use splice_blocks::TokenPair;
use splice_core::FailurePolicy;

/// Splice - structural edits on generated UI source files
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which occurrence of which literal marker to anchor on
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SelectorArgs {
    /// Exact text to search for
    #[arg(short, long)]
    pub marker: String,

    /// Which occurrence of the marker to use (1-based)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub occurrence: usize,
}

/// Open/close tokens for block location
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenArgs {
    /// Element name: `--element span` matches `<span` ... `</span>` [default: div]
    #[arg(long, conflicts_with_all = ["open", "close"])]
    pub element: Option<String>,

    /// Literal open token (requires --close)
    #[arg(long, requires = "close")]
    pub open: Option<String>,

    /// Literal close token (requires --open)
    #[arg(long, requires = "open")]
    pub close: Option<String>,
}

impl TokenArgs {
    pub fn tokens(&self) -> TokenPair {
        match (&self.element, &self.open, &self.close) {
            (Some(element), _, _) => TokenPair::element(element),
            (None, Some(open), Some(close)) => TokenPair::new(open, close),
            _ => TokenPair::element("div"),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert content next to a marker
    ///
    /// Examples:
    ///   splice insert src/App.js -m '{M}' --content '<Banner />'
    ///   splice insert src/App.js -m '</ul>' -n 2 --after --content-file item.jsx
    Insert {
        /// File to edit
        file: PathBuf,

        #[command(flatten)]
        selector: SelectorArgs,

        /// Text to insert
        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,

        /// Read the text to insert from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Insert after the marker instead of before it
        #[arg(long)]
        after: bool,

        /// Print a diff instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the balanced block that starts at a marker
    ///
    /// Examples:
    ///   splice replace-block src/pages/Orders.js -m '<div className="col-md-6">' -n 2 \
    ///       --replacement-file column.jsx
    ///   splice replace-block src/App.js -m 'render() {' --open '{' --close '}' --replacement '...'
    ReplaceBlock {
        /// File to edit
        file: PathBuf,

        #[command(flatten)]
        selector: SelectorArgs,

        #[command(flatten)]
        tokens: TokenArgs,

        /// Replacement text for the whole block
        #[arg(
            long,
            conflicts_with = "replacement_file",
            required_unless_present = "replacement_file"
        )]
        replacement: Option<String>,

        /// Read the replacement text from a file
        #[arg(long)]
        replacement_file: Option<PathBuf>,

        /// Print a diff instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show where the block starting at a marker ends
    Locate {
        /// File to inspect
        file: PathBuf,

        #[command(flatten)]
        selector: SelectorArgs,

        #[command(flatten)]
        tokens: TokenArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run every job in a manifest (TOML, JSON or YAML)
    Apply {
        /// Manifest file; relative job paths resolve against its directory
        manifest: PathBuf,

        /// Run all jobs even after a failure (overrides the manifest)
        #[arg(long, conflicts_with = "fail_fast")]
        keep_going: bool,

        /// Stop at the first failed job (overrides the manifest)
        #[arg(long)]
        fail_fast: bool,

        /// Print diffs instead of writing files
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   splice completions bash > ~/.local/share/bash-completion/completions/splice
    ///   splice completions zsh > ~/.zfunc/_splice
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Policy requested on the command line, if any.
pub fn policy_override(keep_going: bool, fail_fast: bool) -> Option<FailurePolicy> {
    match (keep_going, fail_fast) {
        (true, _) => Some(FailurePolicy::KeepGoing),
        (_, true) => Some(FailurePolicy::FailFast),
        _ => None,
    }
}
