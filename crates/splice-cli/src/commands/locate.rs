//! Locate command implementation
//!
//! Reports the span of the balanced block that starts at a marker, without
//! editing anything. Useful for checking a selector before replacing.

use std::path::Path;

use colored::Colorize;
use serde_json::json;
use splice_blocks::{TokenPair, locate_nth_block};
use splice_fs::{NormalizedPath, io};

use crate::cli::SelectorArgs;
use crate::error::Result;

/// Run the locate command
pub fn run_locate(file: &Path, selector: &SelectorArgs, tokens: &TokenPair, json: bool) -> Result<()> {
    let path = NormalizedPath::try_new(file)?;
    let text = io::read_text(&path)?;

    let span = locate_nth_block(&text, &selector.marker, selector.occurrence, tokens)?;
    let (start_line, end_line) = span.lines(&text);

    if json {
        let output = json!({
            "path": path.as_str(),
            "start": span.start,
            "end": span.end,
            "length": span.len(),
            "start_line": start_line,
            "end_line": end_line,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} bytes {} (lines {}-{})",
            "Block".blue().bold(),
            path.as_str().yellow(),
            span.to_string().cyan(),
            start_line,
            end_line
        );
    }
    Ok(())
}
