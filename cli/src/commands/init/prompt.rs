//! # Project Name Prompt
//!
//! File: cli/src/commands/init/prompt.rs
//!
//! Asks for the project name interactively. The answer is taken as typed:
//! only the line terminator is stripped, and nothing is validated. An empty
//! answer (or EOF) produces an empty name.
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use std::io::{BufRead, Write};

/// Question printed before reading the name.
pub const PROMPT: &str = "What is the name of the project? ";

/// Writes [`PROMPT`] to `output` and reads one line from `input`.
pub fn read_project_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| anyhow!(ScaffoldError::Prompt(e.to_string())))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| anyhow!(ScaffoldError::Prompt(e.to_string())))?;

    Ok(strip_line_ending(line))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
