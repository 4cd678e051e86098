//! # Source Generation Stage
//!
//! File: cli/src/commands/init/source.rs
//!
//! Lays out the Go source tree and writes the entry point:
//!
//! ```text
//! <root>/
//! ├── internals/
//! └── cmd/<name>/main.go
//! ```
//!
//! `internals/` is created leniently. Failing to create `cmd/<name>/` or to
//! create/write `main.go` is fatal. `go mod tidy` runs afterwards so the
//! manifest picks up the raylib import.
//!
use super::module;
use crate::common::fs::io;
use crate::common::process::ToolOutcome;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory for project-internal packages.
pub const INTERNALS_DIR: &str = "internals";
/// Parent directory of per-binary entry points.
pub const CMD_DIR: &str = "cmd";
/// Name of the generated entry-point file.
pub const MAIN_FILE: &str = "main.go";

/// What the source stage produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub main_file: PathBuf,
    pub tidy: ToolOutcome,
}

/// Relative location of the entry point for project `name`.
pub fn main_file_path(name: &str) -> PathBuf {
    Path::new(CMD_DIR).join(name).join(MAIN_FILE)
}

/// Writes the source tree under `root` without touching the module manager.
pub fn write_sources(root: &Path, name: &str) -> Result<PathBuf> {
    io::create_dir_lenient(&root.join(INTERNALS_DIR));

    println!("Creating cmd folder...");
    io::ensure_dir_exists(&root.join(CMD_DIR).join(name))
        .context("Error creating cmd folder")?;

    let main_file = root.join(main_file_path(name));
    let rendered = templating::render_main_go(name)?;
    println!("Creating main.go file...");
    println!("Writing to main.go file...");
    io::create_file_with_content(&main_file, &rendered).context("Error writing main.go file")?;
    Ok(main_file)
}

/// Runs the source stage: write the tree, then tidy the module.
pub fn generate_sources(config: &Config, root: &Path, name: &str) -> Result<SourceReport> {
    let main_file = write_sources(root, name)?;
    let tidy = module::tidy_module(config, root);
    Ok(SourceReport { main_file, tidy })
}
