//! # Version-Control Stage
//!
//! File: cli/src/commands/init/vcs.rs
//!
//! Sets up git for the new project when git is installed:
//!
//! 1. `git init` and `git branch -M main` (best-effort).
//! 2. `npx gitignore go` to generate a Go `.gitignore`, only if `npx` is found.
//! 3. Append `tmp/` to `.gitignore` so live-reload build output is never
//!    tracked. This write is mandatory: if `.gitignore` cannot be opened
//!    (including when the generator did not produce one) the stage fails.
//!
//! If git itself is missing the whole stage is skipped and no `.gitignore`
//! is touched.
//!
use crate::common::fs::io;
use crate::common::process::{log_outcome, run_tool, ToolOutcome};
use crate::common::system;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Ignore file maintained by this stage.
pub const IGNORE_FILE: &str = ".gitignore";
/// Pattern appended to the ignore file (live-reload build output).
pub const IGNORE_PATTERN: &str = "tmp/\n";

/// What the version-control stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsReport {
    /// The version-control tool was not found; nothing was done.
    Skipped,
    Completed {
        init: ToolOutcome,
        rename_branch: ToolOutcome,
        ignore_generator: ToolOutcome,
    },
}

/// Runs the version-control stage in `root`.
pub fn init_version_control(config: &Config, root: &Path) -> Result<VcsReport> {
    let Some(vcs) = system::find_tool(&config.tools.vcs) else {
        info!(
            "'{}' not found on PATH, skipping version control setup.",
            config.tools.vcs
        );
        return Ok(VcsReport::Skipped);
    };

    println!("Initializing git repository...");
    let init = run_tool(&vcs, &["init"], root);
    log_outcome("repository init", &init);

    println!("Checking out to {} branch...", config.project.default_branch);
    let rename_branch = run_tool(
        &vcs,
        &["branch", "-M", config.project.default_branch.as_str()],
        root,
    );
    log_outcome("branch rename", &rename_branch);

    let ignore_generator = generate_ignore_file(config, root);

    println!("Updating .gitignore file...");
    io::append_to_existing_file(&root.join(IGNORE_FILE), IGNORE_PATTERN)
        .context("Error updating .gitignore file")?;

    Ok(VcsReport::Completed {
        init,
        rename_branch,
        ignore_generator,
    })
}

fn generate_ignore_file(config: &Config, root: &Path) -> ToolOutcome {
    let Some(generator) = system::find_tool(&config.tools.ignore_generator) else {
        info!(
            "'{}' not found on PATH, no .gitignore will be generated.",
            config.tools.ignore_generator
        );
        return ToolOutcome::Absent;
    };
    println!("Creating .gitignore file...");
    let outcome = run_tool(
        &generator,
        &["gitignore", config.project.ignore_language.as_str()],
        root,
    );
    log_outcome("ignore file generation", &outcome);
    outcome
}
