//! # Go Module Steps
//!
//! File: cli/src/commands/init/module.rs
//!
//! Wraps the three module-manager invocations the pipeline makes: creating
//! the manifest, fetching the graphics library, and tidying dependencies
//! once the source file exists. There is no presence check for the module
//! manager; a missing tool simply shows up as [`ToolOutcome::Absent`].
//!
use crate::common::process::{log_outcome, run_tool, ToolOutcome};
use crate::core::config::Config;
use std::path::Path;

/// `go mod init <name>`
pub fn init_module(config: &Config, name: &str, root: &Path) -> ToolOutcome {
    println!("Preparing go.mod file...");
    let outcome = run_tool(&config.tools.module_manager, &["mod", "init", name], root);
    log_outcome("module init", &outcome);
    outcome
}

/// `go get -v -u <graphics module>`
pub fn fetch_graphics_library(config: &Config, root: &Path) -> ToolOutcome {
    println!("Installing raylib-go...");
    let outcome = run_tool(
        &config.tools.module_manager,
        &["get", "-v", "-u", config.project.graphics_module.as_str()],
        root,
    );
    log_outcome("dependency fetch", &outcome);
    outcome
}

/// `go mod tidy`
pub fn tidy_module(config: &Config, root: &Path) -> ToolOutcome {
    let outcome = run_tool(&config.tools.module_manager, &["mod", "tidy"], root);
    log_outcome("module tidy", &outcome);
    outcome
}
