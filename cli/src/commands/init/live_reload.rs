//! # Live-Reload Stage
//!
//! File: cli/src/commands/init/live_reload.rs
//!
//! Wires up the `air` watcher. Unlike every other tool the pipeline drives,
//! `air` is mandatory once this stage runs: if it is not on `PATH` the stage
//! fails before `.air.toml` is read or written.
//!
//! After `air init` writes its default config, the build command is replaced
//! so air compiles every entry point under `cmd/` into `./tmp/main`. The
//! replacement is a plain regex substitution over the whole file: every
//! occurrence of `cmd = "<anything on one line>"` becomes the fixed command.
//! Applying it again is a no-op.
//!
use crate::common::fs::io;
use crate::common::process::{log_outcome, run_tool, ToolOutcome};
use crate::common::system;
use crate::core::config::Config;
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Config file produced by `air init`.
pub const AIR_CONFIG_FILE: &str = ".air.toml";
/// Build command written into the watcher config.
pub const BUILD_COMMAND: &str = "go build -o ./tmp/main cmd/**/main.go";

const BUILD_COMMAND_PATTERN: &str = r#"cmd = ".*""#;

fn build_command_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BUILD_COMMAND_PATTERN).expect("build command pattern is valid"))
}

/// What the live-reload stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveReloadReport {
    pub init: ToolOutcome,
    /// Number of `cmd = "..."` lines rewritten.
    pub replaced: usize,
}

/// Replaces every build-command assignment in `content`.
///
/// Returns the rewritten text and how many assignments were replaced.
pub fn rewrite_build_command(content: &str) -> (String, usize) {
    let re = build_command_regex();
    let replaced = re.find_iter(content).count();
    let line = format!(r#"cmd = "{}""#, BUILD_COMMAND);
    (re.replace_all(content, NoExpand(&line)).into_owned(), replaced)
}

/// Reads `path`, rewrites the build command, and writes it back in place.
pub fn patch_config_file(path: &Path) -> Result<usize> {
    let content = io::read_file_to_string(path).context("Error reading .air.toml file")?;
    let (patched, replaced) = rewrite_build_command(&content);
    if replaced == 0 {
        warn!("No build command found in {:?}; file left as is.", path);
    }
    io::create_file_with_content(path, &patched).context("Error writing .air.toml file")?;
    debug!("Rewrote {} build command line(s) in {:?}", replaced, path);
    Ok(replaced)
}

/// Runs the live-reload stage in `root`.
pub fn init_live_reload(config: &Config, root: &Path) -> Result<LiveReloadReport> {
    let Some(watcher) = system::find_tool(&config.tools.watcher) else {
        return Err(anyhow!(ScaffoldError::ToolMissing {
            tool: config.tools.watcher.clone(),
            hint: "Please install it to continue, or pass --no-live-reload.".to_string(),
        }));
    };

    println!("Initializing air...");
    let init = run_tool(&watcher, &["init"], root);
    log_outcome("watcher init", &init);

    println!("Editing .air.toml file...");
    let replaced = patch_config_file(&root.join(AIR_CONFIG_FILE))?;
    Ok(LiveReloadReport { init, replaced })
}
