//! # raylib-gen Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external tools (`go`, `git`, `npx`, `air`) as blocking child
//! processes and classifies the result as a [`ToolOutcome`]. Nothing here
//! returns an error: every invocation made through this module is
//! best-effort, and the caller decides whether an outcome is worth a warning.
//!
//! Children inherit stdin/stdout/stderr so the user sees tool output as it
//! happens. No timeout is applied; a hung tool hangs the pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{run_tool, log_outcome};
//!
//! let outcome = run_tool("go", &["mod", "init", "demo"], &root);
//! log_outcome("go mod init", &outcome);
//! ```
//!
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Result of a single best-effort tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool ran and exited with status 0.
    Succeeded,
    /// The tool could not be found (not on `PATH`, or spawning reported it missing).
    Absent,
    /// The tool ran (or failed to spawn for another reason) without succeeding.
    /// `code` is `None` when there is no exit code, e.g. killed by a signal.
    Failed { code: Option<i32> },
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Succeeded)
    }
}

impl fmt::Display for ToolOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolOutcome::Succeeded => write!(f, "succeeded"),
            ToolOutcome::Absent => write!(f, "tool not found"),
            ToolOutcome::Failed { code: Some(code) } => write!(f, "exited with status {}", code),
            ToolOutcome::Failed { code: None } => write!(f, "terminated without an exit status"),
        }
    }
}

/// Runs `program` with `args` in `cwd` and waits for it to exit.
pub fn run_tool<S: AsRef<std::ffi::OsStr>>(program: S, args: &[&str], cwd: &Path) -> ToolOutcome {
    let program = program.as_ref();
    debug!("Running {:?} {:?} in {:?}", program, args, cwd);
    match Command::new(program).args(args).current_dir(cwd).status() {
        Ok(status) if status.success() => ToolOutcome::Succeeded,
        Ok(status) => ToolOutcome::Failed {
            code: status.code(),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{:?} could not be spawned: {}", program, e);
            ToolOutcome::Absent
        }
        Err(e) => {
            debug!("{:?} could not be spawned: {}", program, e);
            ToolOutcome::Failed { code: None }
        }
    }
}

/// Logs an outcome as it happens. Failures are summarized again at `warn`
/// once the pipeline finishes, so here they only go to `info`.
pub fn log_outcome(step: &str, outcome: &ToolOutcome) {
    if outcome.is_success() {
        debug!("{}: {}", step, outcome);
    } else {
        info!("{}: {} (continuing)", step, outcome);
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_program_is_absent() {
        let dir = tempdir().unwrap();
        let outcome = run_tool("raylib-gen-no-such-tool-4242", &[], dir.path());
        assert_eq!(outcome, ToolOutcome::Absent);
        assert!(!outcome.is_success());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_classified() {
        let dir = tempdir().unwrap();
        assert_eq!(run_tool("true", &[], dir.path()), ToolOutcome::Succeeded);
        assert_eq!(
            run_tool("false", &[], dir.path()),
            ToolOutcome::Failed { code: Some(1) }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_given_directory() {
        let dir = tempdir().unwrap();
        let outcome = run_tool("sh", &["-c", "echo here > marker"], dir.path());
        assert!(outcome.is_success());
        assert!(dir.path().join("marker").is_file());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ToolOutcome::Succeeded.to_string(), "succeeded");
        assert_eq!(ToolOutcome::Absent.to_string(), "tool not found");
        assert_eq!(
            ToolOutcome::Failed { code: Some(2) }.to_string(),
            "exited with status 2"
        );
    }
}
