//! # raylib-gen System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host inspection helpers. For now this is tool discovery: resolving an
//! executable name against `PATH` the same way a shell would, so stages can
//! decide up front whether an optional tool is there to run.
//!
use std::path::PathBuf;
use tracing::debug;

/// Resolves `tool` to an executable path, or `None` if it is not installed.
///
/// Names containing a path separator are checked directly rather than
/// searched for on `PATH`.
pub fn find_tool(tool: &str) -> Option<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            debug!("Found '{}' at {}", tool, path.display());
            Some(path)
        }
        Err(e) => {
            debug!("'{}' not found: {}", tool, e);
            None
        }
    }
}
