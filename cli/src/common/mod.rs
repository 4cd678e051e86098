//! # raylib-gen Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not specific to a single command, kept apart from
//! command logic (`commands::`) and core infrastructure (`core::`):
//!
//! - **`fs`**: Directory creation and file read/write/append helpers.
//! - **`process`**: Blocking execution of external tools and the `ToolOutcome` type.
//! - **`system`**: Locating tools on `PATH`.
//!
//! ```rust
//! use crate::common::{fs::io, process, system};
//!
//! if let Some(git) = system::find_tool("git") {
//!     let outcome = process::run_tool(&git, &["init"], &root);
//!     process::log_outcome("repository init", &outcome);
//! }
//! io::append_to_existing_file(&root.join(".gitignore"), "tmp/\n")?;
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Running external tools and classifying their results.
pub mod process;
/// Host inspection (tool discovery on PATH).
pub mod system;
