//! # raylib-gen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Everything currently lives in the
//! `io` submodule: directory creation (lenient and strict), whole-file reads,
//! create-and-write, and append-only writes.
//!
//! Import from the submodule directly:
//!
//! ```rust
//! use crate::common::fs::io;
//! io::ensure_dir_exists(&path)?;
//! ```
//!

/// Directory creation and file read/write/append helpers.
pub mod io;
