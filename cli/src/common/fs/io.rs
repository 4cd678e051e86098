//! # raylib-gen Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the scaffolding stages. They come
//! in two flavours matching the pipeline's two error classes:
//!
//! - **Lenient**: `create_dir_lenient` logs a failure and reports it through
//!   its return value instead of erroring. Used for the project root and the
//!   `internals/` directory, whose creation failures (most often "already
//!   exists") never stop the pipeline.
//! - **Strict**: everything else returns a `ScaffoldError::FileSystem` on
//!   failure, which the pipeline treats as fatal.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::create_dir_lenient(&root.join("internals"));
//! io::ensure_dir_exists(&root.join("cmd").join(name))?;
//! io::create_file_with_content(&main_go, &rendered)?;
//! io::append_to_existing_file(&root.join(".gitignore"), "tmp/\n")?;
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Permission bits for directories created by the scaffolder.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

/// Creates a single directory, logging instead of failing.
///
/// Returns `true` if the directory was created by this call. A `false`
/// result (already exists, missing parent, permissions) is logged at `warn`
/// and otherwise ignored by callers.
pub fn create_dir_lenient(path: &Path) -> bool {
    match dir_builder(false).create(path) {
        Ok(()) => {
            info!("Created directory: {:?}", path);
            true
        }
        Err(e) => {
            warn!("Could not create directory {:?}: {}", path, e);
            false
        }
    }
}

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents (like `mkdir -p`). If the
/// path already exists but is not a directory, a `ScaffoldError::FileSystem`
/// is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        dir_builder(true).create(path).map_err(|e| {
            anyhow!(ScaffoldError::FileSystem(format!(
                "Failed to create directory {:?}: {}",
                path, e
            )))
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Error reading {:?}: {}",
            path, e
        )))
    })
}

/// Creates (or truncates) `path` and writes `content` into it.
///
/// Opening and writing are reported as separate failures so the message
/// says which of the two went wrong. The parent directory must already exist.
pub fn create_file_with_content(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Error creating {:?}: {}",
            path, e
        )))
    })?;
    file.write_all(content.as_bytes()).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Error writing to {:?}: {}",
            path, e
        )))
    })?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Appends `content` to a file that must already exist.
///
/// The file is never created here; a missing file is an error.
pub fn append_to_existing_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(path).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Error opening {:?}: {}",
            path, e
        )))
    })?;
    file.write_all(content.as_bytes()).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Error writing to {:?}: {}",
            path, e
        )))
    })?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}
