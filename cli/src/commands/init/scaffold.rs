//! # Project Directory Scaffolding
//!
//! File: cli/src/commands/init/scaffold.rs
//!
//! Creates the project root and moves the process into it. Creation is
//! lenient: if the directory cannot be made (most commonly because it
//! already exists) the pipeline still tries to enter it and carry on. Nothing
//! created here is ever removed, even if a later stage fails.
//!
use crate::common::fs::io;
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Creates `<base>/<name>` and returns its path, whether or not creation succeeded.
pub fn create_project_dir(base: &Path, name: &str) -> PathBuf {
    let root = base.join(name);
    io::create_dir_lenient(&root);
    root
}

/// Makes `root` the process working directory.
pub fn enter_project_dir(root: &Path) -> Result<()> {
    env::set_current_dir(root).map_err(|e| {
        anyhow!(ScaffoldError::FileSystem(format!(
            "Could not enter project directory {:?}: {}",
            root, e
        )))
    })?;
    info!("Working directory is now {:?}", root);
    Ok(())
}
