//! # raylib-gen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout raylib-gen. Failures
//! fall into two classes:
//!
//! - **Best-effort** tool invocations never produce an error. They report a
//!   [`ToolOutcome`](crate::common::process::ToolOutcome) that the pipeline
//!   logs and moves past.
//! - **Fatal** failures (file I/O, a missing mandatory tool, a broken config
//!   file) surface as `ScaffoldError` values wrapped in `anyhow::Error` and
//!   bubble up to `main`, which prints them and exits with status 1.
//!
//! ## Architecture
//!
//! - `ScaffoldError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if which::which("air").is_err() {
//!     return Err(ScaffoldError::ToolMissing { tool: "air".into(), hint: "...".into() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for raylib-gen.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("'{tool}' is not installed. {hint}")]
    ToolMissing { tool: String, hint: String },

    #[error("Failed to read project name: {0}")]
    Prompt(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ScaffoldError::Config("tools.watcher must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: tools.watcher must not be empty"
        );

        let missing = ScaffoldError::ToolMissing {
            tool: "air".into(),
            hint: "Please install it to continue.".into(),
        };
        assert_eq!(
            missing.to_string(),
            "'air' is not installed. Please install it to continue."
        );

        let fs_err = ScaffoldError::FileSystem("Error opening .gitignore file".into());
        assert_eq!(
            fs_err.to_string(),
            "Filesystem error: Error opening .gitignore file"
        );
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let err: anyhow::Error = ScaffoldError::ToolMissing {
            tool: "air".into(),
            hint: String::new(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ToolMissing { .. })
        ));
    }
}
