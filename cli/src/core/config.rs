//! # raylib-gen Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional configuration file that names the external tools and
//! the project constants used by the scaffolding pipeline. Every field has a
//! default, so running without any configuration file behaves exactly like
//! the stock tool (`go`, `git`, `npx`, `air`, raylib-go, branch `main`).
//!
//! ## Sources
//!
//! The first source found wins; files are not merged:
//! 1. An explicit path from `--config` or `RAYLIB_GEN_CONFIG` (must exist)
//! 2. The user file `<config_dir>/raylib-gen/config.toml`
//! 3. Built-in defaults
//!
//! ## Examples
//!
//! ```toml
//! [tools]
//! watcher = "/opt/go/bin/air"
//!
//! [project]
//! default_branch = "trunk"
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Top-level configuration, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub project: ProjectConfig,
}

/// Program names (or paths) of the external tools the pipeline drives.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Module manager used for `mod init`, `get` and `mod tidy`.
    #[serde(default = "default_module_manager")]
    pub module_manager: String,
    /// Version-control system.
    #[serde(default = "default_vcs")]
    pub vcs: String,
    /// Runner for the ignore-file generator (invoked as `<runner> gitignore <lang>`).
    #[serde(default = "default_ignore_generator")]
    pub ignore_generator: String,
    /// Live-reload watcher.
    #[serde(default = "default_watcher")]
    pub watcher: String,
}

/// Constants baked into the generated project.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Module path of the graphics library fetched into every project.
    #[serde(default = "default_graphics_module")]
    pub graphics_module: String,
    /// Name the default branch is renamed to after `git init`.
    #[serde(default = "default_branch")]
    pub default_branch: String,
    /// Language identifier passed to the ignore-file generator.
    #[serde(default = "default_ignore_language")]
    pub ignore_language: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            module_manager: default_module_manager(),
            vcs: default_vcs(),
            ignore_generator: default_ignore_generator(),
            watcher: default_watcher(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            graphics_module: default_graphics_module(),
            default_branch: default_branch(),
            ignore_language: default_ignore_language(),
        }
    }
}

fn default_module_manager() -> String {
    "go".to_string()
}
fn default_vcs() -> String {
    "git".to_string()
}
fn default_ignore_generator() -> String {
    "npx".to_string()
}
fn default_watcher() -> String {
    "air".to_string()
}
fn default_graphics_module() -> String {
    "github.com/gen2brain/raylib-go/raylib".to_string()
}
fn default_branch() -> String {
    "main".to_string()
}
fn default_ignore_language() -> String {
    "go".to_string()
}

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads the configuration, preferring `explicit_path` when given.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let config = match explicit_path {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            if !expanded.is_file() {
                return Err(anyhow!(ScaffoldError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    expanded.display()
                ))));
            }
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "raylib-gen") else {
        debug!("Could not determine user config directory, using defaults.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    let fields = [
        ("tools.module_manager", &config.tools.module_manager),
        ("tools.vcs", &config.tools.vcs),
        ("tools.ignore_generator", &config.tools.ignore_generator),
        ("tools.watcher", &config.tools.watcher),
        ("project.graphics_module", &config.project.graphics_module),
        ("project.default_branch", &config.project.default_branch),
        ("project.ignore_language", &config.project.ignore_language),
    ];
    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "'{}' must not be empty.",
                key
            ))));
        }
    }
    Ok(())
}
