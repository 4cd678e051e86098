//! # raylib-gen Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the subcommands of the CLI so `main.rs` can route to them.
//! Each command module defines its own clap arguments struct and a handler
//! function that consumes it.
//!
//! ## Commands
//!
//! - `init`: Scaffold a new Go + raylib project
//!

/// Project scaffolding. Includes the prompt, module, git, source and air stages.
pub mod init;
