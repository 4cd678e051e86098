//! # raylib-gen Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the raylib-gen CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handler
//!
//! The whole command tree is assembled here from the `Cli` derive; commands
//! do not register themselves anywhere.
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold a project, answering the name prompt
//! raylib-gen init
//!
//! # Skip git and air, with info-level logs
//! raylib-gen -v init --no-git --no-live-reload
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand logic (init)
mod common; // Shared utilities (fs, process, system)
mod core; // Core infrastructure (errors, config, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "raylib-gen",
    about = "Generate code for raylib in Go",
    long_about = "Scaffold a Go project that opens a raylib window, with go modules,\n\
                  git and air live reload set up for you.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Path to a configuration file (overrides the user config file).
    #[arg(long, global = true, env = "RAYLIB_GEN_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new project
    Init(commands::init::InitArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Init(args) => commands::init::handle_init(args, cli.config.as_deref()),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
