//! # raylib-gen Init Command
//!
//! File: cli/src/commands/init/mod.rs
//!
//! ## Overview
//!
//! Implements `raylib-gen init`, which scaffolds a new Go + raylib project in
//! a directory named after the project. The command is one linear pipeline:
//!
//! 1. Ask for the project name (or take `--name`)
//! 2. Create `<name>/` and make it the working directory
//! 3. `go mod init <name>`
//! 4. `go get -v -u github.com/gen2brain/raylib-go/raylib`
//! 5. git setup and `.gitignore` (unless `--no-git`)
//! 6. Write `internals/` and `cmd/<name>/main.go`, then `go mod tidy`
//! 7. air setup (unless `--no-live-reload`)
//!
//! ## Error Handling
//!
//! Tool invocations are best-effort and recorded in the returned
//! [`PipelineReport`]. File I/O failures and a missing `air` abort the
//! pipeline; whatever was already created stays on disk.
//!
//! ## Usage
//!
//! ```bash
//! raylib-gen init
//! raylib-gen init --no-git --no-live-reload
//! raylib-gen init --name pong
//! ```
//!
use crate::common::process::ToolOutcome;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

mod live_reload;
mod module;
mod prompt;
mod scaffold;
mod source;
mod vcs;

pub use live_reload::LiveReloadReport;
pub use source::SourceReport;
pub use vcs::VcsReport;

/// Arguments for `raylib-gen init`.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Initialize the project without git.
    #[arg(long)]
    no_git: bool,

    /// Initialize the project without air.
    #[arg(long)]
    no_live_reload: bool,

    /// Project name; when omitted it is read interactively.
    #[arg(long)]
    name: Option<String>,
}

/// Everything the pipeline needs to know about the project being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub name: String,
    pub skip_vcs: bool,
    pub skip_live_reload: bool,
}

/// Per-stage results of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub root: PathBuf,
    pub module_init: ToolOutcome,
    pub dependency_fetch: ToolOutcome,
    /// `None` when `--no-git` was given.
    pub vcs: Option<VcsReport>,
    pub source: SourceReport,
    /// `None` when `--no-live-reload` was given.
    pub live_reload: Option<LiveReloadReport>,
}

impl PipelineReport {
    /// Best-effort steps that ran (or were attempted) without succeeding.
    pub fn unsuccessful_steps(&self) -> Vec<(&'static str, &ToolOutcome)> {
        let mut steps = vec![
            ("go mod init", &self.module_init),
            ("go get", &self.dependency_fetch),
        ];
        if let Some(VcsReport::Completed {
            init,
            rename_branch,
            ignore_generator,
        }) = &self.vcs
        {
            steps.push(("git init", init));
            steps.push(("git branch", rename_branch));
            steps.push(("gitignore generation", ignore_generator));
        }
        steps.push(("go mod tidy", &self.source.tidy));
        if let Some(live_reload) = &self.live_reload {
            steps.push(("air init", &live_reload.init));
        }
        steps.retain(|(_, outcome)| !outcome.is_success());
        steps
    }
}

/// Handler for `raylib-gen init`.
pub fn handle_init(args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling init command...");
    let config = config::load_config(config_path)?;

    let name = match args.name {
        Some(name) => name,
        None => prompt::read_project_name(io::stdin().lock(), io::stdout())?,
    };
    debug!("Project name: {:?}", name);

    let options = ProjectOptions {
        name,
        skip_vcs: args.no_git,
        skip_live_reload: args.no_live_reload,
    };
    let base = env::current_dir().context("Failed to get current directory")?;
    let report = run_pipeline(&options, &config, &base)?;
    debug!("Pipeline report: {:?}", report);

    for (step, outcome) in report.unsuccessful_steps() {
        warn!("{} did not complete: {}", step, outcome);
    }
    if let Some(live_reload) = &report.live_reload {
        debug!("Rewrote {} build command line(s)", live_reload.replaced);
    }
    info!(
        "Project created in {}, entry point {}",
        report.root.display(),
        report.source.main_file.display()
    );
    println!("Project initialized");
    Ok(())
}

/// Scaffolds `options.name` under `base`, leaving the process inside the new project.
pub fn run_pipeline(options: &ProjectOptions, config: &Config, base: &Path) -> Result<PipelineReport> {
    let name = options.name.as_str();

    let root = scaffold::create_project_dir(base, name);
    scaffold::enter_project_dir(&root)?;

    let module_init = module::init_module(config, name, &root);
    let dependency_fetch = module::fetch_graphics_library(config, &root);

    let vcs = if options.skip_vcs {
        info!("Skipping version control setup (--no-git).");
        None
    } else {
        Some(vcs::init_version_control(config, &root)?)
    };

    let source = source::generate_sources(config, &root, name)?;

    let live_reload = if options.skip_live_reload {
        info!("Skipping live reload setup (--no-live-reload).");
        None
    } else {
        Some(live_reload::init_live_reload(config, &root)?)
    };

    Ok(PipelineReport {
        root,
        module_init,
        dependency_fetch,
        vcs,
        source,
        live_reload,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs::try_parse_from(["init"]).unwrap();
        assert!(!args.no_git);
        assert!(!args.no_live_reload);
        assert!(args.name.is_none());
    }

    #[test]
    fn test_init_args_flags() {
        let args =
            InitArgs::try_parse_from(["init", "--no-git", "--no-live-reload", "--name", "pong"])
                .unwrap();
        assert!(args.no_git);
        assert!(args.no_live_reload);
        assert_eq!(args.name.as_deref(), Some("pong"));
    }

    fn report(vcs: Option<VcsReport>) -> PipelineReport {
        PipelineReport {
            root: PathBuf::from("demo"),
            module_init: ToolOutcome::Succeeded,
            dependency_fetch: ToolOutcome::Failed { code: Some(1) },
            vcs,
            source: SourceReport {
                main_file: PathBuf::from("demo/cmd/demo/main.go"),
                tidy: ToolOutcome::Succeeded,
            },
            live_reload: Some(LiveReloadReport {
                init: ToolOutcome::Succeeded,
                replaced: 1,
            }),
        }
    }

    #[test]
    fn test_unsuccessful_steps() {
        let skipped = report(Some(VcsReport::Skipped));
        assert_eq!(
            skipped.unsuccessful_steps(),
            vec![("go get", &ToolOutcome::Failed { code: Some(1) })]
        );

        let with_git = report(Some(VcsReport::Completed {
            init: ToolOutcome::Succeeded,
            rename_branch: ToolOutcome::Succeeded,
            ignore_generator: ToolOutcome::Absent,
        }));
        let names: Vec<_> = with_git
            .unsuccessful_steps()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["go get", "gitignore generation"]);
    }

    #[test]
    fn test_init_args_rejects_positional() {
        assert!(InitArgs::try_parse_from(["init", "demo"]).is_err());
    }
}
