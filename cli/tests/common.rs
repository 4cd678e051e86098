//! # raylib-gen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. The scaffolding pipeline shells
//! out to `go`, `git`, `npx` and `air`, so tests build a sandbox: a scratch
//! working directory plus a `bin/` directory of fake tools written as small
//! `sh` scripts. `PATH` is pointed only at that `bin/`, which lets each test
//! decide exactly which tools "exist". Every fake tool appends its argv to a
//! log file so tests can assert on what was invoked.
//!
//! The fakes only use shell builtins, since nothing else is on `PATH`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Content written by the fake `air init`, mirroring air's default layout.
pub const FAKE_AIR_CONFIG: &str = r#"root = "."
tmp_dir = "tmp"

[build]
  bin = "./tmp/main"
  cmd = "go build -o ./tmp/main ."
  delay = 1000
  pre_cmd = []
"#;

/// Fake tools a sandbox can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeTool {
    Go,
    Git,
    Npx,
    Air,
}

impl FakeTool {
    pub const ALL: [FakeTool; 4] = [FakeTool::Go, FakeTool::Git, FakeTool::Npx, FakeTool::Air];

    fn name(self) -> &'static str {
        match self {
            FakeTool::Go => "go",
            FakeTool::Git => "git",
            FakeTool::Npx => "npx",
            FakeTool::Air => "air",
        }
    }

    fn body(self) -> String {
        match self {
            FakeTool::Go => r#"if [ "$1" = "mod" ] && [ "$2" = "init" ]; then
  printf 'module %s\n\ngo 1.22\n' "$3" > go.mod
fi"#
            .to_string(),
            FakeTool::Git => "exit 0".to_string(),
            FakeTool::Npx => r#"if [ "$1" = "gitignore" ]; then
  printf '# Binaries\n*.exe\nbin/\n' > .gitignore
fi"#
            .to_string(),
            FakeTool::Air => format!(
                "if [ \"$1\" = \"init\" ]; then\n  printf '%s' '{}' > .air.toml\nfi",
                FAKE_AIR_CONFIG
            ),
        }
    }
}

/// Scratch directory with a fake toolchain.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Creates a sandbox where only `tools` are on `PATH`.
    pub fn with_tools(tools: &[FakeTool]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::create_dir(dir.path().join("bin")).expect("Failed to create bin dir");
        fs::create_dir(dir.path().join("work")).expect("Failed to create work dir");
        let sandbox = Sandbox { dir };
        for tool in tools {
            sandbox.install(*tool);
        }
        sandbox
    }

    fn install(&self, tool: FakeTool) {
        let path = self.bin_dir().join(tool.name());
        let script = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"$RAYLIB_GEN_TOOL_LOG\"\n{}\n",
            tool.name(),
            tool.body()
        );
        fs::write(&path, script).expect("Failed to write fake tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake tool executable");
        }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Directory `raylib-gen` runs in; the project is created beneath it.
    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.work_dir().join(name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("tools.log")
    }

    /// Every fake tool invocation so far, one `"<tool> <args>"` line each.
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// A `raylib-gen` command isolated from the host's tools and config.
    pub fn cmd(&self) -> Command {
        let mut cmd = raylib_gen_cmd();
        cmd.current_dir(self.work_dir())
            .env("PATH", self.bin_dir())
            .env("RAYLIB_GEN_TOOL_LOG", self.log_path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env_remove("RAYLIB_GEN_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Reads a file that the test expects to exist.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Creates an `assert_cmd::Command` for the compiled `raylib-gen` binary.
pub fn raylib_gen_cmd() -> Command {
    Command::cargo_bin("raylib-gen").expect("Failed to find raylib-gen binary for testing")
}
