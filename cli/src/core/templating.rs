//! # raylib-gen Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders the source files written into a new project. The generated
//! program is a fixed raylib "hello world": it opens a 400x400 window titled
//! with the project name, caps the frame rate at 60, draws static text every
//! frame until the window is asked to close, then releases the window.
//!
//! Templates are embedded as string constants and rendered with Tera using a
//! single `project_name` variable. Autoescaping is disabled since the output
//! is Go source, not HTML.
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use tera::{Context, Tera};

/// Entry-point program template for `cmd/<name>/main.go`.
pub const MAIN_GO_TEMPLATE: &str = r#"package main

import (
  rl "github.com/gen2brain/raylib-go/raylib"
)

func main() {
  rl.InitWindow(400, 400, "{{ project_name }}")
  rl.SetTargetFPS(60)
  for !rl.WindowShouldClose() {
    rl.BeginDrawing()
    rl.ClearBackground(rl.RayWhite)
    rl.DrawText("Hello, world!", 12, 12, 20, rl.Maroon)
    rl.EndDrawing()
  }
  rl.CloseWindow()
}
"#;

/// Renders the `main.go` program for `project_name`.
pub fn render_main_go(project_name: &str) -> Result<String> {
    render(MAIN_GO_TEMPLATE, project_name)
}

fn render(template: &str, project_name: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("project_name", project_name);
    Tera::one_off(template, &context, false).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e }).context("Failed to render source template")
    })
}
