//! # raylib-gen Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational components shared by the command handlers:
//! - `config`: Configuration loading and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Rendering of generated source files
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ScaffoldError, Result}; // For error handling
//! use crate::core::templating; // For rendering main.go
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
