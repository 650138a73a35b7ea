//! Core types and configuration for skiff.
//!
//! This crate defines the `skiff.toml` schema ([`SkiffConfig`]),
//! build-tool discovery ([`BuildTool`]), and shared error types.

pub mod config;
pub mod error;
pub mod project;

pub use config::{BuildConfig, ProjectConfig, SkiffConfig};
pub use error::{Error, Result};
pub use project::BuildTool;
