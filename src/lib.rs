//! lintrc core library.
//!
//! This crate exposes programmatic APIs for loading, resolving, validating,
//! and exporting lint run-configuration records (`.lintrc.toml|yaml|json`).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Effective settings resolution (CLI > environment > defaults).
//! - `loader`: Record parsing and upward discovery of the record chain.
//! - `models`: Record schema, preset data, and check output structs.
//! - `presets`: Builtin preset and environment-context registries.
//! - `resolve`: Effective configuration resolution for a build mode.
//! - `validate`: Structural record validation.
//! - `export`: Deterministic multi-format rendering and scaffolding.
//! - `output`: Human/JSON printers for check/resolve/show.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod export;
pub mod loader;
pub mod models;
pub mod output;
pub mod presets;
pub mod resolve;
pub mod utils;
pub mod validate;
