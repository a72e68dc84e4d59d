//! Effective settings resolution.
//!
//! Commands merge CLI flags with the process environment to decide where
//! discovery starts, which record to load, and which build mode to resolve
//! against. Defaults:
//! - `dir`: the working directory
//! - `mode`: `development` (or `LINTRC_MODE` when set)
//! - `output`: `human`
//!
//! Overrides precedence: CLI > environment > defaults.

use std::path::PathBuf;

/// Environment variable consulted when `--mode` is absent.
pub const MODE_ENV_VAR: &str = "LINTRC_MODE";

/// Build mode assumed when neither the CLI nor the environment names one.
pub const DEFAULT_MODE: &str = "development";

/// Output style used when `--output` is absent.
pub const DEFAULT_OUTPUT: &str = "human";

#[derive(Debug, Clone)]
/// Fully-resolved settings used by commands after applying precedence.
pub struct Effective {
    /// Directory discovery starts from, canonicalized when possible.
    pub start_dir: PathBuf,
    /// Explicit record path; bypasses discovery entirely when set.
    pub config_path: Option<PathBuf>,
    pub mode: String,
    pub output: String,
}

/// Resolve `Effective` by merging CLI flags, the environment, and defaults.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_config: Option<&str>,
    cli_mode: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_dir.unwrap_or("."));
    // Canonicalize so the upward walk sees real ancestors even for "."
    // or other relative starts.
    let start_dir = start.canonicalize().unwrap_or(start);
    let env_mode = std::env::var(MODE_ENV_VAR).ok();
    Effective {
        start_dir,
        config_path: cli_config.map(PathBuf::from),
        mode: resolve_mode(cli_mode, env_mode.as_deref()),
        output: cli_output.unwrap_or(DEFAULT_OUTPUT).to_string(),
    }
}

/// Mode precedence as a pure function: CLI flag, then environment, then
/// the development default.
pub fn resolve_mode(cli_mode: Option<&str>, env_mode: Option<&str>) -> String {
    cli_mode
        .or(env_mode)
        .unwrap_or(DEFAULT_MODE)
        .to_string()
}
