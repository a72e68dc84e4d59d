//! Supporting helpers.

use owo_colors::OwoColorize;
use std::path::Path;

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Colored `error:` prefix for stderr messages.
pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Colored `note:` prefix for stderr messages.
pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Colored `info:` prefix for stderr messages.
pub fn info_prefix() -> String {
    if stderr_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Render a path relative to the working directory when possible,
/// falling back to the path as given.
pub fn rel_to_wd(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|wd| pathdiff::diff_paths(path, wd))
        .map(|rel| rel.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_to_wd_strips_the_working_directory() {
        let inside = std::env::current_dir().unwrap().join("a/b.toml");
        assert_eq!(rel_to_wd(&inside), "a/b.toml");
    }

    #[test]
    fn test_rel_to_wd_keeps_unrelated_paths_usable() {
        let rel = rel_to_wd(Path::new("/nonexistent/elsewhere.toml"));
        assert!(rel.ends_with("elsewhere.toml"));
    }
}
