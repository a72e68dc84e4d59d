//! Record discovery and loading.
//!
//! Discovery walks upward from a start directory collecting `.lintrc.*`
//! files. The walk stops after a record that sets `root = true`, at a
//! directory containing `.git`, or at the filesystem root. Records parse
//! by extension: TOML, YAML, or JSON.

use crate::models::record::LintRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Record file names probed per directory, in precedence order.
pub const RECORD_BASENAMES: &[&str] = &[
    ".lintrc.toml",
    ".lintrc.yaml",
    ".lintrc.yml",
    ".lintrc.json",
];

#[derive(Debug, Error)]
/// Failure to read or parse a record file.
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid TOML: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{path} is not valid YAML: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported record format: {path} (expected .toml, .yaml, .yml, or .json)")]
    UnsupportedFormat { path: String },
}

#[derive(Debug, Clone)]
/// A record together with the file it came from.
pub struct SourcedRecord {
    pub path: PathBuf,
    pub record: LintRecord,
}

/// First record file present in `dir`, honoring basename precedence.
pub fn find_record(dir: &Path) -> Option<PathBuf> {
    RECORD_BASENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parse one record file by extension.
pub fn load_record(path: &Path) -> Result<LintRecord, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(ext, "toml" | "yaml" | "yml" | "json") {
        return Err(LoadError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    match ext {
        "toml" => toml::from_str(&text).map_err(|source| LoadError::Toml {
            path: path.display().to_string(),
            source,
        }),
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
            path: path.display().to_string(),
            source,
        }),
        _ => serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Load one record keeping its source path.
pub fn load_sourced(path: &Path) -> Result<SourcedRecord, LoadError> {
    let record = load_record(path)?;
    Ok(SourcedRecord {
        path: path.to_path_buf(),
        record,
    })
}

/// Walk upward from `start` collecting the record chain, nearest-first.
///
/// A record with `root = true` terminates the walk after being collected;
/// so does a directory containing `.git` (the repository boundary) and the
/// filesystem root. An empty chain is not an error here; callers decide.
pub fn discover(start: &Path) -> Result<Vec<SourcedRecord>, LoadError> {
    let mut chain = Vec::new();
    let mut dir = start;
    loop {
        if let Some(path) = find_record(dir) {
            let sourced = load_sourced(&path)?;
            let is_root = sourced.record.root;
            chain.push(sourced);
            if is_root {
                break;
            }
        }
        if dir.join(".git").exists() {
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_record_in_each_format() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join(".lintrc.toml");
        fs::write(&toml_path, "root = true\n[rules]\neqeqeq = \"error\"\n").unwrap();
        let from_toml = load_record(&toml_path).unwrap();
        assert!(from_toml.root);

        let yaml_path = dir.path().join(".lintrc.yaml");
        fs::write(&yaml_path, "rules:\n  eqeqeq: warn\n").unwrap();
        let from_yaml = load_record(&yaml_path).unwrap();
        assert_eq!(from_yaml.rules.len(), 1);

        let json_path = dir.path().join(".lintrc.json");
        fs::write(&json_path, r#"{"rules": {"eqeqeq": 2}}"#).unwrap();
        let from_json = load_record(&json_path).unwrap();
        assert_eq!(from_json.rules.len(), 1);
    }

    #[test]
    fn test_load_record_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lintrc.ini");
        fs::write(&path, "root = true").unwrap();
        assert!(matches!(
            load_record(&path),
            Err(LoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_record_surfaces_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lintrc.toml");
        fs::write(&path, "rules = [not toml").unwrap();
        assert!(matches!(load_record(&path), Err(LoadError::Toml { .. })));
    }

    #[test]
    fn test_basename_precedence_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".lintrc.json"), "{}").unwrap();
        fs::write(dir.path().join(".lintrc.toml"), "").unwrap();
        let found = find_record(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".lintrc.toml");

        let yaml_dir = tempdir().unwrap();
        fs::write(yaml_dir.path().join(".lintrc.yml"), "").unwrap();
        fs::write(yaml_dir.path().join(".lintrc.yaml"), "").unwrap();
        let found = find_record(yaml_dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".lintrc.yaml");
    }

    #[test]
    fn test_discover_walks_up_and_orders_nearest_first() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("packages/app");
        fs::create_dir_all(&nested).unwrap();
        // Bound the walk at the tempdir so ambient records cannot leak in.
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".lintrc.toml"), "").unwrap();
        fs::write(nested.join(".lintrc.toml"), "").unwrap();

        let chain = discover(&nested).unwrap();
        assert_eq!(chain.len(), 2);
        assert!(chain[0].path.starts_with(&nested));
        assert!(!chain[1].path.starts_with(&nested));
    }

    #[test]
    fn test_discover_stops_after_root_record() {
        let dir = tempdir().unwrap();
        let mid = dir.path().join("workspace");
        let nested = mid.join("app");
        fs::create_dir_all(&nested).unwrap();
        // A record above the root record must not contribute.
        fs::write(dir.path().join(".lintrc.toml"), "").unwrap();
        fs::write(mid.join(".lintrc.toml"), "root = true\n").unwrap();

        let chain = discover(&nested).unwrap();
        assert_eq!(chain.len(), 1);
        assert!(chain[0].record.root);
    }

    #[test]
    fn test_discover_stops_at_git_boundary() {
        let dir = tempdir().unwrap();
        let repo = dir.path().join("repo");
        let nested = repo.join("src");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".lintrc.toml"), "").unwrap();
        fs::write(repo.join(".lintrc.toml"), "").unwrap();

        let chain = discover(&nested).unwrap();
        assert_eq!(chain.len(), 1);
        assert!(chain[0].path.starts_with(&repo));
    }

    #[test]
    fn test_discover_without_records_yields_empty_chain() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        // A recordless tree is an empty chain, not a load error.
        let chain = discover(dir.path()).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_discover_propagates_parse_errors() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".lintrc.json"), "{oops").unwrap();
        assert!(discover(dir.path()).is_err());
    }
}
