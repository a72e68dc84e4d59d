//! Record export and scaffolding.
//!
//! Rendering is deterministic: map fields are sorted, severities come out
//! as lowercase names, and global access markers come out as words, no
//! matter which spelling the source record used.

use crate::models::record::LintRecord;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Toml,
    Yaml,
    Json,
}

impl ExportFormat {
    /// File extension used when deriving an output path.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Toml => "toml",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Json => "json",
        }
    }

    /// Record basename for this format, e.g. `.lintrc.toml`.
    pub fn record_basename(&self) -> String {
        format!(".lintrc.{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "toml" => Ok(ExportFormat::Toml),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown format '{0}' (expected toml, yaml, or json)")]
    UnknownFormat(String),
    #[error("failed to serialize record as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("failed to serialize record as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize record as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} already exists; pass --force to replace it", .path.display())]
    AlreadyExists { path: PathBuf },
}

/// Render a record in the requested format. Output always ends with a
/// newline so it can be written or piped as-is.
pub fn render(record: &LintRecord, format: ExportFormat) -> Result<String, ExportError> {
    let text = match format {
        ExportFormat::Toml => toml::to_string_pretty(record)?,
        ExportFormat::Yaml => serde_yaml::to_string(record)?,
        ExportFormat::Json => {
            let mut body = serde_json::to_string_pretty(record)?;
            body.push('\n');
            body
        }
    };
    Ok(text)
}

/// Render a record and write it to `path`.
pub fn write_record(
    record: &LintRecord,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let text = render(record, format)?;
    fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the starter record into `dir` and return the path written.
/// Refuses to clobber an existing record unless `force` is set.
pub fn init_record(dir: &Path, format: ExportFormat, force: bool) -> Result<PathBuf, ExportError> {
    let path = dir.join(format.record_basename());
    if path.exists() && !force {
        return Err(ExportError::AlreadyExists { path });
    }
    write_record(&LintRecord::starter(), format, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_starter_in_every_format() {
        let dir = tempdir().unwrap();
        let starter = LintRecord::starter();
        for format in [ExportFormat::Toml, ExportFormat::Yaml, ExportFormat::Json] {
            let path = dir.path().join(format.record_basename());
            write_record(&starter, format, &path).unwrap();
            let reloaded = loader::load_record(&path).unwrap();
            assert_eq!(reloaded, starter, "{:?}", format);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let starter = LintRecord::starter();
        let first = render(&starter, ExportFormat::Toml).unwrap();
        let second = render(&starter, ExportFormat::Toml).unwrap();
        assert_eq!(first, second);
        // Sorted map keys: browser before node in the env table.
        let browser = first.find("browser").unwrap();
        let node = first.find("node").unwrap();
        assert!(browser < node);
    }

    #[test]
    fn test_export_normalizes_alternate_spellings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lintrc.json");
        fs::write(
            &path,
            r#"{"globals": {"google": false}, "rules": {"no-console": 1}}"#,
        )
        .unwrap();
        let record = loader::load_record(&path).unwrap();
        let toml_text = render(&record, ExportFormat::Toml).unwrap();
        assert!(toml_text.contains(r#"no-console = "warn""#));
        assert!(toml_text.contains(r#"google = "readonly""#));
    }

    #[test]
    fn test_toml_starter_shape() {
        let text = render(&LintRecord::starter(), ExportFormat::Toml).unwrap();
        assert!(text.contains("root = true"));
        assert!(text.contains(r#""plugin:vue/vue3-essential""#));
        assert!(text.contains("[rules.no-console]"));
        assert!(text.contains(r#"default = "off""#));
    }

    #[test]
    fn test_init_writes_starter_and_respects_force() {
        let dir = tempdir().unwrap();
        let path = init_record(dir.path(), ExportFormat::Toml, false).unwrap();
        assert_eq!(path, dir.path().join(".lintrc.toml"));

        let err = init_record(dir.path(), ExportFormat::Toml, false).unwrap_err();
        assert!(matches!(err, ExportError::AlreadyExists { .. }));

        // With force the record is rewritten in place.
        fs::write(&path, "root = false\n").unwrap();
        init_record(dir.path(), ExportFormat::Toml, true).unwrap();
        let record = loader::load_record(&path).unwrap();
        assert!(record.root);
    }

    #[test]
    fn test_format_parsing_accepts_yml_alias() {
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("TOML".parse::<ExportFormat>().unwrap(), ExportFormat::Toml);
        assert!("ini".parse::<ExportFormat>().is_err());
    }
}
