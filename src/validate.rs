//! Record validation.
//!
//! Structural problems a parse cannot catch: unknown preset and environment
//! names, malformed identifiers, and per-mode rule tables that can never
//! resolve. Issues carry a JSONPath-style location into the record.

use crate::loader::SourcedRecord;
use crate::models::record::{LintRecord, RuleEntry, DEFAULT_MODE_KEY};
use crate::models::{CheckResult, Issue, Summary};
use crate::presets;
use regex::Regex;

/// Validate every record in a chain and tally the outcome.
pub fn run_check(records: &[SourcedRecord]) -> CheckResult {
    let mut issues = Vec::new();
    for sourced in records {
        let label = sourced.path.display().to_string();
        issues.extend(validate_record(&label, &sourced.record));
    }
    let summary = Summary::tally(&issues, records.len());
    CheckResult { issues, summary }
}

/// Validate one record. The returned issues follow field order within the
/// record, so output is stable across runs.
pub fn validate_record(label: &str, record: &LintRecord) -> Vec<Issue> {
    let ident = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern");
    let rule_name = Regex::new(r"^([a-z][a-z0-9]*(?:-[a-z0-9]+)*/)?[a-z][a-z0-9]*(?:-[a-z0-9]+)*$")
        .expect("rule name pattern");

    let mut issues = Vec::new();
    let mut push = |severity: &str, rule: &str, path: String, message: String| {
        issues.push(Issue {
            file: label.to_string(),
            rule: rule.to_string(),
            severity: severity.to_string(),
            path,
            message,
        });
    };

    for (position, id) in record.extends.iter().enumerate() {
        let path = format!("$.extends[{}]", position);
        if id.is_empty() {
            push("error", "extends", path, "Empty preset reference.".to_string());
            continue;
        }
        if presets::builtin_preset(id).is_none() {
            push(
                "error",
                "extends",
                path,
                format!(
                    "Unknown preset '{}'. Known presets: {}.",
                    id,
                    presets::known_presets().join(", ")
                ),
            );
            continue;
        }
        if record.extends[..position].contains(id) {
            push(
                "warning",
                "extends",
                path,
                format!("Duplicate preset reference '{}'; the later occurrence wins.", id),
            );
        }
    }

    for name in record.env.keys() {
        if !presets::is_known_env(name) {
            push(
                "warning",
                "env",
                format!("$.env.{}", name),
                format!(
                    "Unknown environment '{}'. Known environments: {}.",
                    name,
                    presets::known_envs().join(", ")
                ),
            );
        }
    }

    for name in record.globals.keys() {
        if !ident.is_match(name) {
            push(
                "warning",
                "globals",
                format!("$.globals.{}", name),
                format!("Global '{}' is not a valid identifier.", name),
            );
        }
    }

    for (name, entry) in &record.rules {
        let path = format!("$.rules.{}", name);
        if !rule_name.is_match(name) {
            push(
                "warning",
                "rules",
                path.clone(),
                format!("Rule name '{}' is not kebab-case.", name),
            );
        }
        if let RuleEntry::PerMode(modes) = entry {
            if modes.is_empty() {
                push(
                    "error",
                    "rules",
                    path,
                    format!("Rule '{}' has an empty per-mode table.", name),
                );
                continue;
            }
            if modes.keys().any(|mode| mode.is_empty()) {
                push(
                    "warning",
                    "rules",
                    path.clone(),
                    format!("Rule '{}' lists an empty mode name.", name),
                );
            }
            if !modes.contains_key(DEFAULT_MODE_KEY) {
                push(
                    "info",
                    "rules",
                    path,
                    format!(
                        "Rule '{}' has no '{}' arm; unlisted modes resolve to 'off'.",
                        name, DEFAULT_MODE_KEY
                    ),
                );
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{GlobalAccess, Severity};
    use std::collections::BTreeMap;
    use std::path::Path;

    fn check_one(record: LintRecord) -> Vec<Issue> {
        validate_record(".lintrc.toml", &record)
    }

    #[test]
    fn test_starter_record_is_clean() {
        assert!(check_one(LintRecord::starter()).is_empty());
    }

    #[test]
    fn test_unknown_preset_is_error() {
        let mut record = LintRecord::default();
        record.extends.push("eslint:legacy".to_string());
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "error");
        assert_eq!(issues[0].rule, "extends");
        assert!(issues[0].message.contains("eslint:legacy"));
    }

    #[test]
    fn test_empty_preset_reference_is_error() {
        let mut record = LintRecord::default();
        record.extends.push(String::new());
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "error");
        assert_eq!(issues[0].message, "Empty preset reference.");
    }

    #[test]
    fn test_duplicate_preset_reference_is_warning() {
        let mut record = LintRecord::default();
        record.extends.push("eslint:recommended".to_string());
        record.extends.push("eslint:recommended".to_string());
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "warning");
        assert_eq!(issues[0].path, "$.extends[1]");
    }

    #[test]
    fn test_unknown_env_is_warning_even_when_disabled() {
        let mut record = LintRecord::default();
        record.env.insert("deno".to_string(), false);
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "warning");
        assert_eq!(issues[0].path, "$.env.deno");
    }

    #[test]
    fn test_invalid_global_identifier_is_warning() {
        let mut record = LintRecord::default();
        record
            .globals
            .insert("my-global".to_string(), GlobalAccess::Readonly);
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("my-global"));
    }

    #[test]
    fn test_dollar_identifier_is_accepted() {
        let mut record = LintRecord::default();
        record.globals.insert("$".to_string(), GlobalAccess::Readonly);
        record
            .globals
            .insert("_lodash".to_string(), GlobalAccess::Writable);
        assert!(check_one(record).is_empty());
    }

    #[test]
    fn test_scoped_rule_name_is_accepted() {
        let mut record = LintRecord::default();
        record.rules.insert(
            "vue/no-mutating-props".to_string(),
            RuleEntry::Fixed(Severity::Error),
        );
        assert!(check_one(record).is_empty());
    }

    #[test]
    fn test_malformed_rule_name_is_warning() {
        let mut record = LintRecord::default();
        record
            .rules
            .insert("No_Console".to_string(), RuleEntry::Fixed(Severity::Warn));
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$.rules.No_Console");
    }

    #[test]
    fn test_empty_per_mode_table_is_error() {
        let mut record = LintRecord::default();
        record
            .rules
            .insert("no-console".to_string(), RuleEntry::PerMode(BTreeMap::new()));
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "error");
    }

    #[test]
    fn test_empty_mode_name_is_warning() {
        let mut modes = BTreeMap::new();
        modes.insert(String::new(), Severity::Warn);
        modes.insert(DEFAULT_MODE_KEY.to_string(), Severity::Off);
        let mut record = LintRecord::default();
        record
            .rules
            .insert("no-console".to_string(), RuleEntry::PerMode(modes));
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "warning");
        assert!(issues[0].message.contains("empty mode name"));
    }

    #[test]
    fn test_missing_default_arm_is_info() {
        let mut modes = BTreeMap::new();
        modes.insert("production".to_string(), Severity::Warn);
        let mut record = LintRecord::default();
        record
            .rules
            .insert("no-console".to_string(), RuleEntry::PerMode(modes));
        let issues = check_one(record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "info");
    }

    #[test]
    fn test_run_check_tallies_across_the_chain() {
        let mut outer = LintRecord::default();
        outer.extends.push("eslint:legacy".to_string());
        let mut inner = LintRecord::default();
        inner.env.insert("deno".to_string(), true);

        let chain = vec![
            SourcedRecord {
                path: Path::new("/repo/app/.lintrc.toml").to_path_buf(),
                record: inner,
            },
            SourcedRecord {
                path: Path::new("/repo/.lintrc.toml").to_path_buf(),
                record: outer,
            },
        ];
        let result = run_check(&chain);
        assert_eq!(result.summary.errors, 1);
        assert_eq!(result.summary.warnings, 1);
        assert_eq!(result.summary.infos, 0);
        assert_eq!(result.summary.records, 2);
        assert_eq!(result.issues[0].file, "/repo/app/.lintrc.toml");
    }
}
