//! Lint record schema: the run-configuration consumed by the linter.
//!
//! A record declares environment contexts, extended presets, whitelisted
//! globals, parser options, and rule severities. Rule entries are either a
//! fixed severity or a per-mode table resolved against the active build
//! mode. Legacy spellings (numeric severities, boolean global access)
//! normalize to the canonical lowercase form on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Reserved key in a per-mode rule table naming the fallback severity.
pub const DEFAULT_MODE_KEY: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// Enforcement level for a rule.
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Numeric alias accepted on input: 0 = off, 1 = warn, 2 = error.
    pub fn from_code(code: i64) -> Result<Self, String> {
        match code {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warn),
            2 => Ok(Severity::Error),
            other => Err(format!(
                "severity number out of range: {} (expected 0, 1, or 2)",
                other
            )),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Severity::Off),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(format!(
                "unknown severity '{}' (expected off, warn, or error)",
                other
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(i64),
            Name(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Code(n) => Severity::from_code(n).map_err(serde::de::Error::custom),
            Repr::Name(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Access tag for a whitelisted global identifier. `Off` masks a global
/// that an environment context would otherwise provide.
pub enum GlobalAccess {
    Readonly,
    Writable,
    Off,
}

impl GlobalAccess {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalAccess::Readonly => "readonly",
            GlobalAccess::Writable => "writable",
            GlobalAccess::Off => "off",
        }
    }
}

impl fmt::Display for GlobalAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlobalAccess {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Name(String),
        }
        match Repr::deserialize(deserializer)? {
            // Legacy boolean form: true grants write access.
            Repr::Flag(true) => Ok(GlobalAccess::Writable),
            Repr::Flag(false) => Ok(GlobalAccess::Readonly),
            Repr::Name(s) => match s.as_str() {
                "readonly" | "readable" => Ok(GlobalAccess::Readonly),
                "writable" | "writeable" => Ok(GlobalAccess::Writable),
                "off" => Ok(GlobalAccess::Off),
                other => Err(serde::de::Error::custom(format!(
                    "unknown global access '{}' (expected readonly, writable, or off)",
                    other
                ))),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A rule entry: either a fixed severity or a table mapping build-mode
/// names to severities, with an optional `default` arm.
pub enum RuleEntry {
    Fixed(Severity),
    PerMode(BTreeMap<String, Severity>),
}

impl RuleEntry {
    /// Resolve the severity for the given build mode.
    ///
    /// Pure and total: a per-mode table falls back to its `default` arm,
    /// and to `off` when no arm applies.
    pub fn severity_for(&self, mode: &str) -> Severity {
        match self {
            RuleEntry::Fixed(sev) => *sev,
            RuleEntry::PerMode(modes) => modes
                .get(mode)
                .or_else(|| modes.get(DEFAULT_MODE_KEY))
                .copied()
                .unwrap_or(Severity::Off),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How source files are to be parsed.
pub enum SourceType {
    #[default]
    Script,
    Module,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceType::Script => "script",
            SourceType::Module => "module",
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
/// Parser selection and syntax options.
pub struct ParserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(rename = "ecmaVersion", skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<u32>,
    #[serde(rename = "sourceType", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

impl ParserOptions {
    /// True when no option is set.
    pub fn is_empty(&self) -> bool {
        self.parser.is_none() && self.ecma_version.is_none() && self.source_type.is_none()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
/// The lint configuration record. Immutable once loaded; resolution never
/// mutates it. Maps serialize in sorted order, `extends` keeps declaration
/// order exactly.
pub struct LintRecord {
    /// When true, discovery ignores ancestor directories above this record.
    #[serde(skip_serializing_if = "is_false")]
    pub root: bool,
    /// Ordered preset identifiers; later entries override earlier ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    /// Environment contexts; enabled contexts contribute predefined globals.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, bool>,
    /// Explicit global identifiers; override context-provided entries.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, GlobalAccess>,
    #[serde(rename = "parserOptions", skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,
    /// Local rule entries; override every preset contribution.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleEntry>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl LintRecord {
    /// The starter record written by `lintrc init`: two environment
    /// contexts, two presets, one readonly global, a parser selection, and
    /// two rules that tighten to `warn` in production builds.
    pub fn starter() -> Self {
        let mut env = BTreeMap::new();
        env.insert("node".to_string(), true);
        env.insert("browser".to_string(), true);

        let mut globals = BTreeMap::new();
        globals.insert("google".to_string(), GlobalAccess::Readonly);

        let mut production_only = BTreeMap::new();
        production_only.insert("production".to_string(), Severity::Warn);
        production_only.insert(DEFAULT_MODE_KEY.to_string(), Severity::Off);

        let mut rules = BTreeMap::new();
        rules.insert(
            "no-console".to_string(),
            RuleEntry::PerMode(production_only.clone()),
        );
        rules.insert(
            "no-debugger".to_string(),
            RuleEntry::PerMode(production_only),
        );

        LintRecord {
            root: true,
            extends: vec![
                "plugin:vue/vue3-essential".to_string(),
                "eslint:recommended".to_string(),
            ],
            env,
            globals,
            parser_options: Some(ParserOptions {
                parser: Some("@babel/eslint-parser".to_string()),
                ..ParserOptions::default()
            }),
            rules,
        }
    }
}
