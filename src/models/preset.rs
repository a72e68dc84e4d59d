//! Preset schema: a named bundle of rule severities applied as a baseline
//! before local overrides, with optional environment, global, and parser
//! contributions.

use crate::models::record::{GlobalAccess, ParserOptions, Severity};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
/// A resolved preset as provided by the built-in registry.
///
/// Presets carry fixed severities only; per-mode entries are a record-level
/// construct. Preset contributions merge in `extends` declaration order,
/// later presets winning on conflict, and the record's own fields override
/// every preset.
pub struct Preset {
    pub env: BTreeMap<String, bool>,
    pub globals: BTreeMap<String, GlobalAccess>,
    pub parser_options: Option<ParserOptions>,
    pub rules: BTreeMap<String, Severity>,
}

impl Preset {
    /// Bundle with rules only, the common case.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Severity)>,
    {
        Preset {
            rules: rules
                .into_iter()
                .map(|(name, sev)| (name.to_string(), sev))
                .collect(),
            ..Preset::default()
        }
    }
}
