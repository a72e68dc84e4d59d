//! Effective configuration resolution.
//!
//! Records apply farthest-first so nearer records override; within one
//! record, presets apply in `extends` order (later wins) and local fields
//! apply last. Per-mode rule entries resolve against the active build mode,
//! enabled environment contexts expand into their predefined globals, and
//! explicit globals override anything a context provided.

use crate::loader::SourcedRecord;
use crate::models::preset::Preset;
use crate::models::record::{GlobalAccess, LintRecord, ParserOptions, Severity};
use crate::models::Issue;
use crate::presets;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Rule entries contributed directly by a record rather than a preset.
pub const LOCAL_ORIGIN: &str = "local";

#[derive(Serialize)]
/// A rule with its resolved severity and contributing origin.
pub struct ResolvedRule {
    pub severity: Severity,
    pub origin: String,
}

#[derive(Serialize)]
/// The fully-resolved configuration for one build mode.
pub struct ResolvedConfig {
    pub mode: String,
    pub env: BTreeMap<String, bool>,
    pub globals: BTreeMap<String, GlobalAccess>,
    #[serde(rename = "parserOptions")]
    pub parser_options: ParserOptions,
    pub rules: BTreeMap<String, ResolvedRule>,
    /// Contributing record files in application order (farthest first).
    pub sources: Vec<PathBuf>,
}

#[derive(Default)]
struct MergeState {
    env: BTreeMap<String, bool>,
    globals: BTreeMap<String, GlobalAccess>,
    parser: ParserOptions,
    rules: BTreeMap<String, ResolvedRule>,
    issues: Vec<Issue>,
}

impl MergeState {
    fn apply_preset(&mut self, origin: &str, preset: &Preset) {
        self.env.extend(preset.env.clone());
        self.globals.extend(preset.globals.clone());
        if let Some(options) = &preset.parser_options {
            overlay_parser(&mut self.parser, options);
        }
        for (name, severity) in &preset.rules {
            self.rules.insert(
                name.clone(),
                ResolvedRule {
                    severity: *severity,
                    origin: origin.to_string(),
                },
            );
        }
    }

    fn apply_record(&mut self, label: &str, record: &LintRecord, mode: &str) {
        for (position, id) in record.extends.iter().enumerate() {
            match presets::builtin_preset(id) {
                Some(preset) => self.apply_preset(id, &preset),
                None => self.issues.push(Issue {
                    file: label.to_string(),
                    rule: "extends".to_string(),
                    severity: "error".to_string(),
                    path: format!("$.extends[{}]", position),
                    message: format!(
                        "Unknown preset '{}'. Known presets: {}.",
                        id,
                        presets::known_presets().join(", ")
                    ),
                }),
            }
        }
        for (name, enabled) in &record.env {
            if *enabled && !presets::is_known_env(name) {
                self.issues.push(Issue {
                    file: label.to_string(),
                    rule: "env".to_string(),
                    severity: "warning".to_string(),
                    path: format!("$.env.{}", name),
                    message: format!(
                        "Unknown environment '{}'; it contributes no globals.",
                        name
                    ),
                });
            }
        }
        self.env.extend(record.env.clone());
        self.globals.extend(record.globals.clone());
        if let Some(options) = &record.parser_options {
            overlay_parser(&mut self.parser, options);
        }
        for (name, entry) in &record.rules {
            self.rules.insert(
                name.clone(),
                ResolvedRule {
                    severity: entry.severity_for(mode),
                    origin: LOCAL_ORIGIN.to_string(),
                },
            );
        }
    }
}

/// Resolve the effective configuration for `mode` from a nearest-first
/// record chain. Issues never abort resolution; unknown presets and
/// environments are reported and skipped.
pub fn resolve(records: &[SourcedRecord], mode: &str) -> (ResolvedConfig, Vec<Issue>) {
    let mut state = MergeState::default();
    for sourced in records.iter().rev() {
        let label = sourced.path.display().to_string();
        state.apply_record(&label, &sourced.record, mode);
    }

    // Context globals are the weakest layer: enabled contexts seed the
    // table, explicit entries overlay it, and `off` entries mask out.
    let mut globals: BTreeMap<String, GlobalAccess> = BTreeMap::new();
    for (name, enabled) in &state.env {
        if !*enabled {
            continue;
        }
        if let Some(provided) = presets::env_globals(name) {
            for (ident, access) in provided {
                globals.insert((*ident).to_string(), *access);
            }
        }
    }
    globals.extend(state.globals);
    globals.retain(|_, access| *access != GlobalAccess::Off);

    let mut parser_options = state.parser;
    if parser_options.ecma_version.is_none() {
        parser_options.ecma_version = state
            .env
            .iter()
            .filter(|(_, enabled)| **enabled)
            .filter_map(|(name, _)| presets::env_implied_ecma_version(name))
            .max();
    }

    let config = ResolvedConfig {
        mode: mode.to_string(),
        env: state.env,
        globals,
        parser_options,
        rules: state.rules,
        sources: records.iter().rev().map(|s| s.path.clone()).collect(),
    };
    (config, state.issues)
}

/// Merge a nearest-first chain into one raw record, presets unexpanded.
///
/// This is the `show`/`export` view: `extends` sequences concatenate in
/// application order, maps merge with nearer records winning per key, and
/// `root` is set when the chain was terminated by a root record. Merging a
/// single record is the identity.
pub fn merge_records(records: &[SourcedRecord]) -> LintRecord {
    let mut merged = LintRecord::default();
    for sourced in records.iter().rev() {
        let record = &sourced.record;
        if record.root {
            merged.root = true;
        }
        merged.extends.extend(record.extends.iter().cloned());
        merged.env.extend(record.env.clone());
        merged.globals.extend(record.globals.clone());
        if let Some(options) = &record.parser_options {
            let base = merged
                .parser_options
                .get_or_insert_with(ParserOptions::default);
            overlay_parser(base, options);
        }
        merged.rules.extend(record.rules.clone());
    }
    merged
}

fn overlay_parser(base: &mut ParserOptions, over: &ParserOptions) {
    if over.parser.is_some() {
        base.parser = over.parser.clone();
    }
    if over.ecma_version.is_some() {
        base.ecma_version = over.ecma_version;
    }
    if over.source_type.is_some() {
        base.source_type = over.source_type;
    }
}
