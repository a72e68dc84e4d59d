//! Built-in preset and environment registries.
//!
//! Presets are bundles of rule severities looked up by identifier from a
//! record's `extends` sequence. Environment contexts map to the predefined
//! global identifiers they make available. Both registries are data; no
//! rule logic lives here.

use crate::models::preset::Preset;
use crate::models::record::{GlobalAccess, ParserOptions, Severity, SourceType};
use std::collections::BTreeMap;

/// Core baseline bundle.
pub const PRESET_RECOMMENDED: &str = "eslint:recommended";
/// Strict core bundle: the baseline plus opinionated checks.
pub const PRESET_ALL: &str = "eslint:all";
/// Essential checks for Vue 3 single-file components.
pub const PRESET_VUE3_ESSENTIAL: &str = "plugin:vue/vue3-essential";

// Representative slices of the published bundles; identifiers only, the
// enforcement logic belongs to the consuming linter.
const RECOMMENDED_RULES: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-condition",
    "no-debugger",
    "no-dupe-args",
    "no-dupe-else-if",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-pattern",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-irregular-whitespace",
    "no-obj-calls",
    "no-redeclare",
    "no-self-assign",
    "no-setter-return",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unused-labels",
    "no-unused-vars",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

const ALL_EXTRA_RULES: &[&str] = &[
    "curly",
    "eqeqeq",
    "no-alert",
    "no-console",
    "no-empty-function",
    "no-eval",
    "no-implied-eval",
    "no-lonely-if",
    "no-multi-assign",
    "no-nested-ternary",
    "no-param-reassign",
    "no-return-assign",
    "no-sequences",
    "no-shadow",
    "no-throw-literal",
    "no-unused-expressions",
    "no-var",
    "prefer-const",
    "prefer-template",
    "radix",
    "yoda",
];

const VUE3_ESSENTIAL_RULES: &[&str] = &[
    "vue/multi-word-component-names",
    "vue/no-arrow-functions-in-watch",
    "vue/no-async-in-computed-properties",
    "vue/no-child-content",
    "vue/no-dupe-keys",
    "vue/no-duplicate-attributes",
    "vue/no-mutating-props",
    "vue/no-ref-as-operand",
    "vue/no-side-effects-in-computed-properties",
    "vue/no-template-key",
    "vue/no-textarea-mustache",
    "vue/no-unused-components",
    "vue/no-unused-vars",
    "vue/no-use-v-if-with-v-for",
    "vue/require-component-is",
    "vue/require-v-for-key",
    "vue/valid-template-root",
    "vue/valid-v-for",
    "vue/valid-v-if",
    "vue/valid-v-model",
];

const BUILTIN_GLOBALS: &[(&str, GlobalAccess)] = &[
    ("Array", GlobalAccess::Readonly),
    ("Boolean", GlobalAccess::Readonly),
    ("Error", GlobalAccess::Readonly),
    ("Infinity", GlobalAccess::Readonly),
    ("JSON", GlobalAccess::Readonly),
    ("Math", GlobalAccess::Readonly),
    ("NaN", GlobalAccess::Readonly),
    ("Number", GlobalAccess::Readonly),
    ("Object", GlobalAccess::Readonly),
    ("Promise", GlobalAccess::Readonly),
    ("String", GlobalAccess::Readonly),
    ("Symbol", GlobalAccess::Readonly),
    ("globalThis", GlobalAccess::Readonly),
    ("undefined", GlobalAccess::Readonly),
];

const BROWSER_GLOBALS: &[(&str, GlobalAccess)] = &[
    ("alert", GlobalAccess::Readonly),
    ("atob", GlobalAccess::Readonly),
    ("btoa", GlobalAccess::Readonly),
    ("clearInterval", GlobalAccess::Readonly),
    ("clearTimeout", GlobalAccess::Readonly),
    ("console", GlobalAccess::Readonly),
    ("document", GlobalAccess::Readonly),
    ("fetch", GlobalAccess::Readonly),
    ("history", GlobalAccess::Readonly),
    ("localStorage", GlobalAccess::Readonly),
    ("location", GlobalAccess::Readonly),
    ("navigator", GlobalAccess::Readonly),
    // Event handler slots are assignable by design.
    ("onerror", GlobalAccess::Writable),
    ("onload", GlobalAccess::Writable),
    ("sessionStorage", GlobalAccess::Readonly),
    ("setInterval", GlobalAccess::Readonly),
    ("setTimeout", GlobalAccess::Readonly),
    ("window", GlobalAccess::Readonly),
];

const NODE_GLOBALS: &[(&str, GlobalAccess)] = &[
    ("Buffer", GlobalAccess::Readonly),
    ("__dirname", GlobalAccess::Readonly),
    ("__filename", GlobalAccess::Readonly),
    ("clearInterval", GlobalAccess::Readonly),
    ("clearTimeout", GlobalAccess::Readonly),
    ("console", GlobalAccess::Readonly),
    ("exports", GlobalAccess::Writable),
    ("global", GlobalAccess::Readonly),
    ("module", GlobalAccess::Readonly),
    ("process", GlobalAccess::Readonly),
    ("require", GlobalAccess::Readonly),
    ("setInterval", GlobalAccess::Readonly),
    ("setTimeout", GlobalAccess::Readonly),
];

const WORKER_GLOBALS: &[(&str, GlobalAccess)] = &[
    ("clearTimeout", GlobalAccess::Readonly),
    ("console", GlobalAccess::Readonly),
    ("fetch", GlobalAccess::Readonly),
    ("importScripts", GlobalAccess::Readonly),
    ("onmessage", GlobalAccess::Writable),
    ("postMessage", GlobalAccess::Readonly),
    ("self", GlobalAccess::Readonly),
    ("setTimeout", GlobalAccess::Readonly),
];

const ES2021_GLOBALS: &[(&str, GlobalAccess)] = &[
    ("AggregateError", GlobalAccess::Readonly),
    ("BigInt", GlobalAccess::Readonly),
    ("BigInt64Array", GlobalAccess::Readonly),
    ("BigUint64Array", GlobalAccess::Readonly),
    ("FinalizationRegistry", GlobalAccess::Readonly),
    ("WeakRef", GlobalAccess::Readonly),
    ("globalThis", GlobalAccess::Readonly),
];

/// Identifiers the preset registry resolves, sorted.
pub fn known_presets() -> &'static [&'static str] {
    &[PRESET_ALL, PRESET_RECOMMENDED, PRESET_VUE3_ESSENTIAL]
}

/// Environment context names the registry resolves, sorted.
pub fn known_envs() -> &'static [&'static str] {
    &["browser", "builtin", "es2021", "node", "worker"]
}

/// Whether `name` is a known environment context.
pub fn is_known_env(name: &str) -> bool {
    known_envs().contains(&name)
}

/// Predefined globals contributed by an environment context.
pub fn env_globals(name: &str) -> Option<&'static [(&'static str, GlobalAccess)]> {
    match name {
        "builtin" => Some(BUILTIN_GLOBALS),
        "browser" => Some(BROWSER_GLOBALS),
        "node" => Some(NODE_GLOBALS),
        "worker" => Some(WORKER_GLOBALS),
        "es2021" => Some(ES2021_GLOBALS),
        _ => None,
    }
}

/// Syntax level implied by an environment context, if any.
pub fn env_implied_ecma_version(name: &str) -> Option<u32> {
    match name {
        "es2021" => Some(2021),
        _ => None,
    }
}

/// Look up a preset by identifier.
pub fn builtin_preset(id: &str) -> Option<Preset> {
    match id {
        PRESET_RECOMMENDED => Some(rules_at(RECOMMENDED_RULES, Severity::Error)),
        PRESET_ALL => {
            let mut preset = rules_at(RECOMMENDED_RULES, Severity::Error);
            preset
                .rules
                .extend(bundle(ALL_EXTRA_RULES, Severity::Error));
            Some(preset)
        }
        PRESET_VUE3_ESSENTIAL => {
            let mut preset = rules_at(VUE3_ESSENTIAL_RULES, Severity::Error);
            preset.env.insert("browser".to_string(), true);
            preset.parser_options = Some(ParserOptions {
                parser: Some("vue-eslint-parser".to_string()),
                ecma_version: Some(2020),
                source_type: Some(SourceType::Module),
            });
            Some(preset)
        }
        _ => None,
    }
}

fn rules_at(names: &[&'static str], severity: Severity) -> Preset {
    Preset::from_rules(names.iter().map(|name| (*name, severity)))
}

fn bundle(names: &[&'static str], severity: Severity) -> BTreeMap<String, Severity> {
    names
        .iter()
        .map(|name| (name.to_string(), severity))
        .collect()
}
