//! Output rendering for check, resolve, and show commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::models::record::{LintRecord, Severity};
use crate::models::CheckResult;
use crate::resolve::ResolvedConfig;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::PathBuf;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_tag(severity: &str, color: bool) -> String {
    match severity {
        "error" => {
            if color {
                "⟦error⟧".red().bold().to_string()
            } else {
                "⟦error⟧".to_string()
            }
        }
        "warning" | "warn" => {
            if color {
                "⟦warn⟧".yellow().bold().to_string()
            } else {
                "⟦warn⟧".to_string()
            }
        }
        _ => {
            if color {
                "⟦info⟧".blue().bold().to_string()
            } else {
                "⟦info⟧".to_string()
            }
        }
    }
}

fn severity_icon(severity: &str, color: bool) -> String {
    match severity {
        "error" => {
            if color {
                "✖".red().to_string()
            } else {
                "✖".to_string()
            }
        }
        "warning" | "warn" => {
            if color {
                "▲".yellow().to_string()
            } else {
                "▲".to_string()
            }
        }
        _ => {
            if color {
                "◆".blue().to_string()
            } else {
                "◆".to_string()
            }
        }
    }
}

/// Print validation results in the requested format.
pub fn print_check(res: &CheckResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for is in &res.issues {
                let sev = severity_tag(&is.severity, color);
                let icon = severity_icon(&is.severity, color);
                let file = if color {
                    is.file.clone().bold().to_string()
                } else {
                    is.file.clone()
                };
                println!("{} {} {} ❲{}❳ — {}", icon, sev, file, is.rule, is.message);
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} records={}",
                res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.records
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the effective configuration for one mode.
pub fn print_resolved(cfg: &ResolvedConfig, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_resolved_json(cfg)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let header = format!("— Effective configuration — mode={}", cfg.mode);
            if color {
                println!("{}", header.bold());
            } else {
                println!("{}", header);
            }
            for source in &cfg.sources {
                println!("source: {}", utils::rel_to_wd(source));
            }

            let envs: Vec<&str> = cfg
                .env
                .iter()
                .filter(|(_, enabled)| **enabled)
                .map(|(name, _)| name.as_str())
                .collect();
            if envs.is_empty() {
                println!("env: (none)");
            } else {
                println!("env: {}", envs.join(", "));
            }

            let globals: Vec<String> = cfg
                .globals
                .iter()
                .map(|(name, access)| format!("{} ({})", name, access.as_str()))
                .collect();
            if globals.is_empty() {
                println!("globals: (none)");
            } else {
                println!("globals: {}", globals.join(", "));
            }

            if cfg.parser_options.is_empty() {
                println!("parser: (default)");
            } else {
                let mut parser_parts = Vec::new();
                if let Some(parser) = &cfg.parser_options.parser {
                    parser_parts.push(format!("parser={}", parser));
                }
                if let Some(version) = cfg.parser_options.ecma_version {
                    parser_parts.push(format!("ecmaVersion={}", version));
                }
                if let Some(kind) = cfg.parser_options.source_type {
                    parser_parts.push(format!("sourceType={}", kind));
                }
                println!("parser: {}", parser_parts.join(" "));
            }

            let mut errors = 0usize;
            let mut warnings = 0usize;
            let mut off = 0usize;
            for (name, rule) in &cfg.rules {
                let line = match rule.severity {
                    Severity::Error => {
                        errors += 1;
                        format!("{} {} error ({})", severity_icon("error", color), name, rule.origin)
                    }
                    Severity::Warn => {
                        warnings += 1;
                        format!("{} {} warn ({})", severity_icon("warning", color), name, rule.origin)
                    }
                    Severity::Off => {
                        off += 1;
                        let text = format!("· {} off ({})", name, rule.origin);
                        if color {
                            text.bright_black().to_string()
                        } else {
                            text
                        }
                    }
                };
                println!("{}", line);
            }
            let summary = format!(
                "— Summary — errors={} warnings={} off={} rules={}",
                errors,
                warnings,
                off,
                cfg.rules.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the merged raw record with its contributing sources.
pub fn print_show(record: &LintRecord, sources: &[PathBuf], output: &str, body: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_show_json(record, sources)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for source in sources {
                let line = format!("source: {}", utils::rel_to_wd(source));
                if color {
                    println!("{}", line.bright_black());
                } else {
                    println!("{}", line);
                }
            }
            print!("{}", body);
        }
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult) -> JsonVal {
    serde_json::to_value(res).unwrap()
}

/// Compose resolve JSON object (pure) for testing/snapshot purposes.
pub fn compose_resolved_json(cfg: &ResolvedConfig) -> JsonVal {
    serde_json::to_value(cfg).unwrap()
}

/// Compose show JSON object (pure) for testing/snapshot purposes.
pub fn compose_show_json(record: &LintRecord, sources: &[PathBuf]) -> JsonVal {
    json!({"record": record, "sources": sources})
}
