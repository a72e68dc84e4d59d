//! lintrc CLI binary entry point.
//! Delegates to modules for loading, resolution, validation, and export.

mod cli;
mod config;
mod export;
mod loader;
mod models;
mod output;
mod presets;
mod resolve;
mod utils;
mod validate;

use clap::Parser;
use cli::{Cli, Commands};
use export::ExportFormat;
use loader::SourcedRecord;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Init { dir, format, force } => {
            let eff = config::resolve_effective(dir.as_deref(), None, None, None);
            let format = parse_format(format.as_deref());
            match export::init_record(&eff.start_dir, format, force) {
                Ok(path) => println!("wrote: {}", utils::rel_to_wd(&path)),
                Err(e) => {
                    eprintln!("{} {}", crate::utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Show {
            dir,
            config,
            output,
        } => {
            let eff = config::resolve_effective(
                dir.as_deref(),
                config.as_deref(),
                None,
                output.as_deref(),
            );
            let records = gather_records(&eff);
            let merged = resolve::merge_records(&records);
            let body = match export::render(&merged, ExportFormat::Toml) {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("{} {}", crate::utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let sources: Vec<PathBuf> = records.iter().rev().map(|s| s.path.clone()).collect();
            output::print_show(&merged, &sources, &eff.output, &body);
        }
        Commands::Resolve {
            dir,
            config,
            mode,
            output,
        } => {
            let eff = config::resolve_effective(
                dir.as_deref(),
                config.as_deref(),
                mode.as_deref(),
                output.as_deref(),
            );
            let records = gather_records(&eff);
            let (resolved, issues) = resolve::resolve(&records, &eff.mode);
            if eff.output != "json" {
                for issue in &issues {
                    let prefix = match issue.severity.as_str() {
                        "error" => crate::utils::error_prefix(),
                        "warning" => crate::utils::note_prefix(),
                        _ => crate::utils::info_prefix(),
                    };
                    eprintln!("{} {} ({})", prefix, issue.message, issue.file);
                }
            }
            output::print_resolved(&resolved, &eff.output);
            if issues.iter().any(|issue| issue.severity == "error") {
                std::process::exit(1);
            }
        }
        Commands::Check {
            dir,
            config,
            output,
        } => {
            let eff = config::resolve_effective(
                dir.as_deref(),
                config.as_deref(),
                None,
                output.as_deref(),
            );
            let records = gather_records(&eff);
            let result = validate::run_check(&records);
            output::print_check(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Export {
            dir,
            config,
            format,
            out,
        } => {
            let eff = config::resolve_effective(dir.as_deref(), config.as_deref(), None, None);
            let records = gather_records(&eff);
            let merged = resolve::merge_records(&records);
            let format = parse_format(format.as_deref());
            match out {
                Some(out) => {
                    let path = PathBuf::from(out);
                    if let Err(e) = export::write_record(&merged, format, &path) {
                        eprintln!("{} {}", crate::utils::error_prefix(), e);
                        std::process::exit(2);
                    }
                    println!("wrote: {}", utils::rel_to_wd(&path));
                }
                None => match export::render(&merged, format) {
                    Ok(body) => print!("{}", body),
                    Err(e) => {
                        eprintln!("{} {}", crate::utils::error_prefix(), e);
                        std::process::exit(2);
                    }
                },
            }
        }
    }
}

fn parse_format(flag: Option<&str>) -> ExportFormat {
    match flag.unwrap_or("toml").parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{} {}", crate::utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}

/// Load the record chain: an explicit `--config` path wins, otherwise
/// discovery walks upward from the start directory.
fn gather_records(eff: &config::Effective) -> Vec<SourcedRecord> {
    let loaded = match &eff.config_path {
        Some(path) => loader::load_sourced(path).map(|record| vec![record]),
        None => loader::discover(&eff.start_dir),
    };
    match loaded {
        Ok(records) => {
            if records.is_empty() {
                eprintln!(
                    "{} {}",
                    crate::utils::error_prefix(),
                    format!(
                        "No record found from {} upward. Run `lintrc init` to create one.",
                        eff.start_dir.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            records
        }
        Err(e) => {
            eprintln!("{} {}", crate::utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
