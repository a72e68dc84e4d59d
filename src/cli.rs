//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintrc",
    version,
    about = "Lint run-configuration manager",
    long_about = "lintrc — a tiny, fast CLI to scaffold, inspect, resolve, and validate lint run-configuration records (.lintrc.toml|yaml|json).\n\nMode precedence: --mode > LINTRC_MODE > development.",
    after_help = "Examples:\n  lintrc init\n  lintrc resolve --mode production\n  lintrc check --output json\n  lintrc export --format yaml --out .lintrc.yaml",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for scaffolding, inspecting, and validating records.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current lintrc version."
    )]
    Version,
    /// Write a starter record
    #[command(
        about = "Write a starter record",
        long_about = "Write the starter record into a directory: browser and node contexts, the vue3-essential and recommended presets, one readonly global, and console/debugger rules that tighten to warn in production builds.",
        after_help = "Examples:\n  lintrc init\n  lintrc init --format yaml --force"
    )]
    Init {
        #[arg(long, help = "Directory to write into (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "Record format: toml|yaml|json (default: toml)")]
        format: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Replace an existing record")]
        force: bool,
    },
    /// Show the merged raw record
    #[command(
        about = "Show the merged raw record",
        long_about = "Print the record chain merged into one raw record, presets unexpanded. Use resolve to see the effective configuration.",
        after_help = "Examples:\n  lintrc show\n  lintrc show --config conf/.lintrc.yaml --output json"
    )]
    Show {
        #[arg(long, help = "Directory discovery starts from (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "Explicit record path (skips discovery)")]
        config: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Resolve the effective configuration
    #[command(
        about = "Resolve the effective configuration",
        long_about = "Expand presets and environment contexts, apply the record chain, and resolve per-mode rules against the active build mode.",
        after_help = "Examples:\n  lintrc resolve\n  lintrc resolve --mode production --output json"
    )]
    Resolve {
        #[arg(long, help = "Directory discovery starts from (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "Explicit record path (skips discovery)")]
        config: Option<String>,
        #[arg(long, help = "Build mode (default: LINTRC_MODE or development)")]
        mode: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Validate the record chain
    #[command(
        about = "Validate the record chain",
        long_about = "Report unknown presets and environments, malformed identifiers, and per-mode tables that can never resolve. Errors contribute to CI exits.",
        after_help = "Examples:\n  lintrc check\n  lintrc check --output json"
    )]
    Check {
        #[arg(long, help = "Directory discovery starts from (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "Explicit record path (skips discovery)")]
        config: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Convert the merged record to another format
    #[command(
        about = "Convert the merged record",
        long_about = "Merge the record chain and write it out in the requested format with canonical spellings and sorted keys.",
        after_help = "Examples:\n  lintrc export --format json\n  lintrc export --format yaml --out .lintrc.yaml"
    )]
    Export {
        #[arg(long, help = "Directory discovery starts from (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "Explicit record path (skips discovery)")]
        config: Option<String>,
        #[arg(long, help = "Target format: toml|yaml|json (default: toml)")]
        format: Option<String>,
        #[arg(long, help = "Output file (default: stdout)")]
        out: Option<String>,
    },
}
