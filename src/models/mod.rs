//! Shared data models for check output and record/preset schemas.

pub mod preset;
pub mod record;

use serde::Serialize;

#[derive(Serialize)]
/// A single configuration issue with severity and location.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub severity: String,
    pub path: String,
    pub message: String,
}

#[derive(Serialize)]
/// Aggregated issue summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub records: usize,
}

impl Summary {
    /// Tally issues by severity over `records` examined records.
    pub fn tally(issues: &[Issue], records: usize) -> Self {
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let mut infos = 0usize;
        for issue in issues {
            match issue.severity.as_str() {
                "error" => errors += 1,
                "warning" | "warn" => warnings += 1,
                _ => infos += 1,
            }
        }
        Summary {
            errors,
            warnings,
            infos,
            records,
        }
    }
}

#[derive(Serialize)]
/// Check results container.
pub struct CheckResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
