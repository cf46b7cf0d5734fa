use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

use super::ValidationError;
use crate::error_utils::format_error_path;

/// Everything found by one validation run.
///
/// Violations decide the exit status. Orphan files are informational only.
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    violations: Vec<ValidationError>,
    referenced: BTreeSet<PathBuf>,
    orphans: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub status: i32,
    pub violations: Vec<ViolationSummary>,
    pub orphans: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViolationSummary {
    pub kind: &'static str,
    pub message: String,
}

impl ValidationReport {
    pub fn from_violation(violation: ValidationError) -> Self {
        Self {
            violations: vec![violation],
            ..Default::default()
        }
    }

    pub fn push(&mut self, violation: ValidationError) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = ValidationError>) {
        self.violations.extend(violations);
    }

    pub fn set_referenced(&mut self, referenced: BTreeSet<PathBuf>) {
        self.referenced = referenced;
    }

    pub fn set_orphans(&mut self, orphans: Vec<PathBuf>) {
        self.orphans = orphans;
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Supporting material files that matched the roadmap
    pub fn referenced(&self) -> &BTreeSet<PathBuf> {
        &self.referenced
    }

    /// Supporting material files the roadmap never refers to
    pub fn orphans(&self) -> &[PathBuf] {
        &self.orphans
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_valid() { 0 } else { 1 }
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            status: self.exit_code(),
            violations: self
                .violations
                .iter()
                .map(|violation| ViolationSummary {
                    kind: violation.kind(),
                    message: violation.to_string(),
                })
                .collect(),
            orphans: self
                .orphans
                .iter()
                .map(|path| format_error_path(path))
                .collect(),
        }
    }
}
