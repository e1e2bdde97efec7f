//! Structured result of `atlas migrate apply`.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Report printed by `atlas migrate apply --format '{{ json . }}'`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplyReport {
    pub driver: String,
    /// Target connection as atlas describes it. Kept opaque.
    #[serde(rename = "URL")]
    pub url: Option<serde_json::Value>,
    pub dir: String,
    pub pending: Vec<MigrationFile>,
    pub applied: Vec<AppliedFile>,
    /// Version of the database before execution.
    pub current: String,
    /// Version of the database after execution.
    pub target: String,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    pub error: String,
}

/// A migration file known to atlas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MigrationFile {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// A migration file that atlas executed, with its statements.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppliedFile {
    #[serde(flatten)]
    pub file: MigrationFile,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    /// Number of statements skipped when resuming a partially applied file.
    pub skipped: u64,
    /// Statements executed from this file.
    pub applied: Vec<String>,
    pub error: Option<StatementError>,
}

/// Statement that failed while applying a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatementError {
    pub stmt: String,
    pub text: String,
}

impl ApplyReport {
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Whether atlas reported a failure inside the report.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Wall-clock time spent by atlas, when both timestamps are present.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }

    /// One-line summary for the run log.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "current={} target={} pending={} applied={}",
            display_version(&self.current),
            display_version(&self.target),
            self.pending_count(),
            self.applied_count()
        );
        if let Some(elapsed) = self.elapsed() {
            summary.push_str(&format!(" elapsed={}ms", elapsed.num_milliseconds()));
        }
        if self.has_error() {
            summary.push_str(&format!(" error={:?}", self.error));
        }
        summary
    }
}

fn display_version(version: &str) -> &str {
    if version.is_empty() { "<none>" } else { version }
}
