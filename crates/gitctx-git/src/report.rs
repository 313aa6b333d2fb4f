//! Summary of every query against one directory

use std::fmt::Display;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::{Context, Result};

/// Outcome of one query in an [`InfoReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub operation: &'static str,
    /// Rendered value when the query succeeded
    pub value: Option<String>,
    /// Error text when it failed
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl ReportEntry {
    fn measure<T: Display>(operation: &'static str, query: impl FnOnce() -> Result<T>) -> Self {
        let started = Instant::now();
        let result = query();
        let elapsed = started.elapsed();

        let (value, error) = match result {
            Ok(v) => (Some(v.to_string()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            operation,
            value,
            error,
            elapsed,
        }
    }
}

/// Results of running every read-only query against a directory.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub path: String,
    pub entries: Vec<ReportEntry>,
}

impl InfoReport {
    pub fn total_elapsed(&self) -> Duration {
        self.entries.iter().map(|e| e.elapsed).sum()
    }

    pub fn get(&self, operation: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.operation == operation)
    }
}

impl Context {
    /// Run each read-only query against `path`, recording result and timing.
    ///
    /// Individual failures are captured in the report rather than returned.
    pub fn report(&self, path: impl AsRef<Path>) -> InfoReport {
        let dir = path.as_ref();

        let entries = vec![
            ReportEntry::measure("is-git", || Ok(self.is_git(dir))),
            ReportEntry::measure("remote-url", || self.remote_origin_url(dir)),
            ReportEntry::measure("sha", || self.sha(dir)),
            ReportEntry::measure("branch", || self.abbrev_ref(dir)),
            ReportEntry::measure("commit-time", || {
                self.commit_time(dir).map(|t| t.to_rfc3339())
            }),
            ReportEntry::measure("tags", || self.tags(dir).map(|t| t.join(", "))),
            ReportEntry::measure("latest-tag", || self.most_recent_tag(dir)),
            ReportEntry::measure("status", || self.status(dir)),
            ReportEntry::measure("top-level", || self.top_level(dir)),
        ];

        InfoReport {
            path: dir.display().to_string(),
            entries,
        }
    }
}
