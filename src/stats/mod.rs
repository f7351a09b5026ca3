//! Run summary counters for rename batches

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome counts for one `process_path` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Regular files considered
    pub scanned: usize,
    /// Files renamed (or that would be renamed, in a dry run)
    pub renamed: usize,
    /// Files left untouched: no mapping, or the target name already existed
    pub skipped: usize,
    /// Rename attempts that failed
    pub failed: usize,
    /// Wall-clock processing time in milliseconds
    pub elapsed_ms: u64,
    /// True when no filesystem changes were made
    pub dry_run: bool,
    /// When the run finished
    pub finished_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            scanned: 0,
            renamed: 0,
            skipped: 0,
            failed: 0,
            elapsed_ms: 0,
            dry_run,
            finished_at: chrono::Utc::now(),
        }
    }

    pub fn record_scanned(&mut self) {
        self.scanned += 1;
    }

    pub fn record_renamed(&mut self) {
        self.renamed += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Stamp elapsed time and completion timestamp
    pub fn finish(&mut self, started: Instant) {
        self.elapsed_ms = started.elapsed().as_millis() as u64;
        self.finished_at = chrono::Utc::now();
    }

    /// Files that were not renamed for any reason
    pub fn untouched(&self) -> usize {
        self.skipped + self.failed
    }
}
