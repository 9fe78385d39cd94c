//! Plan history service

use std::io::Write;

use crate::error::PaydayResult;
use crate::export::export_plan_runs_csv;
use crate::models::PlanRun;
use crate::storage::Storage;

/// Read access to recorded plan runs
pub struct HistoryService<'a> {
    storage: &'a Storage,
}

impl<'a> HistoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Runs newest first, optionally capped
    pub fn list(&self, limit: Option<usize>) -> PaydayResult<Vec<PlanRun>> {
        let mut runs = self.storage.plan_runs.list()?;
        if let Some(limit) = limit {
            runs.truncate(limit);
        }
        Ok(runs)
    }

    /// Look up a run by ID or ID prefix
    pub fn show(&self, reference: &str) -> PaydayResult<PlanRun> {
        self.storage.plan_runs.find(reference)
    }

    /// Write every recorded run as CSV, newest first
    pub fn export_csv<W: Write>(&self, writer: W) -> PaydayResult<usize> {
        let runs = self.storage.plan_runs.list()?;
        export_plan_runs_csv(&runs, writer)?;
        Ok(runs.len())
    }
}
