//! Plan run history repository
//!
//! Recorded plans are append-only; the file keeps them in creation order.

use std::path::PathBuf;
use std::sync::RwLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::PaydayError;
use crate::models::PlanRun;

use super::file_io::{read_json, write_json_atomic};

/// Serialized structure for plan_runs.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PlanRunData {
    #[serde(default)]
    runs: Vec<PlanRun>,
}

pub struct PlanRunRepository {
    path: PathBuf,
    runs: RwLock<Vec<PlanRun>>,
}

impl PlanRunRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            runs: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), PaydayError> {
        let file_data: PlanRunData = read_json(&self.path)?;

        let mut runs = self
            .runs
            .write()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *runs = file_data.runs;

        Ok(())
    }

    pub fn save(&self) -> Result<(), PaydayError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = PlanRunData { runs: runs.clone() };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a run and persist immediately
    pub fn record(&self, run: PlanRun) -> Result<(), PaydayError> {
        let id = run.id;
        {
            let mut runs = self.runs.write().map_err(|e| {
                PaydayError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            runs.push(run);
        }
        if let Err(e) = self.save() {
            let mut runs = self.runs.write().map_err(|e| {
                PaydayError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            runs.retain(|r| r.id != id);
            return Err(e);
        }
        info!("recorded plan run {}", id);
        Ok(())
    }

    /// All runs, newest first
    pub fn list(&self) -> Result<Vec<PlanRun>, PaydayError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list = runs.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    /// Find a run by full ID, UUID prefix or short display form
    ///
    /// An ambiguous prefix is a validation error.
    pub fn find(&self, reference: &str) -> Result<PlanRun, PaydayError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = runs.iter().filter(|r| r.id.matches(reference));
        match (matches.next(), matches.next()) {
            (Some(run), None) => Ok(run.clone()),
            (Some(_), Some(_)) => Err(PaydayError::Validation(format!(
                "Plan run reference '{}' is ambiguous",
                reference
            ))),
            (None, _) => Err(PaydayError::plan_run_not_found(reference)),
        }
    }

    pub fn count(&self) -> Result<usize, PaydayError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(runs.len())
    }
}
