//! JSON export of the whole data set
//!
//! The profile and every recorded plan run, stamped with a schema version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::PaydayResult;
use crate::models::PlanRun;
use crate::storage::{Profile, Storage};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile: Profile,

    /// Recorded runs, newest first
    pub plan_runs: Vec<PlanRun>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> PaydayResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: storage.profile.snapshot()?,
            plan_runs: storage.plan_runs.list()?,
        })
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> PaydayResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
