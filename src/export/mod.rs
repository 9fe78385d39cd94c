//! Export module for the payday planner
//!
//! - CSV: one row per recorded plan run (spreadsheet-compatible)
//! - JSON: the full profile plus history, machine-readable

pub mod csv;
pub mod json;

pub use self::csv::{export_plan_runs_csv, PlanRunRow};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
