//! Service layer for the payday planner
//!
//! The service layer sits between the CLI and storage: it validates input,
//! applies configured defaults and drives the allocation engine.

pub mod history;
pub mod plan;
pub mod profile;

pub use history::HistoryService;
pub use plan::{summarize, PlanRequest, PlanService};
pub use profile::ProfileService;
