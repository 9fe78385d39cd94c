//! Display formatting for terminal output
//!
//! Plain-text tables for plans, plan history and the stored profile.

pub mod plan;
pub mod profile;
pub mod report;

pub use plan::{format_plan_run, format_run_list};
pub use profile::{format_account_list, format_bill_list, format_debt_list, format_preferences};
