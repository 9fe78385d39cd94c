//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod bill;
pub mod debt;
pub mod history;
pub mod plan;
pub mod prefs;

pub use account::{handle_account_command, AccountCommands};
pub use bill::{handle_bill_command, BillCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use history::{handle_history_command, HistoryCommands};
pub use plan::{handle_plan_command, PlanArgs};
pub use prefs::{handle_prefs_command, PrefsCommands};

use chrono::NaiveDate;

use crate::error::{PaydayError, PaydayResult};
use crate::models::Money;

/// Parse a user-entered amount such as "1200", "85.50" or "$85.50"
pub(crate) fn parse_money(field: &str, input: &str) -> PaydayResult<Money> {
    Money::parse(input).map_err(|e| {
        PaydayError::Validation(format!(
            "Invalid {}: '{}'. Use format like '85.50' or '85'. Error: {}",
            field, input, e
        ))
    })
}

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(field: &str, input: &str) -> PaydayResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PaydayError::Validation(format!(
            "Invalid {}: '{}'. Use YYYY-MM-DD",
            field, input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("amount", "$85.50").unwrap().cents(), 8550);
        assert!(parse_money("amount", "eighty").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("date", "2026-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
        assert!(parse_date("date", "01/05/2026").is_err());
    }
}
