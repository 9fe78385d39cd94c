//! Income schedule model
//!
//! Describes the expected paycheck so a plan can be run without typing the
//! amount every time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bill::Cadence;
use super::money::Money;

/// Validation errors for income schedules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
    AmountTooLarge,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Typical net amount must be positive"),
            Self::AmountTooLarge => {
                write!(f, "Typical net amount cannot exceed {}", Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// The user's regular paycheck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSchedule {
    pub name: String,
    pub frequency: Cadence,
    pub next_pay_date: NaiveDate,
    pub typical_net_amount: Money,
}

impl IncomeSchedule {
    pub fn new(
        name: impl Into<String>,
        frequency: Cadence,
        next_pay_date: NaiveDate,
        typical_net_amount: Money,
    ) -> Self {
        Self {
            name: name.into(),
            frequency,
            next_pay_date,
            typical_net_amount,
        }
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.typical_net_amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        if !self.typical_net_amount.is_within_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        Ok(())
    }
}
