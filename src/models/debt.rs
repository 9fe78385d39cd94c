//! Debt model
//!
//! Only the minimum payment takes part in allocation; balance and APR are
//! carried for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;

/// An outstanding debt with a required minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub balance: Money,

    /// Annual percentage rate, e.g. 21.99
    #[serde(default)]
    pub apr: f64,

    pub min_payment: Money,
}

impl Debt {
    pub fn new(name: impl Into<String>, balance: Money, apr: f64, min_payment: Money) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            balance,
            apr,
            min_payment,
        }
    }

    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance);
        }
        if self.min_payment.is_negative() {
            return Err(DebtValidationError::NegativeMinimum);
        }
        if !self.balance.is_within_limit() || !self.min_payment.is_within_limit() {
            return Err(DebtValidationError::AmountTooLarge);
        }
        if !self.apr.is_finite() || self.apr < 0.0 {
            return Err(DebtValidationError::InvalidApr);
        }
        Ok(())
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {:.2}% (min {})",
            self.name, self.balance, self.apr, self.min_payment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance,
    NegativeMinimum,
    AmountTooLarge,
    InvalidApr,
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance => write!(f, "Debt balance cannot be negative"),
            Self::NegativeMinimum => write!(f, "Minimum payment cannot be negative"),
            Self::AmountTooLarge => {
                write!(f, "Debt amounts cannot exceed {}", Money::MAX_AMOUNT)
            }
            Self::InvalidApr => write!(f, "APR must be a non-negative number"),
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let debt = Debt::new(
            "Credit Card",
            Money::from_cents(180000),
            21.99,
            Money::from_cents(7000),
        );
        assert_eq!(debt.to_string(), "Credit Card $1800.00 @ 21.99% (min $70.00)");
    }

    #[test]
    fn test_validation() {
        let ok = Debt::new("Loan", Money::from_cents(100), 4.2, Money::from_cents(10));
        assert!(ok.validate().is_ok());

        let negative_min = Debt::new("Loan", Money::from_cents(100), 4.2, Money::from_cents(-10));
        assert_eq!(
            negative_min.validate(),
            Err(DebtValidationError::NegativeMinimum)
        );

        let bad_apr = Debt::new("Loan", Money::from_cents(100), f64::NAN, Money::zero());
        assert_eq!(bad_apr.validate(), Err(DebtValidationError::InvalidApr));

        let huge_min = Debt::new(
            "Loan",
            Money::from_cents(100),
            4.2,
            Money::from_cents(i64::MAX),
        );
        assert_eq!(huge_min.validate(), Err(DebtValidationError::AmountTooLarge));
    }
}
