//! Planning preferences
//!
//! `Preferences` is what the allocation engine consumes: every value is
//! explicit. `ProfilePreferences` is the stored form, which may leave the
//! buffer amounts unset so configured defaults apply.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Where surplus cash goes once obligations are met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SurplusTarget {
    #[default]
    Invest,
    ExtraDebt,
    EmergencyFund,
}

impl SurplusTarget {
    /// Parse a surplus target; anything unrecognized means `Invest`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "extra_debt" => Self::ExtraDebt,
            "emergency_fund" => Self::EmergencyFund,
            _ => Self::Invest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invest => "invest",
            Self::ExtraDebt => "extra_debt",
            Self::EmergencyFund => "emergency_fund",
        }
    }
}

impl From<String> for SurplusTarget {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SurplusTarget> for String {
    fn from(target: SurplusTarget) -> Self {
        target.as_str().to_string()
    }
}

impl fmt::Display for SurplusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully resolved preferences for one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Spending buffer reserved from each paycheck
    pub buffer_target: Money,
    /// Projected cash floor; surplus above it is safe to route
    pub min_cash_buffer: Money,
    #[serde(default)]
    pub primary_surplus_target: SurplusTarget,
}

impl Preferences {
    pub fn new(buffer_target: Money, min_cash_buffer: Money, target: SurplusTarget) -> Self {
        Self {
            buffer_target,
            min_cash_buffer,
            primary_surplus_target: target,
        }
    }
}

/// Preferences as stored in the profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfilePreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_target: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cash_buffer: Option<Money>,

    #[serde(default)]
    pub primary_surplus_target: SurplusTarget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProfilePreferences {
    /// Fill unset amounts from the given defaults
    pub fn resolve(&self, default_buffer: Money, default_min_cash: Money) -> Preferences {
        Preferences {
            buffer_target: self.buffer_target.unwrap_or(default_buffer),
            min_cash_buffer: self.min_cash_buffer.unwrap_or(default_min_cash),
            primary_surplus_target: self.primary_surplus_target,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.buffer_target.is_some_and(|m| m.is_negative()) {
            return Err("Buffer target cannot be negative".into());
        }
        if self.min_cash_buffer.is_some_and(|m| m.is_negative()) {
            return Err("Minimum cash buffer cannot be negative".into());
        }
        let too_large = |m: &Option<Money>| m.is_some_and(|m| !m.is_within_limit());
        if too_large(&self.buffer_target) || too_large(&self.min_cash_buffer) {
            return Err(format!("Buffer amounts cannot exceed {}", Money::MAX_AMOUNT));
        }
        Ok(())
    }
}
