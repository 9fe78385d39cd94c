//! Bill model
//!
//! A recurring obligation paid out of the paycheck. How much of a bill falls
//! inside a pay window depends on its cadence; see `calculator::due`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BillId;
use super::money::Money;

/// How often a bill recurs
///
/// Unrecognized cadence strings are kept verbatim in `Other` rather than
/// rejected; the planner treats them as never due.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cadence {
    Weekly,
    Biweekly,
    Monthly,
    Other(String),
}

impl Cadence {
    /// Parse a cadence string, falling back to `Other`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "biweekly" | "bi-weekly" | "bi_weekly" => Self::Biweekly,
            "monthly" => Self::Monthly,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Cadence {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Cadence> for String {
    fn from(cadence: Cadence) -> Self {
        cadence.as_str().to_string()
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weekday names indexed Monday = 0 through Sunday = 6
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse a weekday given as a number (0 = Monday) or an English name/abbreviation
pub fn parse_weekday(s: &str) -> Option<u8> {
    let s = s.trim().to_lowercase();
    if let Ok(n) = s.parse::<u8>() {
        return (n < 7).then_some(n);
    }
    if s.len() < 3 {
        return None;
    }
    WEEKDAY_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&s))
        .map(|i| i as u8)
}

/// A recurring bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub name: String,

    /// Amount of a single occurrence
    pub amount: Money,

    pub cadence: Cadence,

    /// Day of month the bill is due (monthly bills only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u8>,

    /// Weekday the bill recurs on, 0 = Monday (weekly bills only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_anchor: Option<u8>,

    /// Informational only; allocation ignores it
    #[serde(default)]
    pub autopay: bool,
}

impl Bill {
    pub fn new(name: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            cadence,
            due_day: None,
            weekday_anchor: None,
            autopay: false,
        }
    }

    /// A monthly bill due on `due_day` (clamped to short months)
    pub fn monthly(name: impl Into<String>, amount: Money, due_day: u8) -> Self {
        Self {
            due_day: Some(due_day),
            ..Self::new(name, amount, Cadence::Monthly)
        }
    }

    /// A weekly bill; without an anchor it recurs on the pay window's first weekday
    pub fn weekly(name: impl Into<String>, amount: Money, weekday_anchor: Option<u8>) -> Self {
        Self {
            weekday_anchor,
            ..Self::new(name, amount, Cadence::Weekly)
        }
    }

    pub fn biweekly(name: impl Into<String>, amount: Money) -> Self {
        Self::new(name, amount, Cadence::Biweekly)
    }

    pub fn with_autopay(mut self, autopay: bool) -> Self {
        self.autopay = autopay;
        self
    }

    /// Human-readable schedule, e.g. "monthly on day 10" or "weekly on Saturday"
    pub fn schedule_description(&self) -> String {
        match (&self.cadence, self.due_day, self.weekday_anchor) {
            (Cadence::Monthly, Some(day), _) => format!("monthly on day {}", day),
            (Cadence::Weekly, _, Some(anchor)) => match WEEKDAY_NAMES.get(anchor as usize) {
                Some(name) => format!("weekly on {}", name),
                None => "weekly".to_string(),
            },
            (cadence, _, _) => cadence.to_string(),
        }
    }

    /// Check the bill before it reaches the planner
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(BillValidationError::NegativeAmount);
        }
        if !self.amount.is_within_limit() {
            return Err(BillValidationError::AmountTooLarge);
        }
        if let Some(day) = self.due_day {
            if !(1..=31).contains(&day) {
                return Err(BillValidationError::InvalidDueDay(day));
            }
        }
        if let Some(anchor) = self.weekday_anchor {
            if anchor > 6 {
                return Err(BillValidationError::InvalidWeekday(anchor));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.amount, self.schedule_description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NegativeAmount,
    AmountTooLarge,
    InvalidDueDay(u8),
    InvalidWeekday(u8),
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NegativeAmount => write!(f, "Bill amount cannot be negative"),
            Self::AmountTooLarge => {
                write!(f, "Bill amount cannot exceed {}", Money::MAX_AMOUNT)
            }
            Self::InvalidDueDay(day) => write!(f, "Due day must be 1-31, got {}", day),
            Self::InvalidWeekday(day) => {
                write!(f, "Weekday anchor must be 0-6 (Monday-Sunday), got {}", day)
            }
        }
    }
}

impl std::error::Error for BillValidationError {}
