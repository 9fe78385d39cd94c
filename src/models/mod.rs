//! Core data models for the payday planner
//!
//! This module contains the data structures the planner works with: money,
//! bills, debts, accounts, preferences, pay windows and plan results.

pub mod account;
pub mod bill;
pub mod debt;
pub mod ids;
pub mod income;
pub mod money;
pub mod plan;
pub mod preferences;
pub mod window;

pub use account::{liquid_cash, Account, AccountType};
pub use bill::{parse_weekday, Bill, BillValidationError, Cadence, WEEKDAY_NAMES};
pub use debt::{Debt, DebtValidationError};
pub use ids::{AccountId, BillId, DebtId, PlanRunId};
pub use income::IncomeSchedule;
pub use money::{quantize, Money, MoneyParseError};
pub use plan::{Allocation, BillFunding, Bucket, PlanChecks, PlanResult, PlanRun};
pub use preferences::{Preferences, ProfilePreferences, SurplusTarget};
pub use window::{resolve_period_end, PayWindow, MAX_PERIOD_DAYS};
