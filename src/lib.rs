//! Payday Planner - paycheck allocation from the command line
//!
//! This library splits a single paycheck across bills due before the next
//! payday, a spending buffer, debt minimums and a surplus target, then checks
//! the result and reports any shortfall.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calculator`: The allocation engine (due amounts, waterfall, checks, shortfalls)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, bills, debts, accounts, plans)
//! - `storage`: JSON file storage layer
//! - `services`: Orchestration between the CLI, storage and the engine
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//! - `logging`: Logger bootstrap for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use payday_planner::calculator::allocate;
//! use payday_planner::models::{Money, PayWindow, Preferences, SurplusTarget};
//!
//! let window = PayWindow::starting(paycheck_date, 14);
//! let prefs = Preferences::new(Money::from_cents(60000), Money::from_cents(200000), SurplusTarget::Invest);
//! let plan = allocate(Money::from_cents(250000), &bills, &debts, &window, &prefs, starting_cash);
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaydayError, PaydayResult};
