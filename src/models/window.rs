//! Pay window model
//!
//! A pay window is the half-open date range `[start, end)` a single paycheck
//! has to cover.

use chrono::{Days, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest pay period the planner accepts, in days
pub const MAX_PERIOD_DAYS: i64 = 366;

/// Half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window of `days` days beginning on `start`
    pub fn starting(start: NaiveDate, days: i64) -> Self {
        Self::new(start, start + Duration::days(days))
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of days covered
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for PayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} (exclusive)",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// End of the pay period: the next paycheck date when known, otherwise
/// `default_days` after this paycheck
///
/// `None` when `default_days` is negative or the end falls outside the
/// calendar range.
pub fn resolve_period_end(
    paycheck_date: NaiveDate,
    next_paycheck_date: Option<NaiveDate>,
    default_days: i64,
) -> Option<NaiveDate> {
    match next_paycheck_date {
        Some(next) => Some(next),
        None => {
            let days = u64::try_from(default_days).ok()?;
            paycheck_date.checked_add_days(Days::new(days))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_half_open_contains() {
        let window = PayWindow::starting(date(2026, 1, 5), 14);
        assert_eq!(window.end, date(2026, 1, 19));
        assert!(window.contains(date(2026, 1, 5)));
        assert!(window.contains(date(2026, 1, 18)));
        assert!(!window.contains(date(2026, 1, 19)));
        assert!(!window.contains(date(2026, 1, 4)));
        assert_eq!(window.num_days(), 14);
    }

    #[test]
    fn test_empty_window() {
        let window = PayWindow::new(date(2026, 1, 5), date(2026, 1, 5));
        assert!(window.is_empty());
        assert_eq!(window.num_days(), 0);
    }

    #[test]
    fn test_resolve_period_end() {
        assert_eq!(
            resolve_period_end(date(2026, 1, 5), None, 14),
            Some(date(2026, 1, 19))
        );
        assert_eq!(
            resolve_period_end(date(2026, 1, 5), Some(date(2026, 1, 12)), 14),
            Some(date(2026, 1, 12))
        );
    }

    #[test]
    fn test_resolve_period_end_out_of_range() {
        assert_eq!(resolve_period_end(date(2026, 1, 5), None, 100_000_000), None);
        assert_eq!(resolve_period_end(date(2026, 1, 5), None, i64::MAX), None);
        assert_eq!(resolve_period_end(date(2026, 1, 5), None, -1), None);
    }
}
