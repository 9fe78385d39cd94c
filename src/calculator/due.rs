//! Due-window resolution
//!
//! Works out how much of a bill falls due inside a half-open pay window
//! `[start, end)`, per cadence:
//!
//! - weekly: one charge per occurrence of the anchor weekday in the window
//! - biweekly: exactly one charge, since the window is one biweekly pay cycle
//! - monthly: one charge if the (month-length clamped) due day lands in the
//!   window. Only presence is detected, so a window spanning two due dates
//!   still yields a single charge.
//! - anything else: nothing due

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;

use crate::models::{Bill, Cadence, Money, PayWindow};

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Count occurrences of `anchor_weekday` (0 = Monday) in `[start, end)`
pub fn count_weekly_occurrences(start: NaiveDate, end: NaiveDate, anchor_weekday: u8) -> i64 {
    if end <= start {
        return 0;
    }

    let start_weekday = i64::from(start.weekday().num_days_from_monday());
    let offset = (i64::from(anchor_weekday) - start_weekday).rem_euclid(7);
    let first = start + Duration::days(offset);
    if first >= end {
        return 0;
    }

    let span_days = (end - first).num_days();
    1 + (span_days - 1) / 7
}

/// Calendar months touched by a window, as `(year, month)`
///
/// The first item is the month containing `start`; each later month is
/// yielded while its first day is still before `end`.
struct MonthsTouched {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthsTouched {
    fn new(window: &PayWindow) -> Self {
        Self {
            cursor: Some(window.start),
            end: window.end,
        }
    }
}

impl Iterator for MonthsTouched {
    type Item = (i32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.filter(|c| *c < self.end)?;
        self.cursor = if current.month() == 12 {
            NaiveDate::from_ymd_opt(current.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(current.year(), current.month() + 1, 1)
        };
        Some((current.year(), current.month()))
    }
}

/// Whether a monthly due day lands inside the window
///
/// Due days past the end of a month clamp to its last day, so day 31 is
/// due on Feb 28 (or 29) and Apr 30.
pub fn is_monthly_due(due_day: Option<u8>, window: &PayWindow) -> bool {
    let Some(due_day) = due_day else {
        return false;
    };

    MonthsTouched::new(window).any(|(year, month)| {
        let day = u32::from(due_day).min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).is_some_and(|due| window.contains(due))
    })
}

/// Amount of `bill` due inside `window`
pub fn due_amount(bill: &Bill, window: &PayWindow) -> Money {
    match &bill.cadence {
        Cadence::Weekly => {
            let anchor = bill
                .weekday_anchor
                .unwrap_or_else(|| window.start.weekday().num_days_from_monday() as u8);
            bill.amount * count_weekly_occurrences(window.start, window.end, anchor)
        }
        Cadence::Biweekly => bill.amount,
        Cadence::Monthly if is_monthly_due(bill.due_day, window) => bill.amount,
        Cadence::Monthly => Money::zero(),
        Cadence::Other(raw) => {
            warn!("bill '{}' has unrecognized cadence '{}'; treating as not due", bill.name, raw);
            Money::zero()
        }
    }
}
