//! Payday allocation engine
//!
//! A pure pipeline over caller-supplied snapshots: due amounts are resolved
//! per bill, the waterfall commits the paycheck to buckets, then the checks
//! and shortfall report are derived from the waterfall. Nothing here reads
//! the clock, touches storage or keeps state between calls, so identical
//! inputs always produce identical plans.
//!
//! Inputs are assumed valid; callers reject negative amounts and malformed
//! entities before planning. Funding problems surface only through
//! [`PlanChecks`](crate::models::PlanChecks) and the shortfall list.

pub mod checks;
pub mod due;
pub mod shortfall;
pub mod waterfall;

pub use due::{count_weekly_occurrences, days_in_month, due_amount, is_leap_year, is_monthly_due};
pub use waterfall::funding_order;

use log::debug;

use crate::models::{Bill, Debt, Money, PayWindow, PlanResult, Preferences};

/// Allocate one paycheck across bills, buffer, debt minimums and surplus
pub fn allocate(
    paycheck_amount: Money,
    bills: &[Bill],
    debts: &[Debt],
    window: &PayWindow,
    preferences: &Preferences,
    starting_liquid_cash: Money,
) -> PlanResult {
    let waterfall = waterfall::run(
        paycheck_amount,
        bills,
        debts,
        window,
        preferences,
        starting_liquid_cash,
    );
    let checks = checks::evaluate(&waterfall);
    let unfunded_items = shortfall::report(&waterfall);

    debug!(
        "allocated {} over {}: {} bills due, {} funded, safe to invest {}",
        paycheck_amount,
        window,
        waterfall.bills_due_total,
        waterfall.bills_funded_total,
        waterfall.safe_to_invest
    );

    PlanResult {
        window: waterfall.window,
        paycheck_amount,
        allocations: waterfall.allocations,
        checks,
        primary_surplus_target: waterfall.surplus_target,
        starting_liquid_cash,
        projected_end_cash: waterfall.projected_end_cash,
        safe_to_invest: waterfall.safe_to_invest,
        bills_due_total: waterfall.bills_due_total,
        debt_min_total: waterfall.debt_min_total,
        buffer_target: waterfall.buffer_target,
        min_cash_buffer: waterfall.min_cash_buffer,
        bills_funded: waterfall.bills,
        unfunded_items,
    }
}
