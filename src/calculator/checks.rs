//! Funding adequacy checks

use crate::models::{Money, PlanChecks};

use super::waterfall::Waterfall;

/// Evaluate the named checks over a finished waterfall
pub fn evaluate(waterfall: &Waterfall) -> PlanChecks {
    let allocated: Money = waterfall.allocations.iter().map(|a| a.amount).sum();

    PlanChecks {
        allocations_sum_ok: allocated.within_tolerance(waterfall.paycheck_amount),
        bills_covered_ok: waterfall
            .bills_funded_total
            .covers(waterfall.bills_due_total),
        buffer_met_ok: waterfall.buffer_allocated.covers(waterfall.buffer_target),
        min_cash_buffer_met_ok: waterfall
            .projected_end_cash
            .covers(waterfall.min_cash_buffer),
    }
}
