//! Shortfall reporting
//!
//! Describes every obligation the paycheck could not cover: bills in funding
//! order, then the buffer, then debt minimums. Gaps of a single cent are
//! treated as rounding and not reported.

use super::waterfall::Waterfall;

pub fn report(waterfall: &Waterfall) -> Vec<String> {
    let mut items: Vec<String> = waterfall
        .bills
        .iter()
        .filter(|b| !b.fully_funded)
        .map(|b| format!("{} short by {}", b.bill_name, b.shortfall()))
        .collect();

    if !waterfall.buffer_allocated.covers(waterfall.buffer_target) {
        items.push(format!(
            "Buffer short by {}",
            waterfall.buffer_target - waterfall.buffer_allocated
        ));
    }

    if !waterfall
        .debt_min_allocated
        .covers(waterfall.debt_min_total)
    {
        items.push(format!(
            "Debt minimums short by {}",
            waterfall.debt_min_total - waterfall.debt_min_allocated
        ));
    }

    items
}
