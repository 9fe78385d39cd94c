//! CSV export of plan history
//!
//! One row per run with the key totals and checks. Amounts are written as
//! plain decimals without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::error::{PaydayError, PaydayResult};
use crate::models::{Bucket, PlanRun};

/// Flattened view of a plan run
#[derive(Debug, Clone, Serialize)]
pub struct PlanRunRow {
    pub id: String,
    pub created_at: String,
    pub period_start: String,
    pub period_end: String,
    pub paycheck_amount: String,
    pub bills_due_total: String,
    pub bills: String,
    pub spending: String,
    pub debt_minimum: String,
    pub surplus_target: String,
    pub surplus: String,
    pub projected_end_cash: String,
    pub safe_to_invest: String,
    pub allocations_sum_ok: bool,
    pub bills_covered_ok: bool,
    pub buffer_met_ok: bool,
    pub min_cash_buffer_met_ok: bool,
    pub unfunded_items: String,
}

impl From<&PlanRun> for PlanRunRow {
    fn from(run: &PlanRun) -> Self {
        let plan = &run.plan;
        let amount = |bucket| {
            plan.allocation(bucket)
                .unwrap_or_default()
                .to_decimal_string()
        };
        let surplus = Bucket::for_surplus(plan.primary_surplus_target)
            .unwrap_or(Bucket::ExtraDebt);

        Self {
            id: run.id.as_uuid().to_string(),
            created_at: run.created_at.to_rfc3339(),
            period_start: plan.window.start.to_string(),
            period_end: plan.window.end.to_string(),
            paycheck_amount: plan.paycheck_amount.to_decimal_string(),
            bills_due_total: plan.bills_due_total.to_decimal_string(),
            bills: amount(Bucket::Bills),
            spending: amount(Bucket::Spending),
            debt_minimum: amount(Bucket::DebtMinimum),
            surplus_target: plan.primary_surplus_target.as_str().to_string(),
            surplus: amount(surplus),
            projected_end_cash: plan.projected_end_cash.to_decimal_string(),
            safe_to_invest: plan.safe_to_invest.to_decimal_string(),
            allocations_sum_ok: plan.checks.allocations_sum_ok,
            bills_covered_ok: plan.checks.bills_covered_ok,
            buffer_met_ok: plan.checks.buffer_met_ok,
            min_cash_buffer_met_ok: plan.checks.min_cash_buffer_met_ok,
            unfunded_items: plan.unfunded_items.join("; "),
        }
    }
}

/// Export plan runs to CSV in the order given
pub fn export_plan_runs_csv<W: Write>(runs: &[PlanRun], writer: W) -> PaydayResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for run in runs {
        csv_writer.serialize(PlanRunRow::from(run))?;
    }

    if runs.is_empty() {
        // serialize() emits the header with the first record only
        csv_writer.write_record(HEADER)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PaydayError::Export(e.to_string()))
}

const HEADER: [&str; 18] = [
    "id",
    "created_at",
    "period_start",
    "period_end",
    "paycheck_amount",
    "bills_due_total",
    "bills",
    "spending",
    "debt_minimum",
    "surplus_target",
    "surplus",
    "projected_end_cash",
    "safe_to_invest",
    "allocations_sum_ok",
    "bills_covered_ok",
    "buffer_met_ok",
    "min_cash_buffer_met_ok",
    "unfunded_items",
];
