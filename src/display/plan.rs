//! Plan display formatting
//!
//! Renders a plan run as the allocation table, per-bill funding, checks and
//! shortfalls, followed by the one-line summary.

use crate::models::{PlanResult, PlanRun};

use super::report::{check_mark, column_width, double_separator, format_header, separator};

const WIDTH: usize = 52;

/// Format a full plan run for the terminal
pub fn format_plan_run(run: &PlanRun, symbol: &str) -> String {
    let plan = &run.plan;
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);

    let mut output = String::new();
    output.push_str(&format_header("Payday Plan", WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("  Run:       {}\n", run.id));
    output.push_str(&format!("  Period:    {}\n", plan.window));
    output.push_str(&format!("  Paycheck:  {}\n", money(plan.paycheck_amount)));
    output.push('\n');

    output.push_str(&format_allocations(plan, symbol));
    output.push('\n');

    if !plan.bills_funded.is_empty() {
        output.push_str(&format_bill_funding(plan, symbol));
        output.push('\n');
    }

    output.push_str("Cash position\n");
    output.push_str(&format!(
        "  Starting liquid cash:  {:>12}\n",
        money(plan.starting_liquid_cash)
    ));
    output.push_str(&format!(
        "  Projected end cash:    {:>12}\n",
        money(plan.projected_end_cash)
    ));
    output.push_str(&format!(
        "  Minimum cash buffer:   {:>12}\n",
        money(plan.min_cash_buffer)
    ));
    output.push_str(&format!(
        "  Safe to invest:        {:>12}\n",
        money(plan.safe_to_invest)
    ));
    output.push('\n');

    output.push_str("Checks\n");
    for (name, ok) in plan.checks.entries() {
        output.push_str(&format!("  {:<24} {}\n", name, check_mark(ok)));
    }

    if !plan.unfunded_items.is_empty() {
        output.push('\n');
        output.push_str("Unfunded\n");
        for item in &plan.unfunded_items {
            output.push_str(&format!("  - {}\n", item));
        }
    }

    output.push('\n');
    output.push_str(&run.summary);
    output.push('\n');
    output
}

fn format_allocations(plan: &PlanResult, symbol: &str) -> String {
    let labels: Vec<&str> = plan.allocations.iter().map(|a| a.bucket.label()).collect();
    let bucket_width = column_width(labels.iter().copied(), 6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<bucket_width$}  {:>12}\n",
        "Bucket",
        "Amount",
        bucket_width = bucket_width
    ));
    output.push_str(&separator(bucket_width + 14));
    output.push('\n');

    for allocation in &plan.allocations {
        output.push_str(&format!(
            "{:<bucket_width$}  {:>12}\n",
            allocation.bucket.label(),
            allocation.amount.format_with_symbol(symbol),
            bucket_width = bucket_width
        ));
    }

    output.push_str(&separator(bucket_width + 14));
    output.push('\n');
    output.push_str(&format!(
        "{:<bucket_width$}  {:>12}\n",
        "TOTAL",
        plan.total_allocated().format_with_symbol(symbol),
        bucket_width = bucket_width
    ));
    output
}

fn format_bill_funding(plan: &PlanResult, symbol: &str) -> String {
    let name_width = column_width(plan.bills_funded.iter().map(|b| b.bill_name.as_str()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}\n",
        "Bill",
        "Due",
        "Funded",
        name_width = name_width
    ));
    for bill in &plan.bills_funded {
        let marker = if bill.fully_funded { "" } else { "  short" };
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}{}\n",
            bill.bill_name,
            bill.amount_due.format_with_symbol(symbol),
            bill.amount_funded.format_with_symbol(symbol),
            marker,
            name_width = name_width
        ));
    }
    output
}

/// Format recorded runs as a one-line-per-run table
pub fn format_run_list(runs: &[PlanRun], symbol: &str) -> String {
    if runs.is_empty() {
        return "No plan runs recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<16}  {:<10}  {:>12}  {:>12}  {}\n",
        "ID", "Created", "Paycheck", "Amount", "Bills", "Status"
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<16}  {:-<10}  {:->12}  {:->12}  {:-<6}\n",
        "", "", "", "", "", ""
    ));

    for run in runs {
        let status = if run.plan.checks.all_ok() {
            "funded"
        } else {
            "gaps"
        };
        output.push_str(&format!(
            "{:<13}  {:<16}  {:<10}  {:>12}  {:>12}  {}\n",
            run.id.to_string(),
            run.created_at.format("%Y-%m-%d %H:%M").to_string(),
            run.paycheck_date().to_string(),
            run.paycheck_amount().format_with_symbol(symbol),
            run.plan.bills_due_total.format_with_symbol(symbol),
            status,
        ));
    }
    output
}
