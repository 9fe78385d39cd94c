//! End-to-end allocation scenarios against the library API

use chrono::NaiveDate;

use payday_planner::calculator::{allocate, count_weekly_occurrences, due_amount};
use payday_planner::models::{
    Bill, Bucket, Debt, Money, PayWindow, PlanResult, Preferences, SurplusTarget,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cents(c: i64) -> Money {
    Money::from_cents(c)
}

fn two_week_window() -> PayWindow {
    PayWindow::new(date(2026, 1, 5), date(2026, 1, 19))
}

fn prefs(target: SurplusTarget) -> Preferences {
    Preferences::new(cents(60000), cents(200000), target)
}

fn sample_bills() -> Vec<Bill> {
    vec![
        Bill::monthly("Rent", cents(120000), 1),
        Bill::monthly("Internet", cents(8000), 10),
        Bill::weekly("Groceries", cents(10000), None),
    ]
}

fn sample_debts() -> Vec<Debt> {
    vec![
        Debt::new("Card", cents(150000), 19.99, cents(12000)),
        Debt::new("Loan", cents(500000), 5.0, cents(5000)),
    ]
}

fn assert_conserved(plan: &PlanResult) {
    let diff = (plan.total_allocated() - plan.paycheck_amount).abs();
    assert!(diff <= Money::TOLERANCE, "allocations drift by {}", diff);
}

#[test]
fn weekly_occurrences_over_two_weeks() {
    assert_eq!(count_weekly_occurrences(date(2026, 1, 5), date(2026, 1, 19), 0), 2);
    assert_eq!(count_weekly_occurrences(date(2026, 1, 5), date(2026, 1, 19), 2), 2);
}

#[test]
fn saturday_bill_is_due_twice() {
    let groceries = Bill::weekly("Groceries", cents(10000), Some(5));
    assert_eq!(due_amount(&groceries, &two_week_window()), cents(20000));
}

#[test]
fn narrow_window_selects_due_bills() {
    let window = PayWindow::new(date(2026, 1, 5), date(2026, 1, 12));
    let plan = allocate(
        cents(250000),
        &sample_bills(),
        &[],
        &window,
        &prefs(SurplusTarget::Invest),
        cents(0),
    );

    assert_eq!(plan.bills_due_total, cents(18000));
    let names: Vec<_> = plan.bills_funded.iter().map(|b| b.bill_name.as_str()).collect();
    assert_eq!(names, vec!["Internet", "Groceries"]);
    assert_conserved(&plan);
}

#[test]
fn safe_to_invest_floors_at_zero() {
    let preferences = Preferences::new(cents(60000), cents(600000), SurplusTarget::Invest);
    let plan = allocate(
        cents(120000),
        &sample_bills(),
        &sample_debts(),
        &two_week_window(),
        &preferences,
        cents(100000),
    );

    assert_eq!(plan.safe_to_invest, Money::zero());
    assert_eq!(plan.allocation(Bucket::Invest), Some(Money::zero()));
    assert!(!plan.checks.min_cash_buffer_met_ok);
    assert_conserved(&plan);
}

#[test]
fn surplus_is_routed_and_capped() {
    let plan = allocate(
        cents(250000),
        &sample_bills(),
        &sample_debts(),
        &two_week_window(),
        &prefs(SurplusTarget::Invest),
        cents(550000),
    );

    let committed = plan.allocation(Bucket::Bills).unwrap()
        + plan.allocation(Bucket::Spending).unwrap()
        + plan.allocation(Bucket::DebtMinimum).unwrap();
    let expected = plan.safe_to_invest.min(plan.paycheck_amount - committed);

    assert_eq!(plan.allocation(Bucket::Invest), Some(expected));
    assert_eq!(expected, cents(145000));
    assert_eq!(plan.allocation(Bucket::ExtraDebt), Some(Money::zero()));
    assert!(plan.checks.all_ok());
    assert!(plan.unfunded_items.is_empty());
    assert_conserved(&plan);
}

#[test]
fn emergency_fund_target_uses_its_own_bucket() {
    let plan = allocate(
        cents(250000),
        &sample_bills(),
        &sample_debts(),
        &two_week_window(),
        &prefs(SurplusTarget::EmergencyFund),
        cents(550000),
    );

    assert_eq!(plan.allocation(Bucket::Invest), None);
    assert_eq!(plan.allocation(Bucket::EmergencyFundTopUp), Some(cents(145000)));
}

#[test]
fn extra_debt_target_sends_everything_to_residual() {
    let plan = allocate(
        cents(250000),
        &sample_bills(),
        &sample_debts(),
        &two_week_window(),
        &prefs(SurplusTarget::ExtraDebt),
        cents(550000),
    );

    let buckets: Vec<_> = plan.allocations.iter().map(|a| a.bucket).collect();
    assert_eq!(
        buckets,
        vec![Bucket::Bills, Bucket::Spending, Bucket::DebtMinimum, Bucket::ExtraDebt]
    );
    assert_eq!(plan.allocation(Bucket::ExtraDebt), Some(cents(145000)));
}

#[test]
fn short_paycheck_names_each_gap() {
    // Internet 80 is funded first, Groceries (2 x 100) gets the remaining 20
    let plan = allocate(
        cents(10000),
        &sample_bills(),
        &sample_debts(),
        &two_week_window(),
        &prefs(SurplusTarget::Invest),
        cents(0),
    );

    assert!(!plan.checks.bills_covered_ok);
    assert!(!plan.checks.buffer_met_ok);
    assert_eq!(
        plan.unfunded_items,
        vec![
            "Groceries short by $180.00".to_string(),
            "Buffer short by $600.00".to_string(),
            "Debt minimums short by $170.00".to_string(),
        ]
    );
    assert_conserved(&plan);
}

#[test]
fn allocations_never_exceed_targets() {
    for paycheck in [0, 1, 7999, 8000, 28000, 88000, 105000, 250000, 1_000_000] {
        let plan = allocate(
            cents(paycheck),
            &sample_bills(),
            &sample_debts(),
            &two_week_window(),
            &prefs(SurplusTarget::Invest),
            cents(300000),
        );

        assert!(plan.allocation(Bucket::Bills).unwrap() <= plan.bills_due_total);
        assert!(plan.allocation(Bucket::Spending).unwrap() <= plan.buffer_target);
        assert!(plan.allocation(Bucket::DebtMinimum).unwrap() <= plan.debt_min_total);
        assert!(plan.allocation(Bucket::Invest).unwrap() <= plan.safe_to_invest);
        assert!(!plan.allocation(Bucket::ExtraDebt).unwrap().is_negative());
        assert!(plan.checks.allocations_sum_ok);
        assert_conserved(&plan);
    }
}

#[test]
fn identical_inputs_give_identical_plans() {
    let bills = sample_bills();
    let debts = sample_debts();
    let run = || {
        allocate(
            cents(250000),
            &bills,
            &debts,
            &two_week_window(),
            &prefs(SurplusTarget::Invest),
            cents(550000),
        )
    };

    assert_eq!(run(), run());
}
