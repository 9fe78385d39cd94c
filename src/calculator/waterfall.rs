//! Waterfall allocation
//!
//! Commits a paycheck to buckets in a fixed priority order, each taking
//! `min(remaining, wanted)`:
//!
//! 1. bills due in the window, ordered by due day (none last) then name
//! 2. the spending buffer
//! 3. the sum of debt minimums
//! 4. surplus routed to the preferred target, capped at safe-to-invest
//! 5. everything left over, as extra debt paydown
//!
//! Bills are funded strictly front to back: a short paycheck fully funds
//! earlier bills and starves later ones.

use crate::models::{
    Allocation, Bill, BillFunding, Bucket, Debt, Money, PayWindow, Preferences, SurplusTarget,
};

use super::due::due_amount;

/// Allocator state after every bucket has been filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waterfall {
    pub window: PayWindow,
    pub paycheck_amount: Money,
    pub allocations: Vec<Allocation>,

    pub bills: Vec<BillFunding>,
    pub bills_due_total: Money,
    pub bills_funded_total: Money,

    pub buffer_target: Money,
    pub buffer_allocated: Money,

    pub debt_min_total: Money,
    pub debt_min_allocated: Money,

    pub surplus_target: SurplusTarget,
    pub starting_liquid_cash: Money,
    pub projected_end_cash: Money,
    pub min_cash_buffer: Money,
    pub safe_to_invest: Money,
}

/// Bills in funding order: due day ascending with no due day last, then name
pub fn funding_order(bills: &[Bill]) -> Vec<&Bill> {
    let mut ordered: Vec<&Bill> = bills.iter().collect();
    ordered.sort_by(|a, b| {
        (a.due_day.is_none(), a.due_day, &a.name).cmp(&(b.due_day.is_none(), b.due_day, &b.name))
    });
    ordered
}

/// Take up to `wanted` out of `remaining`
fn draw(remaining: &mut Money, wanted: Money) -> Money {
    let granted = (*remaining).min(wanted);
    *remaining -= granted;
    granted
}

/// Run the waterfall for one paycheck
pub fn run(
    paycheck_amount: Money,
    bills: &[Bill],
    debts: &[Debt],
    window: &PayWindow,
    preferences: &Preferences,
    starting_liquid_cash: Money,
) -> Waterfall {
    let mut remaining = paycheck_amount;

    let mut funded_bills = Vec::new();
    let mut bills_due_total = Money::zero();
    let mut bills_funded_total = Money::zero();

    for bill in funding_order(bills) {
        let due = due_amount(bill, window);
        if !due.is_positive() {
            continue;
        }

        let funded = draw(&mut remaining, due);
        bills_due_total += due;
        bills_funded_total += funded;
        funded_bills.push(BillFunding {
            bill_id: bill.id,
            bill_name: bill.name.clone(),
            cadence: bill.cadence.clone(),
            amount_due: due,
            amount_funded: funded,
            fully_funded: funded.covers(due),
        });
    }

    let buffer_target = preferences.buffer_target;
    let buffer_allocated = draw(&mut remaining, buffer_target);

    let debt_min_total: Money = debts.iter().map(|d| d.min_payment).sum();
    let debt_min_allocated = draw(&mut remaining, debt_min_total);

    // Targets, not allocations: the position if every obligation were met
    let projected_end_cash =
        starting_liquid_cash + paycheck_amount - bills_due_total - buffer_target - debt_min_total;
    let min_cash_buffer = preferences.min_cash_buffer;
    let safe_to_invest = (projected_end_cash - min_cash_buffer).max(Money::zero());

    let mut allocations = vec![
        Allocation::new(Bucket::Bills, bills_funded_total),
        Allocation::new(Bucket::Spending, buffer_allocated),
        Allocation::new(Bucket::DebtMinimum, debt_min_allocated),
    ];

    let surplus_target = preferences.primary_surplus_target;
    if let Some(bucket) = Bucket::for_surplus(surplus_target) {
        let routed = draw(&mut remaining, safe_to_invest);
        allocations.push(Allocation::new(bucket, routed));
    }
    allocations.push(Allocation::new(Bucket::ExtraDebt, remaining));

    Waterfall {
        window: *window,
        paycheck_amount,
        allocations,
        bills: funded_bills,
        bills_due_total,
        bills_funded_total,
        buffer_target,
        buffer_allocated,
        debt_min_total,
        debt_min_allocated,
        surplus_target,
        starting_liquid_cash,
        projected_end_cash,
        min_cash_buffer,
        safe_to_invest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    fn window() -> PayWindow {
        PayWindow::starting(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), 14)
    }

    fn prefs(target: SurplusTarget) -> Preferences {
        Preferences::new(cents(60000), cents(200000), target)
    }

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("Student Loan", cents(800000), 5.0, cents(12000)),
            Debt::new("Credit Card", cents(120000), 20.0, cents(5000)),
        ]
    }

    fn buckets(w: &Waterfall) -> Vec<Bucket> {
        w.allocations.iter().map(|a| a.bucket).collect()
    }

    #[test]
    fn test_funding_order() {
        let bills = vec![
            Bill::weekly("Groceries", cents(100), None),
            Bill::monthly("Phone", cents(100), 20),
            Bill::monthly("Internet", cents(100), 10),
            Bill::monthly("Electric", cents(100), 10),
            Bill::biweekly("Daycare", cents(100)),
        ];
        let names: Vec<_> = funding_order(&bills).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Electric", "Internet", "Phone", "Daycare", "Groceries"]
        );
    }

    #[test]
    fn test_greedy_funding_starves_later_bills() {
        let bills = vec![
            Bill::monthly("Internet", cents(8000), 10),
            Bill::monthly("Car", cents(30000), 6),
        ];
        let w = run(cents(32000), &bills, &[], &window(), &prefs(SurplusTarget::Invest), cents(0));

        assert_eq!(w.bills[0].bill_name, "Car");
        assert!(w.bills[0].fully_funded);
        assert_eq!(w.bills[1].bill_name, "Internet");
        assert_eq!(w.bills[1].amount_funded, cents(2000));
        assert!(!w.bills[1].fully_funded);
        assert_eq!(w.bills_due_total, cents(38000));
        assert_eq!(w.bills_funded_total, cents(32000));
        assert_eq!(w.buffer_allocated, Money::zero());
    }

    #[test]
    fn test_bills_not_due_are_skipped() {
        let bills = vec![
            Bill::monthly("Rent", cents(120000), 1),
            Bill::monthly("Internet", cents(8000), 10),
        ];
        let w = run(cents(250000), &bills, &[], &window(), &prefs(SurplusTarget::Invest), cents(0));
        assert_eq!(w.bills.len(), 1);
        assert_eq!(w.bills[0].bill_name, "Internet");
    }

    #[test]
    fn test_surplus_routed_to_invest_then_extra_debt() {
        // Safe to invest: 2000 + 2500 - 0 - 600 - 170 - 2000 = 1730
        let w = run(
            cents(250000),
            &[],
            &debts(),
            &window(),
            &prefs(SurplusTarget::Invest),
            cents(200000),
        );
        assert_eq!(
            buckets(&w),
            vec![
                Bucket::Bills,
                Bucket::Spending,
                Bucket::DebtMinimum,
                Bucket::Invest,
                Bucket::ExtraDebt
            ]
        );
        assert_eq!(w.safe_to_invest, cents(173000));
        assert_eq!(w.allocations[3].amount, cents(173000));
        assert_eq!(w.allocations[4].amount, cents(250000 - 60000 - 17000 - 173000));
    }

    #[test]
    fn test_emergency_fund_target_uses_its_own_bucket() {
        let w = run(
            cents(250000),
            &[],
            &debts(),
            &window(),
            &prefs(SurplusTarget::EmergencyFund),
            cents(500000),
        );
        assert_eq!(w.allocations[3].bucket, Bucket::EmergencyFundTopUp);
        assert_eq!(w.allocations[3].amount, cents(250000 - 60000 - 17000));
        assert_eq!(w.allocations[4], Allocation::new(Bucket::ExtraDebt, Money::zero()));
    }

    #[test]
    fn test_extra_debt_target_has_no_routed_bucket() {
        let w = run(
            cents(250000),
            &[],
            &debts(),
            &window(),
            &prefs(SurplusTarget::ExtraDebt),
            cents(500000),
        );
        assert_eq!(
            buckets(&w),
            vec![Bucket::Bills, Bucket::Spending, Bucket::DebtMinimum, Bucket::ExtraDebt]
        );
        assert_eq!(w.allocations[3].amount, cents(250000 - 60000 - 17000));
    }

    #[test]
    fn test_projection_uses_targets_not_allocations() {
        let bills = vec![Bill::monthly("Internet", cents(8000), 10)];
        let w = run(
            cents(5000),
            &bills,
            &debts(),
            &window(),
            &prefs(SurplusTarget::Invest),
            cents(100000),
        );
        // 1000 + 50 - 80 - 600 - 170
        assert_eq!(w.projected_end_cash, cents(100000 + 5000 - 8000 - 60000 - 17000));
        assert_eq!(w.safe_to_invest, Money::zero());
        assert_eq!(w.buffer_allocated, Money::zero());
        assert_eq!(w.debt_min_allocated, Money::zero());
    }

    #[test]
    fn test_zero_buckets_still_emitted() {
        let w = run(cents(100), &[], &[], &window(), &prefs(SurplusTarget::Invest), cents(0));
        assert_eq!(w.allocations.len(), 5);
        assert_eq!(w.allocations[0].amount, Money::zero());
        assert_eq!(w.allocations[1].amount, cents(100));
        assert_eq!(w.allocations[2].amount, Money::zero());
        assert_eq!(w.allocations[3].amount, Money::zero());
        assert_eq!(w.allocations[4].amount, Money::zero());
    }
}
