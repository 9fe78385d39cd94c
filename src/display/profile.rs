//! Profile display formatting
//!
//! Tables for bills, debts and accounts, and the preference summary.

use crate::models::{liquid_cash, Account, Bill, Debt, Money, Preferences, ProfilePreferences};

use super::report::column_width;

/// Format bills as a table, in the order given
pub fn format_bill_list(bills: &[Bill], symbol: &str) -> String {
    if bills.is_empty() {
        return "No bills found.".to_string();
    }

    let name_width = column_width(bills.iter().map(|b| b.name.as_str()), 4);
    let schedules: Vec<String> = bills.iter().map(|b| b.schedule_description()).collect();
    let schedule_width = column_width(schedules.iter().map(String::as_str), 8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:<schedule_width$}  {:<7}  {}\n",
        "Name",
        "Amount",
        "Schedule",
        "Autopay",
        "ID",
        name_width = name_width,
        schedule_width = schedule_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<schedule_width$}  {:-<7}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        schedule_width = schedule_width,
    ));

    for (bill, schedule) in bills.iter().zip(&schedules) {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:<schedule_width$}  {:<7}  {}\n",
            bill.name,
            bill.amount.format_with_symbol(symbol),
            schedule,
            if bill.autopay { "yes" } else { "no" },
            bill.id,
            name_width = name_width,
            schedule_width = schedule_width,
        ));
    }

    output
}

/// Format debts as a table with a minimums total
pub fn format_debt_list(debts: &[Debt], symbol: &str) -> String {
    if debts.is_empty() {
        return "No debts found.".to_string();
    }

    let name_width = column_width(debts.iter().map(|d| d.name.as_str()), 5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>7}  {:>10}  {}\n",
        "Name",
        "Balance",
        "APR",
        "Minimum",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->7}  {:->10}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for debt in debts {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>6.2}%  {:>10}  {}\n",
            debt.name,
            debt.balance.format_with_symbol(symbol),
            debt.apr,
            debt.min_payment.format_with_symbol(symbol),
            debt.id,
            name_width = name_width,
        ));
    }

    let total_min: Money = debts.iter().map(|d| d.min_payment).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>7}  {:>10}\n",
        "TOTAL",
        "",
        "",
        total_min.format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

/// Format accounts as a table; the footer shows liquid cash
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = column_width(accounts.iter().map(|a| a.name.as_str()), 4);
    let types: Vec<String> = accounts.iter().map(|a| a.account_type.to_string()).collect();
    let type_width = column_width(types.iter().map(String::as_str), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>12}  {}\n",
        "Name",
        "Type",
        "Balance",
        "ID",
        name_width = name_width,
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<type_width$}  {:->12}  {:-<13}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for (account, account_type) in accounts.iter().zip(&types) {
        output.push_str(&format!(
            "{:<name_width$}  {:<type_width$}  {:>12}  {}\n",
            account.name,
            account_type,
            account.balance.format_with_symbol(symbol),
            account.id,
            name_width = name_width,
            type_width = type_width,
        ));
    }

    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>12}\n",
        "LIQUID",
        "",
        liquid_cash(accounts).format_with_symbol(symbol),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format stored preferences next to the values a plan would use
pub fn format_preferences(stored: &ProfilePreferences, effective: &Preferences, symbol: &str) -> String {
    let source = |set: bool| if set { "" } else { " (default)" };

    let mut output = String::new();
    output.push_str("Preferences\n");
    output.push_str(&format!(
        "  Buffer target:        {}{}\n",
        effective.buffer_target.format_with_symbol(symbol),
        source(stored.buffer_target.is_some())
    ));
    output.push_str(&format!(
        "  Minimum cash buffer:  {}{}\n",
        effective.min_cash_buffer.format_with_symbol(symbol),
        source(stored.min_cash_buffer.is_some())
    ));
    output.push_str(&format!(
        "  Surplus target:       {}\n",
        effective.primary_surplus_target.as_str()
    ));
    if let Some(currency) = &stored.currency {
        output.push_str(&format!("  Currency:             {}\n", currency));
    }
    if let Some(notes) = &stored.notes {
        output.push_str(&format!("  Notes:                {}\n", notes));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, SurplusTarget};

    #[test]
    fn test_format_bill_list() {
        assert_eq!(format_bill_list(&[], "$"), "No bills found.");

        let bills = vec![
            Bill::monthly("Rent", Money::from_cents(120000), 1).with_autopay(true),
            Bill::weekly("Groceries", Money::from_cents(14000), Some(5)),
        ];
        let output = format_bill_list(&bills, "$");
        assert!(output.contains("monthly on day 1"));
        assert!(output.contains("weekly on Saturday"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains("bill-"));
    }

    #[test]
    fn test_format_debt_list_total() {
        let debts = vec![
            Debt::new("Student Loan", Money::from_cents(820000), 4.2, Money::from_cents(13000)),
            Debt::new("Credit Card", Money::from_cents(180000), 21.99, Money::from_cents(7000)),
        ];
        let output = format_debt_list(&debts, "$");
        assert!(output.contains("21.99%"));
        let total = output.lines().last().unwrap();
        assert!(total.starts_with("TOTAL"));
        assert!(total.ends_with("$200.00"));
    }

    #[test]
    fn test_format_account_list_liquid_total() {
        let accounts = vec![
            Account::new("Checking", AccountType::Checking, Money::from_cents(120000)),
            Account::new("Card", AccountType::Credit, Money::from_cents(-43012)),
        ];
        let output = format_account_list(&accounts, "$");
        assert!(output.contains("-$430.12"));
        assert!(output.lines().last().unwrap().ends_with("$1200.00"));
    }

    #[test]
    fn test_format_preferences_marks_defaults() {
        let stored = ProfilePreferences {
            buffer_target: Some(Money::from_cents(50000)),
            ..Default::default()
        };
        let effective = stored.resolve(Money::from_cents(60000), Money::from_cents(200000));
        let output = format_preferences(&stored, &effective, "$");

        assert!(output.contains("$500.00\n"));
        assert!(output.contains("$2000.00 (default)"));
        assert!(output.contains(SurplusTarget::Invest.as_str()));
    }
}
