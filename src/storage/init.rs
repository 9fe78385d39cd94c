//! Storage initialization
//!
//! Handles first-run setup and the demo profile.

use chrono::NaiveDate;

use crate::config::paths::PaydayPaths;
use crate::error::PaydayError;
use crate::models::{
    Account, AccountType, Bill, Cadence, Debt, IncomeSchedule, Money, ProfilePreferences,
    SurplusTarget,
};

use super::file_io::write_json_atomic;
use super::profile::Profile;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and, when `demo` is set, writes the demo
/// profile. An existing profile is only replaced with `force`. Returns
/// whether a profile was written.
pub fn initialize_storage(
    paths: &PaydayPaths,
    demo: bool,
    force: bool,
) -> Result<bool, PaydayError> {
    paths.ensure_directories()?;

    let profile_path = paths.profile_file();
    if profile_path.exists() && !force {
        if demo {
            return Err(PaydayError::Duplicate {
                entity_type: "Profile",
                identifier: profile_path.display().to_string(),
            });
        }
        return Ok(false);
    }

    let profile = if demo {
        demo_profile()
    } else {
        Profile::default()
    };
    write_json_atomic(&profile_path, &profile)?;
    Ok(true)
}

/// A small household: two cash accounts, a credit card, four bills, two debts
/// and a biweekly paycheck
pub fn demo_profile() -> Profile {
    let cents = Money::from_cents;

    Profile {
        accounts: vec![
            Account::new("Main Checking", AccountType::Checking, cents(120000)),
            Account::new("Emergency Savings", AccountType::Savings, cents(250000)),
            Account::new("Rewards Card", AccountType::Credit, cents(-43012)),
        ],
        bills: vec![
            Bill::monthly("Rent", cents(120000), 1).with_autopay(true),
            Bill::monthly("Internet", cents(8500), 10).with_autopay(true),
            Bill::monthly("Phone", cents(6500), 20).with_autopay(true),
            Bill::weekly("Groceries", cents(14000), Some(5)),
        ],
        debts: vec![
            Debt::new("Student Loan", cents(820000), 4.2, cents(13000)),
            Debt::new("Credit Card", cents(180000), 21.99, cents(7000)),
        ],
        preferences: ProfilePreferences {
            buffer_target: Some(cents(60000)),
            min_cash_buffer: Some(cents(200000)),
            primary_surplus_target: SurplusTarget::Invest,
            currency: Some("CAD".to_string()),
            notes: Some("demo profile".to_string()),
        },
        income_schedule: NaiveDate::from_ymd_opt(2026, 1, 5).map(|next_pay_date| {
            IncomeSchedule::new("Paycheck", Cadence::Biweekly, next_pay_date, cents(239043))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_writes_demo_profile() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaydayPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths, true, false).unwrap());

        let profile: Profile = read_json(paths.profile_file()).unwrap();
        assert_eq!(profile.bills.len(), 4);
        assert_eq!(profile.debts.len(), 2);
        assert!(profile.income_schedule.is_some());
    }

    #[test]
    fn test_demo_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaydayPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, false, false).unwrap();
        assert!(initialize_storage(&paths, true, false).is_err());
        assert!(!initialize_storage(&paths, false, false).unwrap());
        assert!(initialize_storage(&paths, true, true).unwrap());
    }

    #[test]
    fn test_demo_profile_is_valid() {
        let profile = demo_profile();
        assert!(profile.bills.iter().all(|b| b.validate().is_ok()));
        assert!(profile.debts.iter().all(|d| d.validate().is_ok()));
    }
}
