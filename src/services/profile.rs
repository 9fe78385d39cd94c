//! Profile service
//!
//! Validated edits to the stored profile. Every mutation is persisted before
//! returning.

use log::info;

use crate::error::{PaydayError, PaydayResult};
use crate::models::{Account, Bill, Debt, IncomeSchedule, ProfilePreferences};
use crate::storage::Storage;

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add_bill(&self, bill: Bill) -> PaydayResult<Bill> {
        bill.validate()
            .map_err(|e| PaydayError::Validation(e.to_string()))?;
        self.storage.profile.add_bill(bill.clone())?;
        self.storage.profile.save()?;
        info!("added bill {} ({})", bill.name, bill.id);
        Ok(bill)
    }

    pub fn remove_bill(&self, reference: &str) -> PaydayResult<Bill> {
        let bill = self.storage.profile.remove_bill(reference)?;
        self.storage.profile.save()?;
        info!("removed bill {} ({})", bill.name, bill.id);
        Ok(bill)
    }

    /// Bills in the order the planner funds them
    pub fn list_bills(&self) -> PaydayResult<Vec<Bill>> {
        let bills = self.storage.profile.bills()?;
        Ok(crate::calculator::funding_order(&bills)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn add_debt(&self, debt: Debt) -> PaydayResult<Debt> {
        debt.validate()
            .map_err(|e| PaydayError::Validation(e.to_string()))?;
        self.storage.profile.add_debt(debt.clone())?;
        self.storage.profile.save()?;
        info!("added debt {} ({})", debt.name, debt.id);
        Ok(debt)
    }

    pub fn remove_debt(&self, reference: &str) -> PaydayResult<Debt> {
        let debt = self.storage.profile.remove_debt(reference)?;
        self.storage.profile.save()?;
        Ok(debt)
    }

    pub fn list_debts(&self) -> PaydayResult<Vec<Debt>> {
        self.storage.profile.debts()
    }

    pub fn add_account(&self, account: Account) -> PaydayResult<Account> {
        if account.name.trim().is_empty() {
            return Err(PaydayError::Validation("Account name cannot be empty".into()));
        }
        self.storage.profile.add_account(account.clone())?;
        self.storage.profile.save()?;
        Ok(account)
    }

    pub fn remove_account(&self, reference: &str) -> PaydayResult<Account> {
        let account = self.storage.profile.remove_account(reference)?;
        self.storage.profile.save()?;
        Ok(account)
    }

    pub fn list_accounts(&self) -> PaydayResult<Vec<Account>> {
        self.storage.profile.accounts()
    }

    pub fn preferences(&self) -> PaydayResult<ProfilePreferences> {
        self.storage.profile.preferences()
    }

    pub fn update_preferences(&self, preferences: ProfilePreferences) -> PaydayResult<()> {
        preferences.validate().map_err(PaydayError::Validation)?;
        self.storage.profile.set_preferences(preferences)?;
        self.storage.profile.save()
    }

    pub fn income_schedule(&self) -> PaydayResult<Option<IncomeSchedule>> {
        self.storage.profile.income_schedule()
    }

    pub fn set_income_schedule(&self, schedule: IncomeSchedule) -> PaydayResult<()> {
        schedule
            .validate()
            .map_err(|e| PaydayError::Validation(e.to_string()))?;
        self.storage.profile.set_income_schedule(Some(schedule))?;
        self.storage.profile.save()
    }
}
