//! Profile repository for JSON storage
//!
//! The profile is a single document holding everything a plan is computed
//! from: accounts, bills, debts, preferences and the income schedule.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::PaydayError;
use crate::models::{Account, Bill, Debt, IncomeSchedule, ProfilePreferences};

use super::file_io::{read_json, write_json_atomic};

/// Serialized structure for profile.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub preferences: ProfilePreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_schedule: Option<IncomeSchedule>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.bills.is_empty()
            && self.debts.is_empty()
            && self.income_schedule.is_none()
    }
}

/// Remove the first item matching `pred`
fn take_first<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    items.iter().position(pred).map(|i| items.remove(i))
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Repository for the profile document
pub struct ProfileRepository {
    path: PathBuf,
    profile: RwLock<Profile>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            profile: RwLock::new(Profile::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Profile>, PaydayError> {
        self.profile
            .read()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Profile>, PaydayError> {
        self.profile
            .write()
            .map_err(|e| PaydayError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the profile from disk
    pub fn load(&self) -> Result<(), PaydayError> {
        let loaded: Profile = read_json(&self.path)?;
        *self.write()? = loaded;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), PaydayError> {
        let profile = self.read()?;
        write_json_atomic(&self.path, &*profile)
    }

    pub fn exists_on_disk(&self) -> bool {
        self.path.exists()
    }

    /// A copy of the whole profile
    pub fn snapshot(&self) -> Result<Profile, PaydayError> {
        Ok(self.read()?.clone())
    }

    /// Replace the whole profile (in memory; call `save` to persist)
    pub fn replace(&self, profile: Profile) -> Result<(), PaydayError> {
        *self.write()? = profile;
        Ok(())
    }

    pub fn bills(&self) -> Result<Vec<Bill>, PaydayError> {
        Ok(self.read()?.bills.clone())
    }

    pub fn debts(&self) -> Result<Vec<Debt>, PaydayError> {
        Ok(self.read()?.debts.clone())
    }

    pub fn accounts(&self) -> Result<Vec<Account>, PaydayError> {
        Ok(self.read()?.accounts.clone())
    }

    pub fn preferences(&self) -> Result<ProfilePreferences, PaydayError> {
        Ok(self.read()?.preferences.clone())
    }

    pub fn income_schedule(&self) -> Result<Option<IncomeSchedule>, PaydayError> {
        Ok(self.read()?.income_schedule.clone())
    }

    pub fn add_bill(&self, bill: Bill) -> Result<(), PaydayError> {
        let mut profile = self.write()?;
        if profile.bills.iter().any(|b| same_name(&b.name, &bill.name)) {
            return Err(PaydayError::Duplicate {
                entity_type: "Bill",
                identifier: bill.name,
            });
        }
        profile.bills.push(bill);
        Ok(())
    }

    /// Remove a bill by name (case-insensitive) or ID
    pub fn remove_bill(&self, reference: &str) -> Result<Bill, PaydayError> {
        let mut profile = self.write()?;
        take_first(&mut profile.bills, |b| {
            same_name(&b.name, reference) || b.id.matches(reference)
        })
        .ok_or_else(|| PaydayError::bill_not_found(reference))
    }

    pub fn add_debt(&self, debt: Debt) -> Result<(), PaydayError> {
        let mut profile = self.write()?;
        if profile.debts.iter().any(|d| same_name(&d.name, &debt.name)) {
            return Err(PaydayError::Duplicate {
                entity_type: "Debt",
                identifier: debt.name,
            });
        }
        profile.debts.push(debt);
        Ok(())
    }

    pub fn remove_debt(&self, reference: &str) -> Result<Debt, PaydayError> {
        let mut profile = self.write()?;
        take_first(&mut profile.debts, |d| {
            same_name(&d.name, reference) || d.id.matches(reference)
        })
        .ok_or_else(|| PaydayError::debt_not_found(reference))
    }

    pub fn add_account(&self, account: Account) -> Result<(), PaydayError> {
        let mut profile = self.write()?;
        if profile
            .accounts
            .iter()
            .any(|a| same_name(&a.name, &account.name))
        {
            return Err(PaydayError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }
        profile.accounts.push(account);
        Ok(())
    }

    pub fn remove_account(&self, reference: &str) -> Result<Account, PaydayError> {
        let mut profile = self.write()?;
        take_first(&mut profile.accounts, |a| {
            same_name(&a.name, reference) || a.id.matches(reference)
        })
        .ok_or_else(|| PaydayError::account_not_found(reference))
    }

    pub fn set_preferences(&self, preferences: ProfilePreferences) -> Result<(), PaydayError> {
        self.write()?.preferences = preferences;
        Ok(())
    }

    pub fn set_income_schedule(&self, schedule: Option<IncomeSchedule>) -> Result<(), PaydayError> {
        self.write()?.income_schedule = schedule;
        Ok(())
    }
}
