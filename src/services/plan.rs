//! Payday plan service
//!
//! Orchestrates a plan run: validates the request and the stored profile,
//! resolves the pay window, starting cash and preferences, runs the
//! allocation engine and records the result.

use chrono::NaiveDate;
use log::{debug, info};

use crate::calculator::allocate;
use crate::config::settings::Settings;
use crate::error::{PaydayError, PaydayResult};
use crate::models::{
    liquid_cash, resolve_period_end, Money, PayWindow, PlanChecks, PlanRun, MAX_PERIOD_DAYS,
};
use crate::storage::{Profile, Storage};

pub const FULLY_FUNDED_SUMMARY: &str =
    "Plan is fully funded: all due bills, buffer, and debt minimums are covered.";
pub const FUNDING_GAPS_SUMMARY: &str =
    "Plan has funding gaps. Review unfunded items and adjust spending or paycheck assumptions.";

/// One-line verdict for a set of checks
pub fn summarize(checks: &PlanChecks) -> &'static str {
    if checks.all_ok() {
        FULLY_FUNDED_SUMMARY
    } else {
        FUNDING_GAPS_SUMMARY
    }
}

/// Parameters for a plan run
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Paycheck amount; the income schedule's typical amount when absent
    pub paycheck_amount: Option<Money>,
    pub paycheck_date: NaiveDate,
    /// Explicit end of the pay period (exclusive)
    pub next_paycheck_date: Option<NaiveDate>,
    /// Replaces the profile's buffer target for this run only
    pub override_buffer: Option<Money>,
    /// Append the run to history (still subject to settings)
    pub record: bool,
}

impl PlanRequest {
    pub fn new(paycheck_date: NaiveDate) -> Self {
        Self {
            paycheck_amount: None,
            paycheck_date,
            next_paycheck_date: None,
            override_buffer: None,
            record: true,
        }
    }
}

/// Service for generating payday plans
pub struct PlanService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> PlanService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Generate a plan for one paycheck
    pub fn generate(&self, request: &PlanRequest) -> PaydayResult<PlanRun> {
        let profile = self.storage.profile.snapshot()?;
        validate_profile(&profile)?;

        let paycheck_amount = match request.paycheck_amount {
            Some(amount) => amount,
            None => profile
                .income_schedule
                .as_ref()
                .map(|s| s.typical_net_amount)
                .ok_or_else(|| {
                    PaydayError::Validation(
                        "No paycheck amount given and no income schedule configured".into(),
                    )
                })?,
        };
        if !paycheck_amount.is_positive() {
            return Err(PaydayError::Validation(format!(
                "Paycheck amount must be positive, got {}",
                paycheck_amount
            )));
        }
        if !paycheck_amount.is_within_limit() {
            return Err(PaydayError::Validation(format!(
                "Paycheck amount cannot exceed {}",
                Money::MAX_AMOUNT
            )));
        }

        if let Some(buffer) = request.override_buffer {
            if buffer.is_negative() {
                return Err(PaydayError::Validation(format!(
                    "Buffer override cannot be negative, got {}",
                    buffer
                )));
            }
            if !buffer.is_within_limit() {
                return Err(PaydayError::Validation(format!(
                    "Buffer override cannot exceed {}",
                    Money::MAX_AMOUNT
                )));
            }
        }

        let period_end = resolve_period_end(
            request.paycheck_date,
            request.next_paycheck_date,
            self.settings.default_period_days,
        )
        .ok_or_else(|| {
            PaydayError::Validation(format!(
                "Cannot add {} days to paycheck date {}",
                self.settings.default_period_days, request.paycheck_date
            ))
        })?;
        if period_end < request.paycheck_date {
            return Err(PaydayError::Validation(format!(
                "Period end {} is before paycheck date {}",
                period_end, request.paycheck_date
            )));
        }
        let window = PayWindow::new(request.paycheck_date, period_end);
        if window.num_days() > MAX_PERIOD_DAYS {
            return Err(PaydayError::Validation(format!(
                "Pay period of {} days is longer than {} days",
                window.num_days(),
                MAX_PERIOD_DAYS
            )));
        }

        let mut preferences = profile.preferences.resolve(
            self.settings.default_buffer_target,
            self.settings.default_min_cash_buffer,
        );
        if let Some(buffer) = request.override_buffer {
            preferences.buffer_target = buffer;
        }

        let starting_liquid_cash = liquid_cash(&profile.accounts);
        debug!(
            "planning {} over {} with {} bills, {} debts, starting cash {}",
            paycheck_amount,
            window,
            profile.bills.len(),
            profile.debts.len(),
            starting_liquid_cash
        );

        let plan = allocate(
            paycheck_amount,
            &profile.bills,
            &profile.debts,
            &window,
            &preferences,
            starting_liquid_cash,
        );

        let run = PlanRun::new(summarize(&plan.checks), plan);
        if request.record && self.settings.record_history {
            self.storage.plan_runs.record(run.clone())?;
        } else {
            info!("plan run {} not recorded", run.id);
        }

        Ok(run)
    }
}

/// Reject profiles the engine must not see
pub fn validate_profile(profile: &Profile) -> PaydayResult<()> {
    for bill in &profile.bills {
        bill.validate()
            .map_err(|e| PaydayError::Validation(format!("Bill '{}': {}", bill.name, e)))?;
    }
    for debt in &profile.debts {
        debt.validate()
            .map_err(|e| PaydayError::Validation(format!("Debt '{}': {}", debt.name, e)))?;
    }
    for account in &profile.accounts {
        if !account.balance.is_within_limit() {
            return Err(PaydayError::Validation(format!(
                "Account '{}': balance cannot exceed {}",
                account.name,
                Money::MAX_AMOUNT
            )));
        }
    }
    if let Some(schedule) = &profile.income_schedule {
        schedule
            .validate()
            .map_err(|e| PaydayError::Validation(format!("Income schedule: {}", e)))?;
    }
    profile
        .preferences
        .validate()
        .map_err(PaydayError::Validation)?;
    Ok(())
}
