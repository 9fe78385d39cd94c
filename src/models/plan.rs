//! Plan result models
//!
//! The output of one allocation run: ordered bucket amounts, the adequacy
//! checks, per-bill funding and the shortfall report. `PlanRun` wraps a
//! result with the identity and timestamp it was recorded under.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::bill::Cadence;
use super::ids::{BillId, PlanRunId};
use super::money::Money;
use super::preferences::SurplusTarget;
use super::window::PayWindow;

/// Destination of a slice of the paycheck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Bills due inside the window
    Bills,
    /// Discretionary spending buffer
    Spending,
    /// Sum of debt minimum payments
    DebtMinimum,
    /// Surplus routed to investing
    Invest,
    /// Surplus routed to the emergency fund
    EmergencyFundTopUp,
    /// Whatever is left; goes to paying debt down faster
    ExtraDebt,
}

impl Bucket {
    /// The routed surplus bucket for a target, if it has one
    pub fn for_surplus(target: SurplusTarget) -> Option<Bucket> {
        match target {
            SurplusTarget::Invest => Some(Bucket::Invest),
            SurplusTarget::EmergencyFund => Some(Bucket::EmergencyFundTopUp),
            SurplusTarget::ExtraDebt => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bills => "Bills",
            Self::Spending => "Spending",
            Self::DebtMinimum => "DebtMinimum",
            Self::Invest => "Invest",
            Self::EmergencyFundTopUp => "EmergencyFundTopUp",
            Self::ExtraDebt => "ExtraDebt",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Amount committed to one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub bucket: Bucket,
    pub amount: Money,
}

impl Allocation {
    pub fn new(bucket: Bucket, amount: Money) -> Self {
        Self { bucket, amount }
    }
}

/// How much of one due bill the paycheck covered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillFunding {
    pub bill_id: BillId,
    pub bill_name: String,
    pub cadence: Cadence,
    pub amount_due: Money,
    pub amount_funded: Money,
    /// Funded to within one cent of the amount due
    pub fully_funded: bool,
}

impl BillFunding {
    pub fn shortfall(&self) -> Money {
        self.amount_due - self.amount_funded
    }
}

/// Named pass/fail checks over a plan, each with one cent of tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanChecks {
    pub allocations_sum_ok: bool,
    pub bills_covered_ok: bool,
    pub buffer_met_ok: bool,
    pub min_cash_buffer_met_ok: bool,
}

impl PlanChecks {
    pub fn all_ok(&self) -> bool {
        self.allocations_sum_ok
            && self.bills_covered_ok
            && self.buffer_met_ok
            && self.min_cash_buffer_met_ok
    }

    /// Checks as `(name, passed)` pairs in a fixed order
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("allocations_sum_ok", self.allocations_sum_ok),
            ("bills_covered_ok", self.bills_covered_ok),
            ("buffer_met_ok", self.buffer_met_ok),
            ("min_cash_buffer_met_ok", self.min_cash_buffer_met_ok),
        ]
    }
}

/// Complete output of one allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub window: PayWindow,
    pub paycheck_amount: Money,

    /// Buckets in waterfall order
    pub allocations: Vec<Allocation>,
    pub checks: PlanChecks,

    pub primary_surplus_target: SurplusTarget,
    pub starting_liquid_cash: Money,
    pub projected_end_cash: Money,
    pub safe_to_invest: Money,

    pub bills_due_total: Money,
    pub debt_min_total: Money,
    pub buffer_target: Money,
    pub min_cash_buffer: Money,

    /// Due bills in funding order
    pub bills_funded: Vec<BillFunding>,
    /// Shortfall descriptions, e.g. "Groceries short by $80.00"
    pub unfunded_items: Vec<String>,
}

impl PlanResult {
    /// Amount allocated to a bucket, if the bucket is present
    pub fn allocation(&self, bucket: Bucket) -> Option<Money> {
        self.allocations
            .iter()
            .find(|a| a.bucket == bucket)
            .map(|a| a.amount)
    }

    pub fn total_allocated(&self) -> Money {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    pub fn bills_funded_total(&self) -> Money {
        self.bills_funded.iter().map(|b| b.amount_funded).sum()
    }
}

/// A recorded plan run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRun {
    pub id: PlanRunId,
    pub created_at: DateTime<Utc>,
    pub summary: String,
    pub plan: PlanResult,
}

impl PlanRun {
    pub fn new(summary: impl Into<String>, plan: PlanResult) -> Self {
        Self {
            id: PlanRunId::new(),
            created_at: Utc::now(),
            summary: summary.into(),
            plan,
        }
    }

    pub fn paycheck_date(&self) -> NaiveDate {
        self.plan.window.start
    }

    pub fn paycheck_amount(&self) -> Money {
        self.plan.paycheck_amount
    }
}
