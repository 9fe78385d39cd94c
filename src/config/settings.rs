//! User settings for the payday planner
//!
//! Holds the planning defaults the orchestration layer applies before calling
//! the engine (buffer, cash floor, period length) plus display and logging
//! preferences.

use serde::{Deserialize, Serialize};

use super::paths::PaydayPaths;
use crate::error::PaydayError;
use crate::models::{Money, MAX_PERIOD_DAYS};

/// User settings for the payday planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Buffer used when the profile doesn't set one
    #[serde(default = "default_buffer_target")]
    pub default_buffer_target: Money,

    /// Cash floor used when the profile doesn't set one
    #[serde(default = "default_min_cash_buffer")]
    pub default_min_cash_buffer: Money,

    /// Pay period length when no next paycheck date is given
    #[serde(default = "default_period_days")]
    pub default_period_days: i64,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether generated plans are appended to the history file
    #[serde(default = "default_record_history")]
    pub record_history: bool,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_buffer_target() -> Money {
    Money::from_cents(60000)
}

fn default_min_cash_buffer() -> Money {
    Money::from_cents(200000)
}

fn default_period_days() -> i64 {
    14
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_record_history() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_buffer_target: default_buffer_target(),
            default_min_cash_buffer: default_min_cash_buffer(),
            default_period_days: default_period_days(),
            currency_symbol: default_currency(),
            record_history: default_record_history(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PaydayPaths) -> Result<Self, PaydayError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PaydayError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PaydayError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaydayPaths) -> Result<(), PaydayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaydayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaydayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), PaydayError> {
        if !(1..=MAX_PERIOD_DAYS).contains(&self.default_period_days) {
            return Err(PaydayError::Config(format!(
                "default_period_days must be between 1 and {}, got {}",
                MAX_PERIOD_DAYS, self.default_period_days
            )));
        }
        if self.default_buffer_target.is_negative() || self.default_min_cash_buffer.is_negative() {
            return Err(PaydayError::Config(
                "default buffer amounts cannot be negative".into(),
            ));
        }
        if !self.default_buffer_target.is_within_limit()
            || !self.default_min_cash_buffer.is_within_limit()
        {
            return Err(PaydayError::Config(format!(
                "default buffer amounts cannot exceed {}",
                Money::MAX_AMOUNT
            )));
        }
        Ok(())
    }
}
