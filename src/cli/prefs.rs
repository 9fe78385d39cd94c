//! Preference CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_preferences;
use crate::error::{PaydayError, PaydayResult};
use crate::models::SurplusTarget;
use crate::services::ProfileService;
use crate::storage::Storage;

use super::parse_money;

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show stored and effective preferences
    Show,
    /// Update preferences; omitted options are left unchanged
    Set {
        /// Spending buffer held back from each paycheck
        #[arg(short, long)]
        buffer: Option<String>,
        /// Cash floor that must remain after the pay period
        #[arg(short, long)]
        min_cash: Option<String>,
        /// Where surplus goes (invest, emergency_fund, extra_debt)
        #[arg(short, long)]
        surplus: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Handle a prefs command
pub fn handle_prefs_command(storage: &Storage, settings: &Settings, cmd: PrefsCommands) -> PaydayResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        PrefsCommands::Show => {}

        PrefsCommands::Set {
            buffer,
            min_cash,
            surplus,
            notes,
        } => {
            let mut preferences = service.preferences()?;
            if let Some(buffer) = buffer {
                preferences.buffer_target = Some(parse_money("buffer", &buffer)?);
            }
            if let Some(min_cash) = min_cash {
                preferences.min_cash_buffer = Some(parse_money("minimum cash buffer", &min_cash)?);
            }
            if let Some(surplus) = surplus {
                let target = SurplusTarget::parse(&surplus);
                if target.as_str() != surplus.trim().to_lowercase() {
                    return Err(PaydayError::Validation(format!(
                        "Invalid surplus target: '{}'. Valid targets: invest, emergency_fund, extra_debt",
                        surplus
                    )));
                }
                preferences.primary_surplus_target = target;
            }
            if let Some(notes) = notes {
                preferences.notes = Some(notes);
            }
            service.update_preferences(preferences)?;
            println!("Preferences updated.");
            println!();
        }
    }

    let stored = service.preferences()?;
    let effective = stored.resolve(
        settings.default_buffer_target,
        settings.default_min_cash_buffer,
    );
    print!(
        "{}",
        format_preferences(&stored, &effective, &settings.currency_symbol)
    );

    Ok(())
}
