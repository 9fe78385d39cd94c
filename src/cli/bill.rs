//! Bill CLI commands
//!
//! Implements CLI commands for recurring bill management.

use clap::Subcommand;
use log::warn;

use crate::config::settings::Settings;
use crate::display::format_bill_list;
use crate::error::{PaydayError, PaydayResult};
use crate::models::{parse_weekday, Bill, Cadence};
use crate::services::ProfileService;
use crate::storage::Storage;

use super::parse_money;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a recurring bill
    Add {
        /// Bill name
        name: String,
        /// Amount per occurrence (e.g., "85.00")
        amount: String,
        /// Cadence (weekly, biweekly, monthly)
        #[arg(short, long, default_value = "monthly")]
        cadence: String,
        /// Day of month the bill is due (monthly bills)
        #[arg(long)]
        due_day: Option<u8>,
        /// Weekday a weekly bill recurs on (e.g., "saturday")
        #[arg(short, long)]
        weekday: Option<String>,
        /// Paid automatically
        #[arg(long)]
        autopay: bool,
    },
    /// List bills in funding order
    List,
    /// Remove a bill
    Remove {
        /// Bill name or ID
        bill: String,
    },
}

/// Reject schedule flags that would leave a bill never due or silently dropped
fn check_schedule(cadence: &Cadence, due_day: Option<u8>, weekday: Option<&str>) -> PaydayResult<()> {
    if *cadence == Cadence::Monthly && due_day.is_none() {
        return Err(PaydayError::Validation(
            "Monthly bills need --due-day (1-31)".into(),
        ));
    }
    if weekday.is_some() && *cadence != Cadence::Weekly {
        return Err(PaydayError::Validation(format!(
            "--weekday only applies to weekly bills, not {}",
            cadence
        )));
    }
    if due_day.is_some() && *cadence != Cadence::Monthly {
        warn!("--due-day is ignored for {} bills", cadence);
    }
    Ok(())
}

/// Handle a bill command
pub fn handle_bill_command(storage: &Storage, settings: &Settings, cmd: BillCommands) -> PaydayResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            cadence,
            due_day,
            weekday,
            autopay,
        } => {
            let cadence = Cadence::parse(&cadence);
            if !cadence.is_recognized() {
                return Err(PaydayError::Validation(format!(
                    "Invalid cadence: '{}'. Valid cadences: weekly, biweekly, monthly",
                    cadence
                )));
            }
            check_schedule(&cadence, due_day, weekday.as_deref())?;
            let weekday_anchor = weekday
                .as_deref()
                .map(|w| {
                    parse_weekday(w).ok_or_else(|| {
                        PaydayError::Validation(format!(
                            "Invalid weekday: '{}'. Use a day name like 'saturday'",
                            w
                        ))
                    })
                })
                .transpose()?;

            let mut bill = Bill::new(name, parse_money("amount", &amount)?, cadence)
                .with_autopay(autopay);
            bill.due_day = due_day;
            bill.weekday_anchor = weekday_anchor;

            let bill = service.add_bill(bill)?;
            println!("Added bill: {}", bill.name);
            println!("  Amount:   {}", bill.amount.format_with_symbol(&settings.currency_symbol));
            println!("  Schedule: {}", bill.schedule_description());
            println!("  ID:       {}", bill.id);
        }

        BillCommands::List => {
            let bills = service.list_bills()?;
            print!("{}", format_bill_list(&bills, &settings.currency_symbol));
        }

        BillCommands::Remove { bill } => {
            let removed = service.remove_bill(&bill)?;
            println!("Removed bill: {}", removed.name);
        }
    }

    Ok(())
}
