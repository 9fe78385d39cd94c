//! Debt CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_debt_list;
use crate::error::PaydayResult;
use crate::models::Debt;
use crate::services::ProfileService;
use crate::storage::Storage;

use super::parse_money;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        /// Debt name
        name: String,
        /// Outstanding balance
        balance: String,
        /// Minimum payment per paycheck
        #[arg(short, long)]
        min_payment: String,
        /// Annual percentage rate (e.g., 21.99)
        #[arg(long, default_value_t = 0.0)]
        apr: f64,
    },
    /// List debts
    List,
    /// Remove a debt
    Remove {
        /// Debt name or ID
        debt: String,
    },
}

/// Handle a debt command
pub fn handle_debt_command(storage: &Storage, settings: &Settings, cmd: DebtCommands) -> PaydayResult<()> {
    let service = ProfileService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        DebtCommands::Add {
            name,
            balance,
            min_payment,
            apr,
        } => {
            let debt = Debt::new(
                name,
                parse_money("balance", &balance)?,
                apr,
                parse_money("minimum payment", &min_payment)?,
            );
            let debt = service.add_debt(debt)?;
            println!("Added debt: {}", debt.name);
            println!("  Balance: {}", debt.balance.format_with_symbol(symbol));
            println!("  APR:     {:.2}%", debt.apr);
            println!("  Minimum: {}", debt.min_payment.format_with_symbol(symbol));
            println!("  ID:      {}", debt.id);
        }

        DebtCommands::List => {
            let debts = service.list_debts()?;
            print!("{}", format_debt_list(&debts, symbol));
        }

        DebtCommands::Remove { debt } => {
            let removed = service.remove_debt(&debt)?;
            println!("Removed debt: {}", removed.name);
        }
    }

    Ok(())
}
