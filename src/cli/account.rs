//! Account CLI commands
//!
//! Accounts are balance snapshots; checking and savings count toward the
//! starting cash of a plan.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_account_list;
use crate::error::{PaydayError, PaydayResult};
use crate::models::{Account, AccountType};
use crate::services::ProfileService;
use crate::storage::Storage;

use super::parse_money;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add an account
    Add {
        /// Account name
        name: String,
        /// Current balance (e.g., "1200.00"; credit balances are stored as owed)
        balance: String,
        /// Account type (checking, savings, credit, cash, investment, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// ISO currency code
        #[arg(long)]
        currency: Option<String>,
    },
    /// List accounts
    List,
    /// Remove an account
    Remove {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, settings: &Settings, cmd: AccountCommands) -> PaydayResult<()> {
    let service = ProfileService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        AccountCommands::Add {
            name,
            balance,
            account_type,
            currency,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                PaydayError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, credit, cash, investment, other",
                    account_type
                ))
            })?;

            let mut balance = parse_money("balance", &balance)?;
            // Credit balances are money owed
            if account_type == AccountType::Credit && balance.is_positive() {
                balance = -balance;
            }

            let mut account = Account::new(name, account_type, balance);
            if let Some(currency) = currency {
                account.currency = currency.to_uppercase();
            }

            let account = service.add_account(account)?;
            println!("Added account: {}", account.name);
            println!("  Type:    {}", account.account_type);
            println!("  Balance: {}", account.balance.format_with_symbol(symbol));
            println!("  ID:      {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list_accounts()?;
            print!("{}", format_account_list(&accounts, symbol));
        }

        AccountCommands::Remove { account } => {
            let removed = service.remove_account(&account)?;
            println!("Removed account: {}", removed.name);
        }
    }

    Ok(())
}
