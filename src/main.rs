use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use payday_planner::cli::{
    handle_account_command, handle_bill_command, handle_debt_command, handle_history_command,
    handle_plan_command, handle_prefs_command,
};
use payday_planner::config::{paths::PaydayPaths, settings::Settings};
use payday_planner::logging::init_logging;
use payday_planner::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "payday",
    version,
    about = "Split each paycheck across bills, buffer, debt and savings",
    long_about = "Payday Planner allocates a paycheck in priority order: bills due \
                  before the next payday, a spending buffer, debt minimums, then a \
                  surplus target. Every plan is checked and any shortfall is named."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and an empty or demo profile
    Init {
        /// Seed a sample household
        #[arg(long)]
        demo: bool,
        /// Replace an existing profile
        #[arg(long)]
        force: bool,
    },

    /// Allocate a paycheck
    Plan(payday_planner::cli::PlanArgs),

    /// Recurring bill commands
    #[command(subcommand)]
    Bill(payday_planner::cli::BillCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(payday_planner::cli::DebtCommands),

    /// Account commands
    #[command(subcommand)]
    Account(payday_planner::cli::AccountCommands),

    /// Planning preferences
    #[command(subcommand)]
    Prefs(payday_planner::cli::PrefsCommands),

    /// Recorded plan history
    #[command(subcommand)]
    History(payday_planner::cli::HistoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PaydayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _logger = init_logging(&settings.log_level, cli.verbose)?;
    debug!("data directory: {}", paths.base_dir().display());

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { demo, force }) => {
            println!("Initializing Payday Planner at: {}", paths.base_dir().display());
            let written = initialize_storage(&paths, demo, force)?;
            settings.save(&paths)?;
            if !written {
                println!("Profile already exists; nothing changed.");
            } else if demo {
                println!("Demo profile created:");
                println!("  - Accounts: Main Checking, Emergency Savings, Rewards Card");
                println!("  - Bills: Rent, Internet, Phone, Groceries");
                println!("  - Debts: Student Loan, Credit Card");
                println!("  - Income: biweekly paycheck");
                println!();
                println!("Run 'payday plan --date 2026-01-05' to try it.");
            } else {
                println!("Empty profile created.");
                println!();
                println!("Run 'payday bill add' and 'payday debt add' to get started.");
            }
        }
        Some(Commands::Plan(args)) => {
            handle_plan_command(&storage, &settings, args)?;
        }
        Some(Commands::Bill(cmd)) => {
            handle_bill_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Debt(cmd)) => {
            handle_debt_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Prefs(cmd)) => {
            handle_prefs_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History(cmd)) => {
            handle_history_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Payday Planner Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Profile file:    {}", paths.profile_file().display());
            println!("History file:    {}", paths.plan_runs_file().display());
            println!();
            println!("Settings:");
            println!("  Default buffer target:    {}", settings.default_buffer_target);
            println!("  Default min cash buffer:  {}", settings.default_min_cash_buffer);
            println!("  Default period days:      {}", settings.default_period_days);
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Record history:           {}", settings.record_history);
            println!("  Log level:                {}", settings.log_level);
            println!("  Profile initialized:      {}", storage.is_initialized());
        }
        None => {
            println!("Payday Planner - allocate each paycheck");
            println!();
            println!("Run 'payday --help' for usage information.");
            println!("Run 'payday init --demo' to start with sample data.");
        }
    }

    Ok(())
}
