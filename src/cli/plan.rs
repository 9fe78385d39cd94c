//! Plan CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_plan_run;
use crate::error::PaydayResult;
use crate::services::{PlanRequest, PlanService};
use crate::storage::Storage;

use super::{parse_date, parse_money};

/// Arguments for `plan`
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Net paycheck amount (defaults to the income schedule's typical amount)
    #[arg(short, long)]
    pub amount: Option<String>,
    /// Paycheck date, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Next paycheck date, YYYY-MM-DD; ends the pay period
    #[arg(short, long)]
    pub next_paycheck_date: Option<String>,
    /// Spending buffer for this plan only
    #[arg(short, long)]
    pub buffer: Option<String>,
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
    /// Don't record the plan in history
    #[arg(long)]
    pub dry_run: bool,
}

/// Handle the plan command
pub fn handle_plan_command(storage: &Storage, settings: &Settings, args: PlanArgs) -> PaydayResult<()> {
    let paycheck_date = match &args.date {
        Some(date) => parse_date("date", date)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut request = PlanRequest::new(paycheck_date);
    request.paycheck_amount = args
        .amount
        .as_deref()
        .map(|a| parse_money("amount", a))
        .transpose()?;
    request.next_paycheck_date = args
        .next_paycheck_date
        .as_deref()
        .map(|d| parse_date("next paycheck date", d))
        .transpose()?;
    request.override_buffer = args
        .buffer
        .as_deref()
        .map(|b| parse_money("buffer", b))
        .transpose()?;
    request.record = !args.dry_run;

    let run = PlanService::new(storage, settings).generate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print!("{}", format_plan_run(&run, &settings.currency_symbol));
    }

    Ok(())
}
