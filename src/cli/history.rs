//! Plan history CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_plan_run, format_run_list};
use crate::error::{PaydayError, PaydayResult};
use crate::export::export_full_json;
use crate::services::HistoryService;
use crate::storage::Storage;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recorded plans, newest first
    List {
        /// Number of plans to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one recorded plan
    Show {
        /// Plan run ID or ID prefix
        run: String,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export history (csv) or everything (json)
    Export {
        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a history command
pub fn handle_history_command(storage: &Storage, settings: &Settings, cmd: HistoryCommands) -> PaydayResult<()> {
    let service = HistoryService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        HistoryCommands::List { limit } => {
            let runs = service.list(limit)?;
            print!("{}", format_run_list(&runs, symbol));
        }

        HistoryCommands::Show { run, json } => {
            let run = service.show(&run)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&run)?);
            } else {
                println!("Created: {}", run.created_at.format("%Y-%m-%d %H:%M UTC"));
                print!("{}", format_plan_run(&run, symbol));
            }
        }

        HistoryCommands::Export { format, output } => {
            let format = format.to_lowercase();
            if format != "csv" && format != "json" {
                return Err(PaydayError::Validation(format!(
                    "Unknown export format: '{}'. Use csv or json",
                    format
                )));
            }

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };

            if format == "csv" {
                let count = service.export_csv(&mut writer)?;
                if let Some(path) = &output {
                    eprintln!("Exported {} plan runs to {}", count, path.display());
                }
            } else {
                export_full_json(storage, &mut writer)?;
                if let Some(path) = &output {
                    eprintln!("Exported profile and history to {}", path.display());
                }
            }
            writer.flush()?;
        }
    }

    Ok(())
}
