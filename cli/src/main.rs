mod logging;
mod preview;
mod tui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use weekplan_core::{apply, parse_assignments, Day, FormController};

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Weekly availability form with JSON export", long_about = None)]
struct Cli {
    /// Append logs to this file (RUST_LOG sets the level)
    #[arg(long, global = true, env = "WEEKPLAN_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Print the availability JSON (usage: export vr:"20:30 - 21:30" ma:18:00-19:00)
    Export {
        /// Days to check, optionally with a time range (day[:time])
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show every row as a table, then the JSON
    Preview {
        /// Days to check, optionally with a time range (day[:time])
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List the days of the week in form order
    Days,
}

fn fill_form(args: &[String]) -> Result<FormController> {
    let assignments = parse_assignments(args)?;
    debug!(count = assignments.len(), "applying assignments");
    let mut form = FormController::new();
    apply(&mut form, &assignments);
    Ok(form)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    logging::init(cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Some(Commands::Export { args }) => {
            let mut form = fill_form(&args)?;
            println!("{}", form.save()?);
        },
        Some(Commands::Preview { args }) => {
            let mut form = fill_form(&args)?;
            println!("{}", preview::render_rows(&form));
            println!("{}", form.save()?);
        },
        Some(Commands::Days) => {
            for day in Day::ALL {
                println!("{}", day);
            }
        },
        Some(Commands::Tui) | None => {
            if let Some(output) = tui::run()? {
                println!("{}", output);
            }
        }
    }
    Ok(())
}
