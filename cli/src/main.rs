//! CLI entry point for the listing profitability calculator.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use margincalc_cli::commands;
use margincalc_cli::config::{self, Scenario};
use margincalc_cli::error::Error;
use margincalc_cli::repl;

#[derive(Parser)]
#[command(name = "margincalc")]
#[command(about = "Marketplace listing profitability: price, fees, volumetric logistics, margin")]
#[command(version)]
struct Cli {
    /// Path to a scenario.toml (defaults are used when omitted)
    #[arg(long, global = true)]
    scenario: Option<PathBuf>,

    /// Override a field, e.g. --set price=12000 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full profitability breakdown
    Compute {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the calculation as a semicolon-delimited CSV
    Export {
        /// Output file (defaults to the scenario's export.file)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// List editable fields with units and current values
    Fields,

    /// Edit fields interactively
    Interactive,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => match Scenario::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading scenario: {e}");
                process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    let mut session = scenario.session();
    if let Err(e) = config::apply_overrides(&mut session, &cli.overrides) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let mut stdout = io::stdout();
    let result = match cli.command {
        Command::Compute { json } => commands::compute(&session, json, &mut stdout),
        Command::Export { output, force } => {
            let path = output.unwrap_or_else(|| scenario.export.file.clone());
            commands::export(&session, &path, force)
        }
        Command::Fields => commands::list_fields(&session, &mut stdout),
        Command::Interactive => repl::run(
            &mut session,
            io::stdin().lock(),
            &mut stdout,
            &scenario.export.file,
        ),
    };

    if let Err(e) = result {
        match &e {
            Error::Aborted(msg) => {
                eprintln!("{msg}");
                process::exit(0);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
