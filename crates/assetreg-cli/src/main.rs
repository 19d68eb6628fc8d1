//! Asset Register CLI
//!
//! Command-line interface for the employee roster and asset reports

use assetreg_core::{logging_facility, ExError, RegistryError};
use assetreg_core_types::{RequestContext, RequestId};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

mod commands;
mod config;

use commands::Output;
use config::{AppConfig, Overrides};

#[derive(Debug, Parser)]
#[command(name = "assetreg")]
#[command(about = "Asset Register - employee roster and asset reports", long_about = None)]
struct Cli {
    /// TOML config file (default: ./assetreg.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster file (.csv, or .xlsx/.xlsm)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Asset feed URL or CSV path
    #[arg(long, global = true)]
    assets: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Logging profile: dev or prod
    #[arg(long, global = true)]
    log_profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Employee roster operations
    Employee(commands::employee::EmployeeArgs),
    /// Asset report operations
    Report(commands::report::ReportArgs),
}

impl Commands {
    fn action(&self) -> &'static str {
        match self {
            Commands::Employee(_) => "employee",
            Commands::Report(_) => "report",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let overrides = Overrides {
        config: cli.config,
        roster: cli.roster,
        assets: cli.assets,
        log_profile: cli.log_profile,
    };
    let config = AppConfig::resolve(&overrides)?;
    logging_facility::init_with_filter(config.profile()?, Some(&config.log_filter));

    let ctx = RequestContext::new().with_action(cli.command.action());
    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        action = ctx.action.as_deref().unwrap_or_default()
    );
    let _guard = span.enter();
    tracing::debug!(roster = %config.roster.display(), assets = ?config.assets, "config resolved");

    let output = Output { json: cli.json };
    let result = match cli.command {
        Commands::Employee(args) => commands::employee::execute(args, &config, output),
        Commands::Report(args) => commands::report::execute(args, &config, output),
    };
    result.map_err(|e| attach_request_id(e, &ctx.request_id))
}

/// Tag domain and store errors with the invocation's request id so the
/// printed error can be matched to its log lines
fn attach_request_id(err: Box<dyn Error>, request_id: &RequestId) -> Box<dyn Error> {
    let err = match err.downcast::<RegistryError>() {
        Ok(domain) => {
            return Box::new(ExError::from(*domain).with_request_id(request_id.clone()));
        }
        Err(other) => other,
    };
    match err.downcast::<ExError>() {
        Ok(ex) => Box::new((*ex).with_request_id(request_id.clone())),
        Err(other) => other,
    }
}
