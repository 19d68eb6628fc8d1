//! Asset report commands

use super::{CliResult, Output};
use crate::config::AppConfig;
use assetreg_core::{AssetColumn, AssetFeed, ChartSeries, Grouping, ReportEngine, Table};
use assetreg_store::{load_feed, FeedSource, RosterStore};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Every asset in the feed
    List,
    /// Free-text asset search
    Search(SearchArgs),
    /// Assets in one condition (case-insensitive)
    Condition(ConditionArgs),
    /// Asset counts per category
    Count(CountArgs),
    /// Assets linked to an employee by ID or officer name
    Assigned(AssignedArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    /// Column to search; repeat for several (default: officer, description,
    /// and Employee ID when the feed has it)
    #[arg(long = "field")]
    pub fields: Vec<AssetColumn>,
}

#[derive(Debug, Args)]
pub struct ConditionArgs {
    pub value: String,
}

#[derive(Debug, Args)]
pub struct CountArgs {
    #[arg(long, value_enum)]
    pub by: CountBy,
    /// Merge categories that differ only in case or surrounding spaces
    #[arg(long)]
    pub normalize: bool,
    /// Also draw a bar chart
    #[arg(long)]
    pub chart: bool,
}

#[derive(Debug, Args)]
pub struct AssignedArgs {
    pub employee_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountBy {
    Condition,
    Funding,
}

impl From<CountBy> for AssetColumn {
    fn from(by: CountBy) -> Self {
        match by {
            CountBy::Condition => AssetColumn::Condition,
            CountBy::Funding => AssetColumn::FundingSource,
        }
    }
}

#[derive(Serialize)]
struct CountReport<'a> {
    table: &'a Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<&'a ChartSeries>,
}

#[derive(Serialize)]
struct AssignedReport<'a> {
    employee_id: &'a str,
    name: &'a str,
    table: &'a Table,
}

pub fn execute(args: ReportArgs, config: &AppConfig, output: Output) -> CliResult {
    let engine = ReportEngine::new(session_feed(config));

    match args.command {
        ReportCommand::List => output.table(&engine.all()?),
        ReportCommand::Search(search) => {
            output.table(&engine.search(&search.query, &search.fields)?)
        }
        ReportCommand::Condition(condition) => {
            output.table(&engine.filter_by_condition(&condition.value)?)
        }
        ReportCommand::Count(count) => execute_count(&engine, count, config, output),
        ReportCommand::Assigned(assigned) => execute_assigned(&engine, assigned, config, output),
    }
}

fn session_feed(config: &AppConfig) -> AssetFeed {
    match &config.assets {
        Some(location) => load_feed(&FeedSource::parse(location), config.feed_timeout()),
        None => AssetFeed::unavailable("no asset feed configured (set --assets or ASSETREG_ASSETS)"),
    }
}

fn execute_count(
    engine: &ReportEngine,
    args: CountArgs,
    config: &AppConfig,
    output: Output,
) -> CliResult {
    let grouping = if args.normalize {
        Grouping::Normalized
    } else {
        Grouping::Exact
    };
    let counts = engine.aggregate_by(args.by.into(), grouping)?;
    let table = counts.to_table();
    let series = counts.chart_series();

    if output.json {
        return output.value(&CountReport {
            table: &table,
            chart: args.chart.then_some(&series),
        });
    }

    output.table(&table)?;
    if args.chart && !series.is_empty() {
        println!();
        print!("{}", series.render_bars(config.chart_width));
    }
    Ok(())
}

fn execute_assigned(
    engine: &ReportEngine,
    args: AssignedArgs,
    config: &AppConfig,
    output: Output,
) -> CliResult {
    // reject an unavailable feed before touching the roster file
    engine.feed().table()?;

    let store = RosterStore::open(&config.roster)?;
    let employees = store.roster().find(&args.employee_id);
    if employees.is_empty() {
        return output.notice(
            "not_found",
            &format!("Employee ID '{}' not found.", args.employee_id),
        );
    }

    let mut reports = Vec::new();
    for employee in employees {
        reports.push((employee, engine.assets_for_employee(employee)?));
    }

    if output.json {
        let body: Vec<AssignedReport<'_>> = reports
            .iter()
            .map(|(employee, table)| AssignedReport {
                employee_id: &employee.id,
                name: &employee.name,
                table,
            })
            .collect();
        return output.value(&body);
    }

    for (employee, table) in &reports {
        println!("{} ({})", employee.name, employee.id);
        output.table(table)?;
    }
    Ok(())
}
