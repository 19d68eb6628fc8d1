//! Employee roster commands

use super::{CliResult, Output};
use crate::config::AppConfig;
use assetreg_core::{Employee, EmployeeField, EmployeePatch, MutationOutcome, Table};
use assetreg_store::RosterStore;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Show every employee
    List,
    /// Append an employee and save the roster
    Add(AddArgs),
    /// Overwrite fields on every employee with this ID
    Edit(EditArgs),
    /// Remove every employee with this ID
    Delete(DeleteArgs),
    /// Case-insensitive search on one column
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub department: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Free-text list of assigned assets
    #[arg(long)]
    pub assigned_assets: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Free-text list of assigned assets; pass an empty string to clear
    #[arg(long)]
    pub assigned_assets: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, value_enum, default_value_t = SearchBy::Id)]
    pub by: SearchBy,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Id,
    Name,
    Department,
}

impl From<SearchBy> for EmployeeField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Id => EmployeeField::Id,
            SearchBy::Name => EmployeeField::Name,
            SearchBy::Department => EmployeeField::Department,
        }
    }
}

pub fn execute(args: EmployeeArgs, config: &AppConfig, output: Output) -> CliResult {
    let mut store = RosterStore::open(&config.roster)?;

    match args.command {
        EmployeeCommand::List => output.table(&store.to_table()),
        EmployeeCommand::Add(add) => execute_add(&mut store, add, output),
        EmployeeCommand::Edit(edit) => execute_edit(&mut store, edit, output),
        EmployeeCommand::Delete(delete) => execute_delete(&mut store, delete, output),
        EmployeeCommand::Search(search) => {
            let hits: Vec<Employee> = store
                .search(search.by.into(), &search.query)
                .into_iter()
                .cloned()
                .collect();
            output.table(&Table::from(hits.as_slice()))
        }
    }
}

fn execute_add(store: &mut RosterStore, args: AddArgs, output: Output) -> CliResult {
    let mut employee = Employee::new(args.id, args.name)
        .with_department(args.department)
        .with_phone(args.phone)
        .with_email(args.email);
    if let Some(assets) = args.assigned_assets {
        employee = employee.with_assigned_assets(assets);
    }

    let duplicate = store.roster().contains(&employee.id);
    let id = employee.id.clone();
    store.add(employee)?;

    if duplicate {
        eprintln!("Warning: Employee ID '{}' already existed; another row was added", id);
    }
    output.outcome(
        "added",
        &format!("Employee '{}' added.", id),
        &store.to_table(),
    )
}

fn execute_edit(store: &mut RosterStore, args: EditArgs, output: Output) -> CliResult {
    let patch = EmployeePatch {
        name: args.name,
        department: args.department,
        phone: args.phone,
        email: args.email,
        assigned_assets: args.assigned_assets,
    };
    if patch.is_empty() {
        return Err(
            "nothing to update: pass at least one of --name, --department, --phone, --email, --assigned-assets"
                .into(),
        );
    }

    match store.update(&args.id, &patch)? {
        MutationOutcome::Applied { affected } => output.outcome(
            "updated",
            &format!("Employee '{}' updated ({} row(s)).", args.id, affected),
            &store.to_table(),
        ),
        MutationOutcome::NotFound => not_found(&args.id, output),
    }
}

fn execute_delete(store: &mut RosterStore, args: DeleteArgs, output: Output) -> CliResult {
    match store.delete(&args.id)? {
        MutationOutcome::Applied { affected } => output.outcome(
            "deleted",
            &format!("Employee '{}' deleted ({} row(s)).", args.id, affected),
            &store.to_table(),
        ),
        MutationOutcome::NotFound => not_found(&args.id, output),
    }
}

fn not_found(id: &str, output: Output) -> CliResult {
    output.notice("not_found", &format!("Employee ID '{}' not found.", id))
}
