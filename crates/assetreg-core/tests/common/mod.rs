use assetreg_core::{Asset, AssetColumn, AssetTable, Employee, Roster};

/// Roster with three rows, two sharing identifier `E1`
#[allow(dead_code)]
pub fn sample_roster() -> Roster {
    Roster::from_employees(vec![
        Employee::new("E1", "Jane Doe")
            .with_department("Finance")
            .with_email("jane@example.org"),
        Employee::new("007", "James Bond").with_department("Field Ops"),
        Employee::new("E1", "Jane Doe (contractor)").with_department("Audit"),
    ])
}

/// Asset feed with every canonical column
#[allow(dead_code)]
pub fn sample_assets() -> AssetTable {
    let row = |desc: &str, loc: &str, officer: &str, cond: &str, fund: &str, id: &str| {
        Asset::default()
            .with(AssetColumn::Description, desc)
            .with(AssetColumn::Location, loc)
            .with(AssetColumn::ResponsibleOfficer, officer)
            .with(AssetColumn::Condition, cond)
            .with(AssetColumn::FundingSource, fund)
            .with(AssetColumn::EmployeeId, id)
    };

    AssetTable::new(
        AssetColumn::ALL,
        vec![
            row("Dell Latitude", "HQ 2nd floor", "Jane Doe", "Good", "Grant A", "E1"),
            row("Office chair", "HQ 2nd floor", "Jane Doe", "Poor", "Core budget", ""),
            row("Toyota Hilux", "Depot", "James Bond", "Good", "Grant A", "007"),
            row("Projector", "Boardroom", "Facilities", "poor", "Donation", ""),
        ],
    )
}

/// Asset feed containing only a condition column
#[allow(dead_code)]
pub fn condition_feed(values: &[&str]) -> AssetTable {
    AssetTable::new(
        [AssetColumn::Condition],
        values
            .iter()
            .map(|v| Asset::default().with(AssetColumn::Condition, v))
            .collect(),
    )
}
