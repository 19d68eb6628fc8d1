use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RegistryError;

/// Header of the roster file, in column order
pub const EMPLOYEE_COLUMNS: [&str; 6] = [
    "Employee ID",
    "Name",
    "Department",
    "Phone",
    "Email",
    "Assigned Assets",
];

/// One row of the employee roster
///
/// The identifier is kept as text end to end, so values such as `"007"`
/// never turn into numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Employee ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Department")]
    pub department: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Email")]
    pub email: String,

    /// Free-text list of assets held by the employee
    #[serde(rename = "Assigned Assets", default)]
    pub assigned_assets: Option<String>,
}

impl Employee {
    /// Create an employee with an identifier and name; other fields empty
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_assigned_assets(mut self, assets: impl Into<String>) -> Self {
        self.assigned_assets = non_empty(assets.into());
        self
    }

    /// Value of one column as text (`Assigned Assets` absent → empty)
    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Id => &self.id,
            EmployeeField::Name => &self.name,
            EmployeeField::Department => &self.department,
            EmployeeField::Phone => &self.phone,
            EmployeeField::Email => &self.email,
            EmployeeField::AssignedAssets => self.assigned_assets.as_deref().unwrap_or(""),
        }
    }

    /// Cells in `EMPLOYEE_COLUMNS` order
    pub fn to_row(&self) -> Vec<String> {
        EmployeeField::ALL
            .iter()
            .map(|f| self.field(*f).to_string())
            .collect()
    }

    /// Set one column from text; empty `Assigned Assets` clears it
    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::Id => self.id = value,
            EmployeeField::Name => self.name = value,
            EmployeeField::Department => self.department = value,
            EmployeeField::Phone => self.phone = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::AssignedAssets => self.assigned_assets = non_empty(value),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A roster column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    Id,
    Name,
    Department,
    Phone,
    Email,
    AssignedAssets,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 6] = [
        EmployeeField::Id,
        EmployeeField::Name,
        EmployeeField::Department,
        EmployeeField::Phone,
        EmployeeField::Email,
        EmployeeField::AssignedAssets,
    ];

    /// Column header as written to the roster file
    pub fn header(&self) -> &'static str {
        match self {
            EmployeeField::Id => EMPLOYEE_COLUMNS[0],
            EmployeeField::Name => EMPLOYEE_COLUMNS[1],
            EmployeeField::Department => EMPLOYEE_COLUMNS[2],
            EmployeeField::Phone => EMPLOYEE_COLUMNS[3],
            EmployeeField::Email => EMPLOYEE_COLUMNS[4],
            EmployeeField::AssignedAssets => EMPLOYEE_COLUMNS[5],
        }
    }

    /// Match a file header (surrounding whitespace ignored)
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|f| f.header() == header)
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for EmployeeField {
    type Err = RegistryError;

    /// Accepts short names (`id`, `name`, `department`, ...) or full headers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match key.as_str() {
            "id" | "employeeid" => Ok(EmployeeField::Id),
            "name" => Ok(EmployeeField::Name),
            "department" | "dept" => Ok(EmployeeField::Department),
            "phone" => Ok(EmployeeField::Phone),
            "email" => Ok(EmployeeField::Email),
            "assets" | "assignedassets" => Ok(EmployeeField::AssignedAssets),
            _ => Err(RegistryError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// Fields to overwrite on Edit; `None` leaves the column untouched
///
/// The identifier itself is not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// `Some("")` clears the assigned assets
    pub assigned_assets: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.assigned_assets.is_none()
    }

    /// Overwrite the specified fields on `employee`
    pub fn apply_to(&self, employee: &mut Employee) {
        let updates = [
            (EmployeeField::Name, &self.name),
            (EmployeeField::Department, &self.department),
            (EmployeeField::Phone, &self.phone),
            (EmployeeField::Email, &self.email),
            (EmployeeField::AssignedAssets, &self.assigned_assets),
        ];
        for (field, value) in updates {
            if let Some(v) = value {
                employee.set_field(field, v.clone());
            }
        }
    }

    /// Names of the columns this patch touches
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(EmployeeField::Name.header());
        }
        if self.department.is_some() {
            fields.push(EmployeeField::Department.header());
        }
        if self.phone.is_some() {
            fields.push(EmployeeField::Phone.header());
        }
        if self.email.is_some() {
            fields.push(EmployeeField::Email.header());
        }
        if self.assigned_assets.is_some() {
            fields.push(EmployeeField::AssignedAssets.header());
        }
        fields
    }
}
