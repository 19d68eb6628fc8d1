use crate::errors::{RegistryError, Result};
use crate::model::{Employee, EmployeeField, EmployeePatch};
use crate::table::Table;

/// Result of an Edit or Delete keyed by employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// `affected` rows matched the identifier and were changed
    Applied { affected: usize },
    /// No row carries the identifier; the roster is unchanged
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    pub fn affected(&self) -> usize {
        match self {
            MutationOutcome::Applied { affected } => *affected,
            MutationOutcome::NotFound => 0,
        }
    }
}

/// In-memory employee roster
///
/// Rows keep insertion order. Identifiers are not required to be unique:
/// Edit and Delete act on every row whose identifier equals the key.
/// Not thread-safe; one roster belongs to one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// All rows in storage order
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Every row whose identifier equals `id`
    pub fn find(&self, id: &str) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.id == id).collect()
    }

    /// Append a row
    ///
    /// Duplicate identifiers are accepted.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeIdMissing` if the identifier is empty or whitespace-only.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if employee.id.trim().is_empty() {
            return Err(RegistryError::EmployeeIdMissing);
        }
        tracing::debug!(employee_id = %employee.id, "roster append");
        self.employees.push(employee);
        Ok(())
    }

    /// Overwrite the patched fields on every row matching `id`
    pub fn update(&mut self, id: &str, patch: &EmployeePatch) -> MutationOutcome {
        let mut affected = 0;
        for employee in self.employees.iter_mut().filter(|e| e.id == id) {
            patch.apply_to(employee);
            affected += 1;
        }
        tracing::debug!(employee_id = %id, affected, "roster update");

        if affected == 0 {
            MutationOutcome::NotFound
        } else {
            MutationOutcome::Applied { affected }
        }
    }

    /// Remove every row matching `id`
    pub fn delete(&mut self, id: &str) -> MutationOutcome {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let affected = before - self.employees.len();
        tracing::debug!(employee_id = %id, affected, "roster delete");

        if affected == 0 {
            MutationOutcome::NotFound
        } else {
            MutationOutcome::Applied { affected }
        }
    }

    /// Case-insensitive substring search on one column
    ///
    /// A blank query matches nothing.
    pub fn search(&self, field: EmployeeField, query: &str) -> Vec<&Employee> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.employees
            .iter()
            .filter(|e| e.field(field).to_lowercase().contains(&needle))
            .collect()
    }

    /// The roster as a result table
    pub fn to_table(&self) -> Table {
        Table::from(self.employees.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_employees(vec![
            Employee::new("E1", "Jane Doe").with_department("Finance"),
            Employee::new("E2", "John Roe").with_department("Facilities"),
            Employee::new("E1", "Jane Duplicate").with_department("Audit"),
        ])
    }

    #[test]
    fn test_new_roster_is_empty() {
        let r = Roster::new();
        assert!(r.is_empty());
        assert_eq!(r.list().len(), 0);
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let mut r = Roster::new();
        let result = r.add(Employee::new("  ", "Nobody"));
        assert_eq!(result, Err(RegistryError::EmployeeIdMissing));
        assert!(r.is_empty());
    }

    #[test]
    fn test_add_accepts_duplicate_id() {
        let mut r = roster();
        r.add(Employee::new("E2", "Second John")).unwrap();
        assert_eq!(r.find("E2").len(), 2);
    }

    #[test]
    fn test_update_touches_all_matches() {
        let mut r = roster();
        let patch = EmployeePatch {
            phone: Some("555-0100".to_string()),
            ..EmployeePatch::default()
        };

        let outcome = r.update("E1", &patch);

        assert_eq!(outcome, MutationOutcome::Applied { affected: 2 });
        assert!(r.find("E1").iter().all(|e| e.phone == "555-0100"));
        assert_eq!(r.find("E2")[0].phone, "");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut r = roster();
        let before = r.clone();
        let outcome = r.update(
            "E9",
            &EmployeePatch {
                name: Some("Ghost".to_string()),
                ..EmployeePatch::default()
            },
        );
        assert_eq!(outcome, MutationOutcome::NotFound);
        assert_eq!(r, before);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut r = roster();
        let outcome = r.delete("E1");
        assert_eq!(outcome.affected(), 2);
        assert_eq!(r.len(), 1);
        assert!(!r.contains("E1"));
    }

    #[test]
    fn test_identifier_match_is_exact() {
        let mut r = roster();
        assert_eq!(r.delete("e1"), MutationOutcome::NotFound);
        assert_eq!(r.delete("E1 "), MutationOutcome::NotFound);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let r = roster();
        let hits = r.search(EmployeeField::Department, "FAC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "E2");

        assert_eq!(r.search(EmployeeField::Name, "jane").len(), 2);
        assert!(r.search(EmployeeField::Name, "   ").is_empty());
    }
}
