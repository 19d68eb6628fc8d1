//! Employee roster persisted to a single file.
//!
//! ## Durability
//!
//! Every successful mutation rewrites the whole file (header plus all rows)
//! through [`atomic_write`]. A mutation that fails to persist leaves both the
//! file and the in-memory roster as they were. Lookups that match nothing
//! ("not found") write nothing.
//!
//! ## Logging Ownership
//!
//! The store owns lifecycle logging for roster operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Backends and the in-memory roster use only `tracing::debug!()`.

#![allow(clippy::result_large_err)]

use crate::atomic::atomic_write;
use crate::backend::{backend_for_path, RosterBackend};
use crate::errors::{from_registry, io_error_at, Result};
use assetreg_core::model::{Employee, EmployeeField, EmployeePatch};
use assetreg_core::ops::{MutationOutcome, Roster};
use assetreg_core::table::Table;
use assetreg_core::{log_op_end, log_op_error, log_op_start};
use assetreg_core_types::Sensitive;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The roster file plus its in-memory table
pub struct RosterStore {
    path: PathBuf,
    backend: Box<dyn RosterBackend>,
    roster: Roster,
}

impl std::fmt::Debug for RosterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterStore")
            .field("path", &self.path)
            .field("backend", &self.backend.name())
            .field("rows", &self.roster.len())
            .finish()
    }
}

impl RosterStore {
    /// Open the roster at `path`, choosing the format from its extension
    ///
    /// A missing file is created immediately with the canonical header and
    /// no rows. An existing but unreadable file is an error and is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `Io`: the file exists but cannot be read, or the new file cannot be
    ///   written
    /// - `Persistence`: the file is not valid for its format
    /// - `MissingColumns`: the file has rows but no `Employee ID` column
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let backend = backend_for_path(&path);
        Self::open_with_backend(path, backend)
    }

    /// Open the roster at `path` with an explicit backend
    ///
    /// # Errors
    ///
    /// Same as [`RosterStore::open`].
    pub fn open_with_backend(
        path: impl Into<PathBuf>,
        backend: Box<dyn RosterBackend>,
    ) -> Result<Self> {
        let path = path.into();
        log_op_start!(
            "roster_open",
            path = %path.display(),
            backend = backend.name()
        );
        let start = std::time::Instant::now();

        let result = Self::open_impl(path, backend).map_err(|e| {
            log_op_error!(
                "roster_open",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "roster_open",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = result.roster.len()
        );

        Ok(result)
    }

    fn open_impl(path: PathBuf, backend: Box<dyn RosterBackend>) -> Result<Self> {
        match fs::read(&path) {
            Ok(bytes) => {
                let employees = backend
                    .decode(&bytes)
                    .map_err(|e| e.with_entity_id(path.display().to_string()))?;
                tracing::debug!(path = %path.display(), rows = employees.len(), "roster loaded");
                Ok(Self {
                    path,
                    backend,
                    roster: Roster::from_employees(employees),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let store = Self {
                    path,
                    backend,
                    roster: Roster::new(),
                };
                store.persist(&store.roster)?;
                tracing::info!(path = %store.path.display(), "created empty roster");
                Ok(store)
            }
            Err(e) => Err(io_error_at("roster_read", &path, e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// All employees in storage order
    pub fn list(&self) -> &[Employee] {
        self.roster.list()
    }

    /// The roster as a result table
    pub fn to_table(&self) -> Table {
        self.roster.to_table()
    }

    /// Case-insensitive substring search over one column
    pub fn search(&self, field: EmployeeField, query: &str) -> Vec<&Employee> {
        self.roster.search(field, query)
    }

    /// Append `employee` and rewrite the file
    ///
    /// Identifiers are not required to be unique.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: blank employee identifier (nothing is written)
    /// - `Io` / `Persistence`: the file could not be rewritten
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        let employee_id = employee.id.clone();
        log_op_start!(
            "roster_add",
            employee_id = %employee_id,
            email = %Sensitive::new(employee.email.clone()),
            phone = %Sensitive::new(employee.phone.clone())
        );
        let start = std::time::Instant::now();

        self.add_impl(employee).map_err(|e| {
            log_op_error!(
                "roster_add",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                employee_id = %employee_id
            );
            e
        })?;

        log_op_end!(
            "roster_add",
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = %employee_id,
            row_count = self.roster.len()
        );

        Ok(())
    }

    fn add_impl(&mut self, employee: Employee) -> Result<()> {
        let mut next = self.roster.clone();
        next.add(employee)
            .map_err(|e| from_registry("roster_add", e))?;
        self.commit(next)
    }

    /// Overwrite the fields in `patch` on every row whose identifier equals
    /// `id`
    ///
    /// # Errors
    ///
    /// `Io` / `Persistence` when the file could not be rewritten. An unknown
    /// identifier is not an error; it yields [`MutationOutcome::NotFound`].
    pub fn update(&mut self, id: &str, patch: &EmployeePatch) -> Result<MutationOutcome> {
        log_op_start!(
            "roster_update",
            employee_id = id,
            fields = ?patch.fields()
        );
        let start = std::time::Instant::now();

        let outcome = self.update_impl(id, patch).map_err(|e| {
            log_op_error!(
                "roster_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                employee_id = id
            );
            e
        })?;

        log_op_end!(
            "roster_update",
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = id,
            affected = outcome.affected()
        );

        Ok(outcome)
    }

    fn update_impl(&mut self, id: &str, patch: &EmployeePatch) -> Result<MutationOutcome> {
        let mut next = self.roster.clone();
        let outcome = next.update(id, patch);
        if outcome.is_applied() {
            self.commit(next)?;
        }
        Ok(outcome)
    }

    /// Remove every row whose identifier equals `id`
    ///
    /// # Errors
    ///
    /// `Io` / `Persistence` when the file could not be rewritten. An unknown
    /// identifier yields [`MutationOutcome::NotFound`] and writes nothing.
    pub fn delete(&mut self, id: &str) -> Result<MutationOutcome> {
        log_op_start!("roster_delete", employee_id = id);
        let start = std::time::Instant::now();

        let outcome = self.delete_impl(id).map_err(|e| {
            log_op_error!(
                "roster_delete",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                employee_id = id
            );
            e
        })?;

        log_op_end!(
            "roster_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = id,
            affected = outcome.affected()
        );

        Ok(outcome)
    }

    fn delete_impl(&mut self, id: &str) -> Result<MutationOutcome> {
        let mut next = self.roster.clone();
        let outcome = next.delete(id);
        if outcome.is_applied() {
            self.commit(next)?;
        }
        Ok(outcome)
    }

    fn commit(&mut self, next: Roster) -> Result<()> {
        self.persist(&next)?;
        self.roster = next;
        Ok(())
    }

    fn persist(&self, roster: &Roster) -> Result<()> {
        let bytes = self
            .backend
            .encode(roster.list())
            .map_err(|e| e.with_entity_id(self.path.display().to_string()))?;
        atomic_write(&self.path, &bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            backend = self.backend.name(),
            rows = roster.len(),
            "roster persisted"
        );
        Ok(())
    }
}
