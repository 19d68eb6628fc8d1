//! Operation boundary logging macros
//!
//! A boundary operation (one the shell calls directly) logs one `start`
//! event and exactly one of `end` / `end_error`. Every event carries the
//! emitting module as `component` and the operation name as `op`; extra
//! fields are passed through to `tracing` unchanged.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use assetreg_core::log_op_start;
/// log_op_start!("roster_add");
/// log_op_start!("roster_add", employee_id = "E1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = assetreg_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is required so every `end` event can be timed.
///
/// # Example
///
/// ```
/// # use assetreg_core::log_op_end;
/// log_op_end!("roster_add", duration_ms = 3);
/// log_op_end!("roster_add", duration_ms = 3, row_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = assetreg_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// Anything convertible into `ExError` is accepted, so a `RegistryError`
/// from the roster and an `ExError` from the store both report `err_kind`
/// and `err_code`.
///
/// # Example
///
/// ```
/// # use assetreg_core::{log_op_error, errors::RegistryError};
/// let err = RegistryError::EmployeeIdMissing;
/// log_op_error!("roster_add", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = assetreg_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
