//! Canonical logging macros
//!
//! Every controller operation is bracketed by exactly one start event and
//! exactly one of end / end_error / noop.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use orgledger_core::log_op_start;
/// log_op_start!("move_employee");
/// log_op_start!("move_employee", employee_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use orgledger_core::log_op_end;
/// log_op_end!("undo", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that hit a history boundary and did nothing
///
/// # Example
///
/// ```
/// # use orgledger_core::log_op_noop;
/// log_op_noop!("redo", position = 0);
/// ```
#[macro_export]
macro_rules! log_op_noop {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_NOOP,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_NOOP,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use orgledger_core::{log_op_error, errors::OrgError, model::EmployeeId};
/// let err = OrgError::EmployeeNotFound { employee_id: EmployeeId(9) };
/// log_op_error!("move_employee", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let kind: $crate::errors::ExErrorKind = $err.kind();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?kind,
            err.code = kind.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let kind: $crate::errors::ExErrorKind = $err.kind();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?kind,
            err.code = kind.code(),
            $($field)*
        );
    }};
}
