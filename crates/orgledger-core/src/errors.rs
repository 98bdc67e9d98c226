use orgledger_core_types::RequestId;
use thiserror::Error;

use crate::model::EmployeeId;

/// Result type alias using OrgError
pub type Result<T> = std::result::Result<T, OrgError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output. Engine operations (`move`, `undo`,
/// `redo`) only ever produce `NotFound`; the remaining kinds come from roster
/// loading and tree validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Roster / structural validation
    InvalidInput,
    DuplicateId,
    MultipleSupervisors,
    Orphaned,
    CycleDetected,

    // Integration
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::MultipleSupervisors => "ERR_MULTIPLE_SUPERVISORS",
            ExErrorKind::Orphaned => "ERR_ORPHANED",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// request id of the chart session that produced it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    employee_id: Option<EmployeeId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            employee_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add employee ID context
    pub fn with_employee_id(mut self, id: EmployeeId) -> Self {
        self.employee_id = Some(id);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.employee_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(employee_id) = self.employee_id {
            write!(f, " (employee_id: {})", employee_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for org chart operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrgError {
    // ===== Lookup Errors =====
    /// No employee has this identifier
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: EmployeeId },

    /// The employee has no supervisor (it is the root, or detached)
    #[error("Supervisor not found for employee: {employee_id}")]
    SupervisorNotFound { employee_id: EmployeeId },

    // ===== Roster Errors =====
    /// The same identifier was declared twice
    #[error("Duplicate employee id: {employee_id}")]
    DuplicateEmployee { employee_id: EmployeeId },

    /// A subordinate list references an undeclared identifier
    #[error("Employee {supervisor_id} lists unknown subordinate {subordinate_id}")]
    UnknownSubordinate {
        supervisor_id: EmployeeId,
        subordinate_id: EmployeeId,
    },

    /// More than one employee lists this id as a subordinate
    #[error("Employee {employee_id} has multiple supervisors: {supervisor_ids:?}")]
    MultipleSupervisors {
        employee_id: EmployeeId,
        supervisor_ids: Vec<EmployeeId>,
    },

    /// A non-root employee has no supervisor, or the root has one
    #[error("Employee {employee_id} is not attached to the chart correctly")]
    OrphanedEmployee { employee_id: EmployeeId },

    /// Following supervisors from this employee never reaches the root
    #[error("Cycle detected in reporting chain of employee {employee_id}")]
    CycleDetected { employee_id: EmployeeId },

    /// Roster document is malformed or has an unsupported schema version
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    // ===== Integration Errors =====
    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl OrgError {
    /// Classify this error into the stable kind taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            OrgError::EmployeeNotFound { .. } | OrgError::SupervisorNotFound { .. } => {
                ExErrorKind::NotFound
            }
            OrgError::DuplicateEmployee { .. } => ExErrorKind::DuplicateId,
            OrgError::UnknownSubordinate { .. } | OrgError::InvalidRoster { .. } => {
                ExErrorKind::InvalidInput
            }
            OrgError::MultipleSupervisors { .. } => ExErrorKind::MultipleSupervisors,
            OrgError::OrphanedEmployee { .. } => ExErrorKind::Orphaned,
            OrgError::CycleDetected { .. } => ExErrorKind::CycleDetected,
            OrgError::Io { .. } => ExErrorKind::Io,
            OrgError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }

    /// The employee this error is about, if any
    pub fn employee_id(&self) -> Option<EmployeeId> {
        match self {
            OrgError::EmployeeNotFound { employee_id }
            | OrgError::SupervisorNotFound { employee_id }
            | OrgError::DuplicateEmployee { employee_id }
            | OrgError::MultipleSupervisors { employee_id, .. }
            | OrgError::OrphanedEmployee { employee_id }
            | OrgError::CycleDetected { employee_id } => Some(*employee_id),
            OrgError::UnknownSubordinate { supervisor_id, .. } => Some(*supervisor_id),
            OrgError::InvalidRoster { .. }
            | OrgError::Io { .. }
            | OrgError::Serialization { .. } => None,
        }
    }
}

impl From<OrgError> for ExError {
    fn from(err: OrgError) -> Self {
        let mut ex = ExError::new(err.kind()).with_message(err.to_string());
        if let Some(id) = err.employee_id() {
            ex = ex.with_employee_id(id);
        }
        ex
    }
}

impl From<serde_json::Error> for OrgError {
    fn from(err: serde_json::Error) -> Self {
        OrgError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for OrgError {
    fn from(err: serde_yaml::Error) -> Self {
        OrgError::InvalidRoster {
            reason: format!("YAML parse error: {}", err),
        }
    }
}

impl From<std::io::Error> for OrgError {
    fn from(err: std::io::Error) -> Self {
        OrgError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_not_found() {
        let missing = OrgError::EmployeeNotFound {
            employee_id: EmployeeId(99),
        };
        let root = OrgError::SupervisorNotFound {
            employee_id: EmployeeId(1),
        };

        assert_eq!(missing.kind(), ExErrorKind::NotFound);
        assert_eq!(root.kind(), ExErrorKind::NotFound);
        assert_eq!(missing.kind().code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_ex_error_from_org_error_carries_employee() {
        let err = OrgError::CycleDetected {
            employee_id: EmployeeId(7),
        };
        let ex: ExError = err.into();

        assert_eq!(ex.kind(), ExErrorKind::CycleDetected);
        assert_eq!(ex.code(), "ERR_CYCLE_DETECTED");
        assert_eq!(ex.employee_id(), Some(EmployeeId(7)));
        assert!(ex.message().contains("Cycle detected"));
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let ex = ExError::new(ExErrorKind::NotFound)
            .with_op("move_employee")
            .with_employee_id(EmployeeId(42))
            .with_message("Employee not found: 42");

        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("move_employee"));
        assert!(rendered.contains("(employee_id: 42)"));
    }

    #[test]
    fn test_ex_error_display_includes_request_id() {
        let ex = ExError::new(ExErrorKind::NotFound)
            .with_op("undo")
            .with_request_id(RequestId::from("req-9"));

        assert_eq!(ex.request_id().map(RequestId::as_str), Some("req-9"));
        assert!(ex.to_string().ends_with("(request_id: req-9)"));
    }

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotFound,
            ExErrorKind::InvalidInput,
            ExErrorKind::DuplicateId,
            ExErrorKind::MultipleSupervisors,
            ExErrorKind::Orphaned,
            ExErrorKind::CycleDetected,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }
}
