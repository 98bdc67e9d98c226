//! Canonical schema constants for structured logging and events
//!
//! Every log line emitted by the org chart engine uses these keys. The
//! `tracing` macros need literal field names, so the emitting side spells
//! them out; the test capture layer and log assertions read events through
//! these constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Recorded on the enclosing `org_chart` span, not on each event
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_SUPERVISOR_ID: &str = "supervisor_id";

// Ledger state
pub const FIELD_POSITION: &str = "position";
pub const FIELD_LEDGER_LEN: &str = "ledger_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_NOOP: &str = "noop";
