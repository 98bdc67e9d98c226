//! Request correlation for chart sessions
//!
//! Every `OrgChart` carries a `RequestContext`. Its request id is attached to
//! the tracing span of each controller operation and to the structured
//! errors the chart produces, so log lines and CLI errors from one session
//! can be matched up.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one chart session
///
/// Generated ids are UUIDv7, so they sort by creation time. Callers may
/// also supply their own (e.g. `orgledger replay --request-id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation state owned by one chart
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    /// Context with a freshly generated request id
    pub fn new() -> Self {
        Self::default()
    }

    /// Context reusing a request id supplied by the caller
    pub fn with_request_id(request_id: impl Into<RequestId>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}
