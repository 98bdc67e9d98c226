//! Core types shared across orgledger facilities
//!
//! This crate provides the small set of types used by both the error
//! facility and the logging facility of `orgledger-core`:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
