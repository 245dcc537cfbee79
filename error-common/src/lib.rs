//! Common error handling utilities for Transport Engine
//!
//! This module provides the error types, error codes, and reporting helpers
//! shared by every Transport Engine crate. Crates keep their own `thiserror`
//! enums and convert into [`TransportError`] at their boundary.
//!
//! # Key Features
//!
//! - **Standardized Error Type**: one workspace-wide [`TransportError`]
//! - **Error Codes**: stable codes for each validation failure kind
//! - **Context Preservation**: who submitted a configuration, under which request
//! - **Error Reports**: serializable envelopes with an id and a timestamp
//! - **Observability**: reports are emitted through `tracing`
//!
//! # Error Categories
//!
//! - **Validation**: user supplied options outside their domain
//! - **Precondition**: a caller passed invalid defaults (programming error)
//! - **Configuration**: validator or logger settings could not be loaded
//! - **Serialization**: malformed JSON payloads
//! - **Io**: files that could not be read
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ErrorContext, ErrorReport, ErrorReporter};
//!
//! let context = ErrorContext::new()
//!     .with_request_id("req-42".to_string())
//!     .add_context("source", "run-form");
//!
//! let report = ErrorReport::new(context, vec![codes::validation::DOMAIN_VIOLATION]);
//! ErrorReporter::new().report(&report);
//! ```

pub mod codes;
pub mod context;
pub mod reporting;
pub mod types;

pub use codes::*;
pub use context::*;
pub use reporting::*;
pub use types::*;
