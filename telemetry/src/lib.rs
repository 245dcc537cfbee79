//! Structured logging for Transport Engine
//!
//! Library crates only emit `tracing` events. Binaries call
//! [`init_logging`] once at startup with a [`LoggerConfig`]:
//! - Human-readable or JSON lines, always on stderr
//! - RFC 3339 UTC timestamps
//! - `RUST_LOG` overrides the configured level
//!
//! # Example
//!
//! ```rust,no_run
//! use telemetry::{init_logging, LoggerConfig};
//!
//! init_logging(&LoggerConfig::default().with_level("debug").with_json(true))?;
//! tracing::info!(run = "proton-150", "Dispatching validated options");
//! # Ok::<(), telemetry::TelemetryError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
