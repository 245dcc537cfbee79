//! Operations CLI for the Transport Engine
//!
//! `transport` checks simulation options payloads before they reach the
//! transport backend:
//!
//! ```bash
//! # Validate a payload, printing the normalized options or every error
//! transport validate run.json
//! transport validate run.json --format json --settings validator.toml
//!
//! # Render the payload as SHIELD-HIT12A beam cards
//! transport cards run.json --defaults site-defaults.json
//!
//! # Inspect the built-in defaults
//! transport defaults --pretty
//! ```
//!
//! Exit codes: `0` accepted, `2` rejected payload, `1` any other failure.

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
