//! Simulation options contract for Transport Engine
//!
//! This crate owns the options that parameterize a transport run and the
//! rules a configuration must satisfy before it is dispatched:
//! - Closed enumerations for the scattering and straggling models
//! - An immutable [`SimulationOptions`] value with private fields
//! - Validation of partial JSON payloads with every violation collected
//! - Merging of the accepted payload over a complete set of defaults
//! - Deployment policies for unknown keys and the neutron cut-off
//! - Legacy key spellings accepted on input
//!
//! # Validation order
//!
//! Fields are checked in the fixed order of [`OptionField::ALL`]: type first,
//! then domain. Unknown keys follow (when rejected), then the cross-field
//! invariants `minEnergyLoss <= meanEnergyLoss` and
//! `numberOfRecordedParticles <= numberOfGeneratedParticles`, each evaluated
//! only when both of its fields are individually valid.
//!
//! # Example
//!
//! ```rust
//! use options_engine::{
//!     OptionsError, RawOptions, SimulationOptions, ValidationErrorKind, Validator,
//! };
//!
//! let raw = RawOptions::from_json_str(r#"{
//!     "meanEnergyLoss": 0.5,
//!     "minEnergyLoss": 0.5,
//!     "scatteringType": "moliere"
//! }"#)?;
//!
//! let options = Validator::default().validate(&raw, &SimulationOptions::default())?;
//! assert_eq!(options.min_energy_loss(), 0.5);
//!
//! let raw = RawOptions::new().with("scatteringType", "rutherford");
//! match Validator::default().validate(&raw, &SimulationOptions::default()) {
//!     Err(OptionsError::Invalid(errors)) => {
//!         assert_eq!(errors.count_of(ValidationErrorKind::DomainViolation), 1);
//!     }
//!     other => unreachable!("{other:?}"),
//! }
//! # Ok::<(), OptionsError>(())
//! ```

pub mod error;
pub mod fields;
pub mod model;
pub mod providers;
pub mod settings;
pub mod validation;

pub use error::*;
pub use fields::{OptionField, ValueType};
pub use model::{EnergyStraggling, ScatteringType, SimulationOptions};
pub use providers::*;
pub use settings::*;
pub use validation::*;

/// Validate `raw` over `defaults` with default settings
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate(raw: &RawOptions, defaults: &SimulationOptions) -> Result<SimulationOptions> {
    Validator::default().validate(raw, defaults)
}
