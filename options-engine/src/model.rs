//! Simulation options data model
//!
//! [`SimulationOptions`] is the canonical, fully-populated configuration for
//! one transport run. Its fields are private to this crate: callers obtain a
//! value either from [`SimulationOptions::default`] or from the
//! [`Validator`](crate::Validator), so every value in circulation satisfies the
//! domain rules and the cross-field invariants.

use crate::error::OptionsError;
use crate::fields::OptionField;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Angular deflection model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatteringType {
    /// Gaussian approximation
    Gaussian,
    /// Moliere multiple-scattering theory
    Moliere,
}

impl ScatteringType {
    pub const ALL: [ScatteringType; 2] = [ScatteringType::Gaussian, ScatteringType::Moliere];
    pub const LITERALS: &'static [&'static str] = &["gaussian", "moliere"];

    pub fn as_str(self) -> &'static str {
        match self {
            ScatteringType::Gaussian => "gaussian",
            ScatteringType::Moliere => "moliere",
        }
    }

    /// Exact match only, `"Gaussian"` is not a scattering type.
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == literal)
    }
}

impl fmt::Display for ScatteringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScatteringType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or_else(|| OptionsError::UnknownLiteral {
            field: OptionField::ScatteringType,
            value: s.to_string(),
        })
    }
}

/// Energy-loss fluctuation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyStraggling {
    /// Vavilov distribution
    Vavilov,
    /// Gaussian approximation
    Gaussian,
}

impl EnergyStraggling {
    pub const ALL: [EnergyStraggling; 2] = [EnergyStraggling::Vavilov, EnergyStraggling::Gaussian];
    pub const LITERALS: &'static [&'static str] = &["vavilov", "gaussian"];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyStraggling::Vavilov => "vavilov",
            EnergyStraggling::Gaussian => "gaussian",
        }
    }

    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == literal)
    }
}

impl fmt::Display for EnergyStraggling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyStraggling {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or_else(|| OptionsError::UnknownLiteral {
            field: OptionField::EnergyStraggling,
            value: s.to_string(),
        })
    }
}

/// Fully-populated options for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOptions {
    pub(crate) antiparticle_correction_on: bool,
    pub(crate) nuclear_correction_on: bool,
    /// Percent of kinetic energy lost per step
    pub(crate) mean_energy_loss: f64,
    /// MeV
    pub(crate) min_energy_loss: f64,
    pub(crate) scattering_type: ScatteringType,
    pub(crate) energy_straggling: EnergyStraggling,
    pub(crate) fast_neutron_transport_on: bool,
    /// MeV
    pub(crate) low_energy_neutron_cut_off: f64,
    pub(crate) record_secondary_neutron_creation: bool,
    pub(crate) number_of_generated_particles: u64,
    pub(crate) number_of_recorded_particles: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            antiparticle_correction_on: false,
            nuclear_correction_on: true,
            mean_energy_loss: 1.0,
            min_energy_loss: 0.025,
            scattering_type: ScatteringType::Moliere,
            energy_straggling: EnergyStraggling::Vavilov,
            fast_neutron_transport_on: true,
            low_energy_neutron_cut_off: 0.0,
            record_secondary_neutron_creation: false,
            number_of_generated_particles: 1000,
            number_of_recorded_particles: 1000,
        }
    }
}

impl SimulationOptions {
    pub fn antiparticle_correction_on(&self) -> bool {
        self.antiparticle_correction_on
    }

    pub fn nuclear_correction_on(&self) -> bool {
        self.nuclear_correction_on
    }

    pub fn mean_energy_loss(&self) -> f64 {
        self.mean_energy_loss
    }

    pub fn min_energy_loss(&self) -> f64 {
        self.min_energy_loss
    }

    pub fn scattering_type(&self) -> ScatteringType {
        self.scattering_type
    }

    pub fn energy_straggling(&self) -> EnergyStraggling {
        self.energy_straggling
    }

    pub fn fast_neutron_transport_on(&self) -> bool {
        self.fast_neutron_transport_on
    }

    pub fn low_energy_neutron_cut_off(&self) -> f64 {
        self.low_energy_neutron_cut_off
    }

    pub fn record_secondary_neutron_creation(&self) -> bool {
        self.record_secondary_neutron_creation
    }

    pub fn number_of_generated_particles(&self) -> u64 {
        self.number_of_generated_particles
    }

    pub fn number_of_recorded_particles(&self) -> u64 {
        self.number_of_recorded_particles
    }

    /// JSON value of one field, as it appears on the wire
    pub fn value_of(&self, field: OptionField) -> Value {
        match field {
            OptionField::AntiparticleCorrectionOn => Value::from(self.antiparticle_correction_on),
            OptionField::NuclearCorrectionOn => Value::from(self.nuclear_correction_on),
            OptionField::MeanEnergyLoss => Value::from(self.mean_energy_loss),
            OptionField::MinEnergyLoss => Value::from(self.min_energy_loss),
            OptionField::ScatteringType => Value::from(self.scattering_type.as_str()),
            OptionField::EnergyStraggling => Value::from(self.energy_straggling.as_str()),
            OptionField::FastNeutronTransportOn => Value::from(self.fast_neutron_transport_on),
            OptionField::LowEnergyNeutronCutOff => Value::from(self.low_energy_neutron_cut_off),
            OptionField::RecordSecondaryNeutronCreation => {
                Value::from(self.record_secondary_neutron_creation)
            }
            OptionField::NumberOfGeneratedParticles => {
                Value::from(self.number_of_generated_particles)
            }
            OptionField::NumberOfRecordedParticles => {
                Value::from(self.number_of_recorded_particles)
            }
        }
    }
}
