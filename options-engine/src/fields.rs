//! Field catalogue for simulation options
//!
//! The eleven recognized fields in their fixed validation order, with the
//! canonical wire name, historical spellings still accepted on input, and the
//! semantic type each value must have.

use crate::model::{EnergyStraggling, ScatteringType};
use serde::{Serialize, Serializer};
use std::fmt;

/// Semantic type of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Boolean,
    Number,
    Integer,
    /// One of a closed set of string literals
    Literal(&'static [&'static str]),
}

impl ValueType {
    pub fn describe(self) -> &'static str {
        match self {
            ValueType::Boolean => "a boolean",
            ValueType::Number => "a number",
            ValueType::Integer => "an integer",
            ValueType::Literal(_) => "a string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionField {
    AntiparticleCorrectionOn,
    NuclearCorrectionOn,
    MeanEnergyLoss,
    MinEnergyLoss,
    ScatteringType,
    EnergyStraggling,
    FastNeutronTransportOn,
    LowEnergyNeutronCutOff,
    RecordSecondaryNeutronCreation,
    NumberOfGeneratedParticles,
    NumberOfRecordedParticles,
}

impl OptionField {
    /// Validation order; error lists follow it.
    pub const ALL: [OptionField; 11] = [
        OptionField::AntiparticleCorrectionOn,
        OptionField::NuclearCorrectionOn,
        OptionField::MeanEnergyLoss,
        OptionField::MinEnergyLoss,
        OptionField::ScatteringType,
        OptionField::EnergyStraggling,
        OptionField::FastNeutronTransportOn,
        OptionField::LowEnergyNeutronCutOff,
        OptionField::RecordSecondaryNeutronCreation,
        OptionField::NumberOfGeneratedParticles,
        OptionField::NumberOfRecordedParticles,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            OptionField::AntiparticleCorrectionOn => "antiparticleCorrectionOn",
            OptionField::NuclearCorrectionOn => "nuclearCorrectionOn",
            OptionField::MeanEnergyLoss => "meanEnergyLoss",
            OptionField::MinEnergyLoss => "minEnergyLoss",
            OptionField::ScatteringType => "scatteringType",
            OptionField::EnergyStraggling => "energyStraggling",
            OptionField::FastNeutronTransportOn => "fastNeutronTransportOn",
            OptionField::LowEnergyNeutronCutOff => "lowEnergyNeutronCutOff",
            OptionField::RecordSecondaryNeutronCreation => "recordSecondaryNeutronCreation",
            OptionField::NumberOfGeneratedParticles => "numberOfGeneratedParticles",
            OptionField::NumberOfRecordedParticles => "numberOfRecordedParticles",
        }
    }

    /// Spellings emitted by older clients and converters
    pub fn legacy_aliases(self) -> &'static [&'static str] {
        match self {
            OptionField::AntiparticleCorrectionOn => &["antyparticleCorrectionOn"],
            OptionField::NuclearCorrectionOn => &["nuclearCorectionOn", "nuclearReactionsOn"],
            _ => &[],
        }
    }

    pub fn value_type(self) -> ValueType {
        match self {
            OptionField::AntiparticleCorrectionOn
            | OptionField::NuclearCorrectionOn
            | OptionField::FastNeutronTransportOn
            | OptionField::RecordSecondaryNeutronCreation => ValueType::Boolean,
            OptionField::MeanEnergyLoss
            | OptionField::MinEnergyLoss
            | OptionField::LowEnergyNeutronCutOff => ValueType::Number,
            OptionField::NumberOfGeneratedParticles | OptionField::NumberOfRecordedParticles => {
                ValueType::Integer
            }
            OptionField::ScatteringType => ValueType::Literal(ScatteringType::LITERALS),
            OptionField::EnergyStraggling => ValueType::Literal(EnergyStraggling::LITERALS),
        }
    }

    /// Resolve a canonical name or a legacy alias
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == key || field.legacy_aliases().contains(&key))
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Serialize for OptionField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_lookup() {
        for field in OptionField::ALL {
            assert_eq!(OptionField::from_key(field.wire_name()), Some(field));
        }
    }

    #[test]
    fn test_legacy_aliases_resolve() {
        assert_eq!(
            OptionField::from_key("antyparticleCorrectionOn"),
            Some(OptionField::AntiparticleCorrectionOn)
        );
        assert_eq!(
            OptionField::from_key("nuclearCorectionOn"),
            Some(OptionField::NuclearCorrectionOn)
        );
        assert_eq!(
            OptionField::from_key("nuclearReactionsOn"),
            Some(OptionField::NuclearCorrectionOn)
        );
    }

    #[test]
    fn test_unknown_keys_do_not_resolve() {
        assert_eq!(OptionField::from_key("beamEnergy"), None);
        assert_eq!(OptionField::from_key("ScatteringType"), None);
        assert_eq!(OptionField::from_key(""), None);
    }

    #[test]
    fn test_value_types() {
        assert_eq!(OptionField::MeanEnergyLoss.value_type(), ValueType::Number);
        assert_eq!(OptionField::NumberOfRecordedParticles.value_type(), ValueType::Integer);
        assert_eq!(
            OptionField::ScatteringType.value_type(),
            ValueType::Literal(&["gaussian", "moliere"])
        );
    }
}
