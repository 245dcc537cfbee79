// Simulation options validation and normalization
use crate::error::{OptionsError, Result};
use crate::fields::{OptionField, ValueType};
use crate::model::{EnergyStraggling, ScatteringType, SimulationOptions};
use crate::providers::{json_type_name, RawOptions};
use crate::settings::{UnknownKeyPolicy, ValidatorSettings};
use error_common::codes;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// Value is not of the field's semantic type
    TypeMismatch,
    /// Right type, outside the legal range or enumeration
    DomainViolation,
    /// Two individually valid fields break an invariant together
    CrossFieldViolation,
    /// Key names no field and unknown keys are rejected
    UnknownField,
}

impl ValidationErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ValidationErrorKind::TypeMismatch => codes::validation::TYPE_MISMATCH,
            ValidationErrorKind::DomainViolation => codes::validation::DOMAIN_VIOLATION,
            ValidationErrorKind::CrossFieldViolation => codes::validation::CROSS_FIELD_VIOLATION,
            ValidationErrorKind::UnknownField => codes::validation::UNKNOWN_FIELD,
        }
    }
}

/// One violation, ready to render next to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_field: Option<String>,
}

impl FieldError {
    fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
            related_field: None,
        }
    }

    fn type_mismatch(field: OptionField, found: &Value) -> Self {
        Self::new(
            field.wire_name(),
            ValidationErrorKind::TypeMismatch,
            format!(
                "expected {}, found {}",
                field.value_type().describe(),
                json_type_name(found)
            ),
        )
    }

    fn domain(field: OptionField, message: impl Into<String>) -> Self {
        Self::new(field.wire_name(), ValidationErrorKind::DomainViolation, message)
    }

    fn cross_field(field: OptionField, related: OptionField, message: impl Into<String>) -> Self {
        Self {
            related_field: Some(related.wire_name().to_string()),
            ..Self::new(field.wire_name(), ValidationErrorKind::CrossFieldViolation, message)
        }
    }

    /// Whether this error should be shown on `field`
    pub fn concerns(&self, field: &str) -> bool {
        self.field == field || self.related_field.as_deref() == Some(field)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of every violation found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorList(Vec<FieldError>);

impl ValidationErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Errors to render on `field`, including cross-field errors naming it as related
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |error| error.concerns(field))
    }

    pub fn count_of(&self, kind: ValidationErrorKind) -> usize {
        self.0.iter().filter(|error| error.kind == kind).count()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "{} {noun}", self.0.len())?;
        for (i, error) in self.0.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validates raw options and merges them over defaults
///
/// Stateless apart from its settings; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    settings: ValidatorSettings,
}

impl Validator {
    pub fn new(settings: ValidatorSettings) -> Self {
        Self { settings }
    }

    /// Validate `raw` and merge it over `defaults`
    ///
    /// Present fields override the defaults, absent fields keep them. Every
    /// violation is collected before returning.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Precondition`] when `defaults` itself breaks the
    /// contract, [`OptionsError::Invalid`] with the full ordered error list
    /// when `raw` does.
    pub fn validate(
        &self,
        raw: &RawOptions,
        defaults: &SimulationOptions,
    ) -> Result<SimulationOptions> {
        let defects = self.audit(defaults);
        if !defects.is_empty() {
            tracing::error!(errors = %defects, "Rejecting invalid default simulation options");
            return Err(OptionsError::Precondition(defects));
        }

        let (merged, errors) = self.collect(raw, defaults);
        if errors.is_empty() {
            tracing::debug!(fields = raw.len(), "Simulation options accepted");
            Ok(merged)
        } else {
            tracing::warn!(
                error_count = errors.len(),
                code = codes::validation::INVALID_INPUT,
                "Simulation options rejected"
            );
            Err(OptionsError::Invalid(errors))
        }
    }

    /// Contract violations of a complete options value under these settings
    pub fn audit(&self, options: &SimulationOptions) -> ValidationErrorList {
        self.collect(&RawOptions::from(options), options).1
    }

    fn collect(
        &self,
        raw: &RawOptions,
        defaults: &SimulationOptions,
    ) -> (SimulationOptions, ValidationErrorList) {
        let mut merged = *defaults;
        let mut errors = ValidationErrorList::new();
        let mut failed = BTreeSet::new();

        for field in OptionField::ALL {
            if let Some((key, value)) = raw.lookup(field) {
                if key != field.wire_name() {
                    tracing::debug!(field = %field, alias = key, "Accepted legacy option key");
                }
                if let Err(error) = apply(field, value, &mut merged) {
                    errors.push(error);
                    failed.insert(field);
                    continue;
                }
            }

            if field == OptionField::LowEnergyNeutronCutOff {
                // Checked on the effective value: a default cut-off may become
                // relevant because the raw input switched fast transport on.
                let fast_on = failed.contains(&OptionField::FastNeutronTransportOn)
                    || merged.fast_neutron_transport_on;
                if self.settings.neutron_cutoff.applies(fast_on) {
                    if let Err(error) = non_negative(field, merged.low_energy_neutron_cut_off) {
                        errors.push(error);
                        failed.insert(field);
                    }
                }
            }
        }

        if self.settings.unknown_keys == UnknownKeyPolicy::Reject {
            for key in raw.unknown_keys() {
                errors.push(FieldError::new(
                    key,
                    ValidationErrorKind::UnknownField,
                    "is not a recognized simulation option",
                ));
            }
        }

        let pair_valid =
            |a: OptionField, b: OptionField| !failed.contains(&a) && !failed.contains(&b);

        if pair_valid(OptionField::MinEnergyLoss, OptionField::MeanEnergyLoss)
            && merged.min_energy_loss > merged.mean_energy_loss
        {
            errors.push(FieldError::cross_field(
                OptionField::MinEnergyLoss,
                OptionField::MeanEnergyLoss,
                format!(
                    "must not exceed meanEnergyLoss ({} > {})",
                    merged.min_energy_loss, merged.mean_energy_loss
                ),
            ));
        }

        if pair_valid(
            OptionField::NumberOfRecordedParticles,
            OptionField::NumberOfGeneratedParticles,
        ) && merged.number_of_recorded_particles > merged.number_of_generated_particles
        {
            errors.push(FieldError::cross_field(
                OptionField::NumberOfRecordedParticles,
                OptionField::NumberOfGeneratedParticles,
                format!(
                    "must not exceed numberOfGeneratedParticles ({} > {})",
                    merged.number_of_recorded_particles, merged.number_of_generated_particles
                ),
            ));
        }

        (merged, errors)
    }
}

/// Type and domain check one present value, storing it on success
fn apply(
    field: OptionField,
    value: &Value,
    merged: &mut SimulationOptions,
) -> std::result::Result<(), FieldError> {
    match field {
        OptionField::AntiparticleCorrectionOn => {
            merged.antiparticle_correction_on = expect_bool(field, value)?;
        }
        OptionField::NuclearCorrectionOn => {
            merged.nuclear_correction_on = expect_bool(field, value)?;
        }
        OptionField::MeanEnergyLoss => {
            merged.mean_energy_loss = non_negative(field, expect_number(field, value)?)?;
        }
        OptionField::MinEnergyLoss => {
            merged.min_energy_loss = non_negative(field, expect_number(field, value)?)?;
        }
        OptionField::ScatteringType => {
            let literal = expect_literal(field, value)?;
            merged.scattering_type = ScatteringType::from_literal(literal)
                .ok_or_else(|| not_in_set(field, literal))?;
        }
        OptionField::EnergyStraggling => {
            let literal = expect_literal(field, value)?;
            merged.energy_straggling = EnergyStraggling::from_literal(literal)
                .ok_or_else(|| not_in_set(field, literal))?;
        }
        OptionField::FastNeutronTransportOn => {
            merged.fast_neutron_transport_on = expect_bool(field, value)?;
        }
        // Domain depends on the effective fast transport flag; checked by the caller.
        OptionField::LowEnergyNeutronCutOff => {
            merged.low_energy_neutron_cut_off = expect_number(field, value)?;
        }
        OptionField::RecordSecondaryNeutronCreation => {
            merged.record_secondary_neutron_creation = expect_bool(field, value)?;
        }
        OptionField::NumberOfGeneratedParticles => {
            merged.number_of_generated_particles = expect_count(field, value)?;
        }
        OptionField::NumberOfRecordedParticles => {
            merged.number_of_recorded_particles = expect_count(field, value)?;
        }
    }
    Ok(())
}

fn expect_bool(field: OptionField, value: &Value) -> std::result::Result<bool, FieldError> {
    value.as_bool().ok_or_else(|| FieldError::type_mismatch(field, value))
}

fn expect_number(field: OptionField, value: &Value) -> std::result::Result<f64, FieldError> {
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .ok_or_else(|| FieldError::type_mismatch(field, value))
}

/// Particle count: a JSON integer >= 1. `1000.0` is a float and does not
/// qualify; integers past `u64::MAX` are parsed as floats by `serde_json`
/// and are reported the same way.
fn expect_count(field: OptionField, value: &Value) -> std::result::Result<u64, FieldError> {
    if let Some(count) = value.as_u64() {
        return if count >= 1 {
            Ok(count)
        } else {
            Err(FieldError::domain(field, format!("must be >= 1 (got {count})")))
        };
    }
    if let Some(negative) = value.as_i64() {
        return Err(FieldError::domain(field, format!("must be >= 1 (got {negative})")));
    }
    if value.is_number() {
        Err(FieldError::new(
            field.wire_name(),
            ValidationErrorKind::TypeMismatch,
            format!("expected an integer, found {value}"),
        ))
    } else {
        Err(FieldError::type_mismatch(field, value))
    }
}

fn expect_literal(field: OptionField, value: &Value) -> std::result::Result<&str, FieldError> {
    value.as_str().ok_or_else(|| FieldError::type_mismatch(field, value))
}

fn non_negative(field: OptionField, number: f64) -> std::result::Result<f64, FieldError> {
    if number >= 0.0 {
        Ok(number)
    } else {
        Err(FieldError::domain(field, format!("must be >= 0 (got {number})")))
    }
}

fn not_in_set(field: OptionField, literal: &str) -> FieldError {
    let allowed = match field.value_type() {
        ValueType::Literal(literals) => literals.join(", "),
        _ => String::new(),
    };
    FieldError::domain(field, format!("must be one of: {allowed} (got {literal:?})"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invalid(result: Result<SimulationOptions>) -> ValidationErrorList {
        match result {
            Err(OptionsError::Invalid(errors)) => errors,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let defaults = SimulationOptions::default();
        let options = Validator::default().validate(&RawOptions::new(), &defaults).unwrap();
        assert_eq!(options, defaults);
    }

    #[test]
    fn test_type_mismatch_short_circuits_only_that_field() {
        let raw = RawOptions::new()
            .with("meanEnergyLoss", "lots")
            .with("numberOfGeneratedParticles", 0);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));

        assert_eq!(errors.len(), 2);
        let list = errors.into_inner();
        assert_eq!(list[0].field, "meanEnergyLoss");
        assert_eq!(list[0].kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(list[0].message, "expected a number, found string");
        assert_eq!(list[1].field, "numberOfGeneratedParticles");
        assert_eq!(list[1].kind, ValidationErrorKind::DomainViolation);
    }

    #[test]
    fn test_null_is_type_mismatch() {
        let raw = RawOptions::new().with("fastNeutronTransportOn", Value::Null);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));
        assert_eq!(errors.count_of(ValidationErrorKind::TypeMismatch), 1);
    }

    #[test]
    fn test_float_encoded_count_is_type_mismatch() {
        let raw = RawOptions::new().with("numberOfGeneratedParticles", json!(1000.0));
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));
        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(error.message, "expected an integer, found 1000.0");
    }

    #[test]
    fn test_negative_count_is_domain_violation() {
        let raw = RawOptions::new().with("numberOfRecordedParticles", -5);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));
        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ValidationErrorKind::DomainViolation);
        assert_eq!(error.message, "must be >= 1 (got -5)");
    }

    #[test]
    fn test_count_beyond_u64_is_type_mismatch() {
        let raw =
            RawOptions::from_json_str(r#"{"numberOfGeneratedParticles": 18446744073709551616}"#)
                .unwrap();
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));

        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ValidationErrorKind::TypeMismatch);
        assert!(error.message.starts_with("expected an integer, found "));
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_shareable<T: Copy + Send + Sync>() {}
        assert_shareable::<Validator>();
        assert_shareable::<SimulationOptions>();
    }

    #[test]
    fn test_cross_field_skipped_when_member_invalid() {
        let raw = RawOptions::new()
            .with("meanEnergyLoss", -1.0)
            .with("minEnergyLoss", 5.0);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.count_of(ValidationErrorKind::CrossFieldViolation), 0);
    }

    #[test]
    fn test_cross_field_uses_merged_defaults() {
        // default meanEnergyLoss is 1.0
        let raw = RawOptions::new().with("minEnergyLoss", 2.5);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));

        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldViolation);
        assert_eq!(error.related_field.as_deref(), Some("meanEnergyLoss"));
        assert!(error.concerns("minEnergyLoss"));
        assert!(error.concerns("meanEnergyLoss"));
    }

    #[test]
    fn test_huge_recorded_count_exceeds_generated() {
        let raw = RawOptions::new().with("numberOfRecordedParticles", u64::MAX);
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));
        assert_eq!(errors.count_of(ValidationErrorKind::CrossFieldViolation), 1);
    }

    #[test]
    fn test_error_list_serializes_as_array() {
        let raw = RawOptions::new().with("scatteringType", "rutherford");
        let errors = invalid(Validator::default().validate(&raw, &SimulationOptions::default()));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            json!([{
                "field": "scatteringType",
                "kind": "DomainViolation",
                "message": "must be one of: gaussian, moliere (got \"rutherford\")"
            }])
        );
    }

    #[test]
    fn test_error_list_display() {
        let mut errors = ValidationErrorList::new();
        errors.push(FieldError::domain(OptionField::MeanEnergyLoss, "must be >= 0 (got -1)"));
        errors.push(FieldError::domain(OptionField::MinEnergyLoss, "must be >= 0 (got -2)"));
        assert_eq!(
            errors.to_string(),
            "2 errors: meanEnergyLoss: must be >= 0 (got -1); minEnergyLoss: must be >= 0 (got -2)"
        );
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ValidationErrorKind::TypeMismatch.code(), "VALIDATION_1001");
        assert_eq!(ValidationErrorKind::UnknownField.code(), "VALIDATION_1004");
    }
}
