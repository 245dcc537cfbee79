// Raw options providers (JSON text, JSON files, existing option values)
use crate::error::{OptionsError, Result};
use crate::fields::OptionField;
use crate::model::SimulationOptions;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Partial, unvalidated options payload as received from a form or an API call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions {
    entries: Map<String, Value>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`OptionsError::NotAnObject`] unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(OptionsError::NotAnObject(json_type_name(&other))),
        }
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or when the document is not an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Value for `field`, canonical spelling first, then legacy aliases
    pub fn lookup(&self, field: OptionField) -> Option<(&'static str, &Value)> {
        std::iter::once(field.wire_name())
            .chain(field.legacy_aliases().iter().copied())
            .find_map(|key| self.entries.get(key).map(|value| (key, value)))
    }

    /// Keys that name no field, sorted
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|key| OptionField::from_key(key).is_none())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&SimulationOptions> for RawOptions {
    fn from(options: &SimulationOptions) -> Self {
        let entries = OptionField::ALL
            .into_iter()
            .map(|field| (field.wire_name().to_string(), options.value_of(field)))
            .collect();
        Self { entries }
    }
}

/// Something raw options can be loaded from
pub trait OptionsProvider {
    /// # Errors
    ///
    /// Returns an error when the source cannot be read or parsed.
    fn load(&self) -> Result<RawOptions>;
}

/// JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OptionsProvider for JsonFileProvider {
    fn load(&self) -> Result<RawOptions> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| OptionsError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "Loaded options payload");
        RawOptions::from_json_str(&text)
    }
}

/// JSON document already in memory (request bodies)
#[derive(Debug, Clone)]
pub struct JsonTextProvider {
    text: String,
}

impl JsonTextProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OptionsProvider for JsonTextProvider {
    fn load(&self) -> Result<RawOptions> {
        RawOptions::from_json_str(&self.text)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
