//! Validator settings
//!
//! Two policies the options contract leaves to the deployment: what to do
//! with keys that name no field, and whether the neutron cut-off is checked
//! while fast neutron transport is off. Settings are layered with `figment`:
//! built-in defaults, then an optional TOML file, then `TRANSPORT_OPTIONS_*`
//! environment variables.

use crate::error::{OptionsError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Handling of keys that name no option field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Forward-compatible: newer clients may send fields this build does not know
    #[default]
    Ignore,
    /// Every unknown key is reported as an `UnknownField` error
    Reject,
}

/// When the `lowEnergyNeutronCutOff` domain check applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutronCutoffPolicy {
    #[default]
    Always,
    /// Only while `fastNeutronTransportOn` is true
    WhenFastNeutronTransport,
}

impl NeutronCutoffPolicy {
    pub fn applies(self, fast_neutron_transport_on: bool) -> bool {
        match self {
            NeutronCutoffPolicy::Always => true,
            NeutronCutoffPolicy::WhenFastNeutronTransport => fast_neutron_transport_on,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    pub unknown_keys: UnknownKeyPolicy,
    pub neutron_cutoff: NeutronCutoffPolicy,
}

impl ValidatorSettings {
    pub const ENV_PREFIX: &'static str = "TRANSPORT_OPTIONS_";

    /// Reject unknown keys, always check the cut-off
    pub fn strict() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Reject,
            neutron_cutoff: NeutronCutoffPolicy::Always,
        }
    }

    pub fn with_unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    pub fn with_neutron_cutoff(mut self, policy: NeutronCutoffPolicy) -> Self {
        self.neutron_cutoff = policy;
        self
    }

    /// Layered sources, without extracting
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Load settings from defaults, the optional TOML file and the environment
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::SettingsNotFound`] when an explicit `path` does
    /// not exist and [`OptionsError::Settings`] when a layer holds a value
    /// that does not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(OptionsError::SettingsNotFound(path.to_path_buf()));
            }
        }

        let settings: Self = Self::figment(path).extract()?;
        tracing::debug!(
            unknown_keys = ?settings.unknown_keys,
            neutron_cutoff = ?settings.neutron_cutoff,
            "Validator settings loaded"
        );
        Ok(settings)
    }
}
