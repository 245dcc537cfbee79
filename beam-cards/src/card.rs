use crate::error::{CardError, Result};
use crate::format::{fixed_width_float, fixed_width_int};
use options_engine::{EnergyStraggling, ScatteringType, SimulationOptions};
use std::fmt;

/// Option-driven cards of a SHIELD-HIT12A `beam.dat`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamCard {
    /// Antiparticle correction switch
    Apcorr,
    /// Mean energy loss per step, as a fraction
    Deltae,
    /// Minimum energy loss (MeV)
    Demin,
    /// Multiple scattering model
    Mscat,
    /// Fast neutron transport switch
    Neutrfast,
    /// Low-energy neutron cut-off (MeV)
    Neutrlcut,
    /// Primaries to generate, checkpoint interval
    Nstat,
    /// Nuclear reactions switch
    Nucre,
    /// Energy straggling model
    Stragg,
}

impl BeamCard {
    /// Order cards are written in
    pub const ORDER: [BeamCard; 9] = [
        BeamCard::Apcorr,
        BeamCard::Deltae,
        BeamCard::Demin,
        BeamCard::Mscat,
        BeamCard::Neutrfast,
        BeamCard::Neutrlcut,
        BeamCard::Nstat,
        BeamCard::Nucre,
        BeamCard::Stragg,
    ];

    /// No checkpointing between primaries
    const NO_CHECKPOINT: i64 = -1;

    pub fn keyword(self) -> &'static str {
        match self {
            BeamCard::Apcorr => "APCORR",
            BeamCard::Deltae => "DELTAE",
            BeamCard::Demin => "DEMIN",
            BeamCard::Mscat => "MSCAT",
            BeamCard::Neutrfast => "NEUTRFAST",
            BeamCard::Neutrlcut => "NEUTRLCUT",
            BeamCard::Nstat => "NSTAT",
            BeamCard::Nucre => "NUCRE",
            BeamCard::Stragg => "STRAGG",
        }
    }

    /// Value columns of this card for `options`
    ///
    /// # Errors
    ///
    /// [`CardError::ValueTooWide`] when a value does not fit its 8-column field.
    pub fn render(self, options: &SimulationOptions) -> Result<String> {
        match self {
            BeamCard::Apcorr => self.int(i64::from(options.antiparticle_correction_on())),
            BeamCard::Deltae => self.float(options.mean_energy_loss() / 100.0),
            BeamCard::Demin => self.float(options.min_energy_loss()),
            BeamCard::Mscat => self.int(match options.scattering_type() {
                ScatteringType::Gaussian => 1,
                ScatteringType::Moliere => 2,
            }),
            BeamCard::Neutrfast => self.int(i64::from(options.fast_neutron_transport_on())),
            BeamCard::Neutrlcut => self.float(options.low_energy_neutron_cut_off()),
            BeamCard::Nstat => {
                let generated = i64::try_from(options.number_of_generated_particles())
                    .map_err(|_| self.too_wide(options.number_of_generated_particles()))?;
                Ok(self.int(generated)? + &self.int(Self::NO_CHECKPOINT)?)
            }
            BeamCard::Nucre => self.int(i64::from(options.nuclear_correction_on())),
            BeamCard::Stragg => self.int(match options.energy_straggling() {
                EnergyStraggling::Gaussian => 1,
                EnergyStraggling::Vavilov => 2,
            }),
        }
    }

    fn int(self, value: i64) -> Result<String> {
        fixed_width_int(value).ok_or_else(|| self.too_wide(value))
    }

    fn float(self, value: f64) -> Result<String> {
        fixed_width_float(value).ok_or_else(|| self.too_wide(value))
    }

    fn too_wide(self, value: impl fmt::Display) -> CardError {
        CardError::ValueTooWide {
            card: self.keyword(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for BeamCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
