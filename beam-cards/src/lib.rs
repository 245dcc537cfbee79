//! SHIELD-HIT12A beam card serialization
//!
//! Renders the option-driven subset of a `beam.dat` file from validated
//! [`SimulationOptions`]. Each card is one line: the keyword left-aligned in
//! 16 columns followed by 8-column value fields.
//!
//! ```rust
//! use options_engine::SimulationOptions;
//!
//! let text = beam_cards::serialize(&SimulationOptions::default())?;
//! assert!(text.starts_with("APCORR                 0\n"));
//! # Ok::<(), beam_cards::CardError>(())
//! ```

pub mod card;
pub mod error;
pub mod format;

pub use card::BeamCard;
pub use error::*;

use options_engine::SimulationOptions;

/// Rendered cards in file order
///
/// # Errors
///
/// Fails when any value does not fit its field.
pub fn cards(options: &SimulationOptions) -> Result<Vec<(BeamCard, String)>> {
    BeamCard::ORDER
        .into_iter()
        .map(|card| card.render(options).map(|content| (card, content)))
        .collect()
}

/// Beam cards as `beam.dat` text, one card per line
///
/// # Errors
///
/// Fails when any value does not fit its field.
pub fn serialize(options: &SimulationOptions) -> Result<String> {
    tracing::debug!("Serializing beam cards");

    let mut out = String::new();
    for (card, content) in cards(options)? {
        tracing::debug!(card = card.keyword(), content = %content, "Writing beam card");
        out.push_str(&format::keyword(card.keyword()));
        out.push_str(&content);
        out.push('\n');
    }
    Ok(out)
}
