//! The record-store loader boundary.
//!
//! The core only requires an ordered sequence of [`Spell`] values; this
//! module supplies it from a JSON collection. Parse failures and an empty
//! collection both surface as [`GrimoireError::Load`](crate::error::GrimoireError)
//! at startup, before any index exists.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::spell::{Spell, Spellbook};

/// Parse a spellbook from a JSON array of spells.
pub fn spellbook_from_str(json: &str) -> Result<Spellbook> {
    let spells: Vec<Spell> = serde_json::from_str(json)?;
    Spellbook::new(spells)
}

/// Read and parse a spellbook from a file.
pub fn spellbook_from_path(path: impl AsRef<Path>) -> Result<Spellbook> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let spellbook = spellbook_from_str(&json)?;
    info!(path = %path.display(), spells = spellbook.len(), "spellbook loaded");
    Ok(spellbook)
}
