//! The query specification.
//!
//! An [`Inquiry`] is constructed fresh per query, either with [`Inquiry::new`]
//! (match everything) or by deserializing a caller-supplied partial mapping,
//! where every omitted field reads as "don't care". It holds no index
//! references and is always passed explicitly to the filter.

use serde::{Deserialize, Deserializer};

use crate::spell::{CLASSES_SIZE, SCHOOL_SIZE, SOURCE_SIZE};

/// Discriminator for the two query paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    ByName,
    ByValue,
}

/// An inclusive numeric interval, written `[min, max]` on the wire.
/// An inverted interval (`min > max`) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[i64; 2]")]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl From<[i64; 2]> for IntRange {
    fn from([min, max]: [i64; 2]) -> Self {
        Self { min, max }
    }
}

/// A query specification over the spellbook.
///
/// Categorical attributes carry an accept vector of booleans sized to the
/// attribute's enumeration; `None` or an all-true vector means the attribute
/// is unconstrained. Boolean attributes are tri-state. Numeric attributes
/// carry an explicit optional range, with `None` as the "no constraint"
/// marker, so a literal `[0, 0]` really does mean "value exactly 0".
#[derive(Debug, Clone, Deserialize)]
pub struct Inquiry {
    #[serde(default, deserialize_with = "search_method_or_none")]
    pub search_method: Option<SearchMethod>,
    /// Comma separated spell names, consulted by the by-name path only.
    #[serde(default)]
    pub names: Option<String>,
    /// Whether to clear the display before applying this inquiry's matches.
    #[serde(default = "default_reset")]
    pub reset: bool,
    #[serde(default)]
    pub source: Option<Vec<bool>>,
    #[serde(default)]
    pub classes: Option<Vec<bool>>,
    #[serde(default)]
    pub school: Option<Vec<bool>>,
    #[serde(default)]
    pub v: Option<bool>,
    #[serde(default)]
    pub s: Option<bool>,
    #[serde(default)]
    pub m: Option<bool>,
    #[serde(default)]
    pub is_touch: Option<bool>,
    #[serde(default)]
    pub is_self: Option<bool>,
    #[serde(default)]
    pub is_ritual: Option<bool>,
    #[serde(default)]
    pub is_instant: Option<bool>,
    #[serde(default)]
    pub is_concentration: Option<bool>,
    #[serde(default)]
    pub higher_level: Option<bool>,
    #[serde(default)]
    pub material: Option<bool>,
    #[serde(default)]
    pub cost: Option<IntRange>,
    #[serde(default)]
    pub level: Option<IntRange>,
}

fn default_reset() -> bool {
    true
}

// An unrecognized discriminator reads as absent; the filter rejects both the
// same way at dispatch, without the extractor failing the whole request.
fn search_method_or_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<SearchMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Known(SearchMethod),
        Unknown(serde::de::IgnoredAny),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Known(method)) => Some(method),
        _ => None,
    })
}

impl Inquiry {
    /// The default inquiry: accept every categorical value, leave every
    /// boolean unset, constrain no range, reset the display, search by value.
    pub fn new() -> Self {
        Self {
            search_method: Some(SearchMethod::ByValue),
            names: None,
            reset: true,
            source: Some(vec![true; SOURCE_SIZE]),
            classes: Some(vec![true; CLASSES_SIZE]),
            school: Some(vec![true; SCHOOL_SIZE]),
            v: None,
            s: None,
            m: None,
            is_touch: None,
            is_self: None,
            is_ritual: None,
            is_instant: None,
            is_concentration: None,
            higher_level: None,
            material: None,
            cost: None,
            level: None,
        }
    }
}

impl Default for Inquiry {
    fn default() -> Self {
        Self::new()
    }
}
