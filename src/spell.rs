//! The record model: [`Spell`] and the fixed attribute configuration.
//!
//! Every filterable attribute is declared once in a static table pairing an
//! accessor over [`Spell`] with the matching accessor over
//! [`Inquiry`](crate::inquiry::Inquiry). The tables are the single source of
//! truth for index construction and query evaluation, so adding an attribute
//! is a one-line change here.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GrimoireError, Result};
use crate::inquiry::{Inquiry, IntRange};

// ------------- Pos -------------
/// A record's position within the spellbook, assigned at load order.
pub type Pos = u64;

/// A categorical attribute value, an index into a fixed enumeration.
pub type EnumValue = u8;

// Enumeration sizes are configuration constants, never inferred from data.
pub const SOURCE_SIZE: usize = 8;
pub const CLASSES_SIZE: usize = 9;
pub const SCHOOL_SIZE: usize = 8;

// ------------- Spell -------------
/// One indexed record. Booleans are tri-state: `None` means the attribute
/// does not apply to this spell and it will be absent from the boolean
/// indexes. Numerics are optional and absent values are excluded from range
/// indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub source: EnumValue,
    #[serde(default, deserialize_with = "one_or_many")]
    pub classes: Vec<EnumValue>,
    pub school: EnumValue,
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
    pub cost: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
}

/// Normalized form of a spell name, used as the lookup key.
pub fn normal_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// Multi-valued categorical attributes may be written as a scalar or a list
// in the source collection.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<EnumValue>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(EnumValue),
        Many(Vec<EnumValue>),
    }
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

// ------------- Attribute tables -------------
/// A categorical attribute: values drawn from a fixed enumeration of `size`,
/// one or many per record.
pub struct EnumAttr {
    pub name: &'static str,
    pub size: usize,
    pub values: fn(&Spell) -> &[EnumValue],
    pub accept: fn(&Inquiry) -> Option<&[bool]>,
}

/// A boolean attribute, tri-state on both the record and the inquiry side.
pub struct BoolAttr {
    pub name: &'static str,
    pub value: fn(&Spell) -> Option<bool>,
    pub wanted: fn(&Inquiry) -> Option<bool>,
}

/// A numeric attribute with an optional value and an optional query range.
pub struct IntAttr {
    pub name: &'static str,
    pub value: fn(&Spell) -> Option<i64>,
    pub range: fn(&Inquiry) -> Option<IntRange>,
}

pub static ENUM_ATTRS: [EnumAttr; 3] = [
    EnumAttr {
        name: "source",
        size: SOURCE_SIZE,
        values: |spell| std::slice::from_ref(&spell.source),
        accept: |inquiry| inquiry.source.as_deref(),
    },
    EnumAttr {
        name: "classes",
        size: CLASSES_SIZE,
        values: |spell| &spell.classes,
        accept: |inquiry| inquiry.classes.as_deref(),
    },
    EnumAttr {
        name: "school",
        size: SCHOOL_SIZE,
        values: |spell| std::slice::from_ref(&spell.school),
        accept: |inquiry| inquiry.school.as_deref(),
    },
];

pub static BOOL_ATTRS: [BoolAttr; 10] = [
    BoolAttr { name: "v", value: |s| s.v, wanted: |q| q.v },
    BoolAttr { name: "s", value: |s| s.s, wanted: |q| q.s },
    BoolAttr { name: "m", value: |s| s.m, wanted: |q| q.m },
    BoolAttr { name: "is_touch", value: |s| s.is_touch, wanted: |q| q.is_touch },
    BoolAttr { name: "is_self", value: |s| s.is_self, wanted: |q| q.is_self },
    BoolAttr { name: "is_ritual", value: |s| s.is_ritual, wanted: |q| q.is_ritual },
    BoolAttr { name: "is_instant", value: |s| s.is_instant, wanted: |q| q.is_instant },
    BoolAttr {
        name: "is_concentration",
        value: |s| s.is_concentration,
        wanted: |q| q.is_concentration,
    },
    BoolAttr {
        name: "higher_level",
        value: |s| s.higher_level,
        wanted: |q| q.higher_level,
    },
    BoolAttr { name: "material", value: |s| s.material, wanted: |q| q.material },
];

pub static INT_ATTRS: [IntAttr; 2] = [
    IntAttr { name: "cost", value: |s| s.cost, range: |q| q.cost },
    IntAttr { name: "level", value: |s| s.level, range: |q| q.level },
];

// ------------- Spellbook -------------
/// The ordered, immutable record store, loaded once at startup.
#[derive(Debug)]
pub struct Spellbook {
    spells: Vec<Spell>,
}

impl Spellbook {
    /// An empty store is a fatal construction error, since the filter needs
    /// at least one record to validate attribute shape against.
    pub fn new(spells: Vec<Spell>) -> Result<Self> {
        if spells.is_empty() {
            return Err(GrimoireError::Load(String::from("the spellbook is empty")));
        }
        Ok(Self { spells })
    }
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }
    pub fn get(&self, pos: Pos) -> Option<&Spell> {
        self.spells.get(pos as usize)
    }
    pub fn len(&self) -> usize {
        self.spells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}
