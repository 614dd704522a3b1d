//! The filter: index construction, query evaluation and the display.
//!
//! A [`Filter`] owns the spellbook, the per-attribute indexes built from it
//! in a single pass, and the display: the ordered, deduplicated list of
//! positions the caller should currently be shown. Indexes are immutable
//! after construction; the display is the only state a query mutates.

use core::hash::BuildHasherDefault;
use std::collections::HashMap;

use seahash::SeaHasher;
use tracing::{debug, info};

use crate::error::{GrimoireError, Result};
use crate::index::{BooleanIndex, CategoricalIndex, MatchSet, RangeIndex};
use crate::inquiry::{Inquiry, SearchMethod};
use crate::spell::{BOOL_ATTRS, ENUM_ATTRS, INT_ATTRS, Pos, Spell, Spellbook, normal_name};

pub type NameHasher = BuildHasherDefault<SeaHasher>;

pub struct Filter {
    spellbook: Spellbook,
    // name -> position, normalized keys, last write wins on collisions
    names: HashMap<String, Pos, NameHasher>,
    // one index per table entry, in table order
    enums: Vec<CategoricalIndex>,
    bools: Vec<BooleanIndex>,
    ranges: Vec<RangeIndex>,
    display: Vec<Pos>,
}

impl Filter {
    /// Build every index in one pass over the spellbook. Fails when a record
    /// holds a categorical value outside its enumeration.
    pub fn new(spellbook: Spellbook) -> Result<Self> {
        let mut names = HashMap::default();
        let mut enums: Vec<CategoricalIndex> = ENUM_ATTRS
            .iter()
            .map(|attr| CategoricalIndex::new(attr.size))
            .collect();
        let mut bools: Vec<BooleanIndex> =
            BOOL_ATTRS.iter().map(|_| BooleanIndex::new()).collect();
        let mut ranges: Vec<RangeIndex> = INT_ATTRS.iter().map(|_| RangeIndex::new()).collect();

        for (i, spell) in spellbook.spells().iter().enumerate() {
            let pos = i as Pos;
            names.insert(normal_name(&spell.name), pos);
            for (attr, index) in ENUM_ATTRS.iter().zip(enums.iter_mut()) {
                for &value in (attr.values)(spell) {
                    if !index.add(value, pos) {
                        return Err(GrimoireError::Invariant(format!(
                            "spell {pos} holds {} value {value} outside its enumeration of size {}",
                            attr.name, attr.size
                        )));
                    }
                }
            }
            for (attr, index) in BOOL_ATTRS.iter().zip(bools.iter_mut()) {
                if (attr.value)(spell) == Some(true) {
                    index.add(pos);
                }
            }
            for (attr, index) in INT_ATTRS.iter().zip(ranges.iter_mut()) {
                if let Some(value) = (attr.value)(spell) {
                    index.add(value, pos);
                }
            }
        }
        for index in &mut ranges {
            index.sort();
        }
        info!(spells = spellbook.len(), "indexes built");

        Ok(Self {
            spellbook,
            names,
            enums,
            bools,
            ranges,
            display: Vec::new(),
        })
    }

    /// Value-based evaluation: the intersection of every constrained
    /// attribute's match set, starting from the universe. Positions come back
    /// ascending, so results are deterministic.
    pub fn evaluate(&self, inquiry: &Inquiry) -> Vec<Pos> {
        let record_count = self.spellbook.len() as u64;
        let mut matches = MatchSet::universe();
        for (attr, index) in ENUM_ATTRS.iter().zip(&self.enums) {
            if let Some(accept) = (attr.accept)(inquiry) {
                matches.intersect_with(&index.matching(accept));
            }
        }
        for (attr, index) in BOOL_ATTRS.iter().zip(&self.bools) {
            if let Some(wanted) = (attr.wanted)(inquiry) {
                matches.intersect_with(&index.matching(wanted, record_count));
            }
        }
        for (attr, index) in INT_ATTRS.iter().zip(&self.ranges) {
            if let Some(range) = (attr.range)(inquiry) {
                matches.intersect_with(&index.matching(range));
            }
        }
        matches.positions(record_count)
    }

    /// Name lookup: split on commas, normalize each token, skip unknown
    /// names silently. First-seen token order is preserved and repeated
    /// tokens collapse to one position.
    pub fn lookup_by_names(&self, names: &str) -> Vec<Pos> {
        let mut found = Vec::new();
        for token in names.split(',') {
            if let Some(&pos) = self.names.get(&normal_name(token)) {
                if !found.contains(&pos) {
                    found.push(pos);
                }
            }
        }
        found
    }

    /// Dispatch an inquiry and fold its matches into the display. A missing
    /// discriminator is a usage error and leaves the display untouched.
    pub fn filter(&mut self, inquiry: &Inquiry) -> Result<()> {
        let matches = match inquiry.search_method {
            Some(SearchMethod::ByName) => {
                let names = inquiry.names.as_deref().ok_or_else(|| {
                    GrimoireError::MalformedInquiry(String::from(
                        "a by_name inquiry carries no names",
                    ))
                })?;
                self.lookup_by_names(names)
            }
            Some(SearchMethod::ByValue) => self.evaluate(inquiry),
            None => {
                return Err(GrimoireError::MalformedInquiry(String::from(
                    "search_method is missing or unrecognized",
                )));
            }
        };
        debug!(matched = matches.len(), reset = inquiry.reset, "inquiry evaluated");
        self.apply(inquiry.reset, &matches);
        Ok(())
    }

    // The display update: clear on reset, then append first-seen positions.
    fn apply(&mut self, reset: bool, matches: &[Pos]) {
        if reset {
            self.display.clear();
        }
        for &pos in matches {
            if !self.display.contains(&pos) {
                self.display.push(pos);
            }
        }
    }

    pub fn display(&self) -> &[Pos] {
        &self.display
    }

    /// The display resolved back to records, in display order.
    pub fn current_results(&self) -> Vec<&Spell> {
        self.display
            .iter()
            .filter_map(|&pos| self.spellbook.get(pos))
            .collect()
    }

    pub fn spellbook(&self) -> &Spellbook {
        &self.spellbook
    }
}
