//! Per-attribute indexes and the match sets they produce.
//!
//! Three index families are built in one pass over the spellbook and never
//! mutated afterwards: categorical membership (one roaring bitmap per
//! enumeration value), boolean membership (one bitmap holding the positions
//! where the attribute is true), and sorted numeric ranges (a `(value, pos)`
//! sequence answering interval lookups through binary search).
//!
//! Records are never copied into an index, only referenced by position.

use roaring::RoaringTreemap;

use crate::inquiry::IntRange;
use crate::spell::{EnumValue, Pos};

// ------------- MatchSet -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchSetMode {
    Universe,
    Empty,
    One,
    Multi,
}

/// The set of positions satisfying one attribute's constraint.
///
/// `Universe` is the "no constraint" sentinel and acts as the identity under
/// intersection, which keeps unconstrained attributes free: they never touch
/// the running set. Singleton sets are carried unboxed in the `One` mode.
#[derive(Debug, Clone)]
pub struct MatchSet {
    mode: MatchSetMode,
    one: Option<Pos>,
    multi: Option<RoaringTreemap>,
}

impl MatchSet {
    pub fn universe() -> Self {
        Self {
            mode: MatchSetMode::Universe,
            one: None,
            multi: None,
        }
    }
    pub fn none() -> Self {
        Self {
            mode: MatchSetMode::Empty,
            one: None,
            multi: None,
        }
    }
    /// Wrap a bitmap, demoting the degenerate sizes to their own modes.
    pub fn from_multi(multi: RoaringTreemap) -> Self {
        match multi.len() {
            0 => Self::none(),
            1 => {
                let mut set = Self::none();
                set.one(multi.min().unwrap());
                set
            }
            _ => Self {
                mode: MatchSetMode::Multi,
                one: None,
                multi: Some(multi),
            },
        }
    }
    fn empty(&mut self) {
        self.mode = MatchSetMode::Empty;
        self.one = None;
        self.multi = None;
    }
    fn one(&mut self, pos: Pos) {
        self.mode = MatchSetMode::One;
        self.one = Some(pos);
        self.multi = None;
    }
    pub fn mode(&self) -> &MatchSetMode {
        &self.mode
    }
    pub fn is_empty(&self) -> bool {
        self.mode == MatchSetMode::Empty
    }
    pub fn intersect_with(&mut self, other: &MatchSet) {
        match (&self.mode, &other.mode) {
            (_, MatchSetMode::Universe) => (),
            (MatchSetMode::Universe, _) => {
                *self = other.clone();
            }
            (MatchSetMode::Empty, _) => (),
            (_, MatchSetMode::Empty) => {
                self.empty();
            }
            (MatchSetMode::One, MatchSetMode::One) => {
                if self.one.unwrap() != other.one.unwrap() {
                    self.empty();
                }
            }
            (MatchSetMode::Multi, MatchSetMode::One) => {
                let other_one = other.one.unwrap();
                if self.multi.as_ref().unwrap().contains(other_one) {
                    self.one(other_one);
                } else {
                    self.empty();
                }
            }
            (MatchSetMode::One, MatchSetMode::Multi) => {
                if !other.multi.as_ref().unwrap().contains(self.one.unwrap()) {
                    self.empty();
                }
            }
            (MatchSetMode::Multi, MatchSetMode::Multi) => {
                *self.multi.as_mut().unwrap() &= other.multi.as_ref().unwrap();
                match self.multi.as_ref().unwrap().len() {
                    0 => self.empty(),
                    1 => {
                        let pos = self.multi.as_ref().unwrap().min().unwrap();
                        self.one(pos);
                    }
                    _ => (),
                }
            }
        }
    }
    /// Resolve to positions, ascending. The universe needs to know how many
    /// records exist to enumerate itself.
    pub fn positions(&self, record_count: u64) -> Vec<Pos> {
        match self.mode {
            MatchSetMode::Universe => (0..record_count).collect(),
            MatchSetMode::Empty => Vec::new(),
            MatchSetMode::One => vec![self.one.unwrap()],
            MatchSetMode::Multi => self.multi.as_ref().unwrap().iter().collect(),
        }
    }
}

// ------------- Categorical index -------------
/// Membership bitmaps, one per value of a fixed enumeration.
#[derive(Debug)]
pub struct CategoricalIndex {
    sets: Vec<RoaringTreemap>,
}

impl CategoricalIndex {
    pub fn new(size: usize) -> Self {
        Self {
            sets: vec![RoaringTreemap::new(); size],
        }
    }
    /// Returns false when the value lies outside the enumeration, which the
    /// builder treats as a fatal invariant violation.
    pub fn add(&mut self, value: EnumValue, pos: Pos) -> bool {
        match self.sets.get_mut(value as usize) {
            Some(set) => {
                set.insert(pos);
                true
            }
            None => false,
        }
    }
    /// Union of the accepted value sets. An all-true vector covering the full
    /// enumeration short-circuits to the universe; accept indices beyond the
    /// enumeration are ignored, never an error.
    pub fn matching(&self, accept: &[bool]) -> MatchSet {
        if accept.len() >= self.sets.len() && accept[..self.sets.len()].iter().all(|a| *a) {
            return MatchSet::universe();
        }
        let mut union = RoaringTreemap::new();
        for (value, set) in self.sets.iter().enumerate() {
            if accept.get(value).copied().unwrap_or(false) {
                union |= set;
            }
        }
        MatchSet::from_multi(union)
    }
}

// ------------- Boolean index -------------
/// Positions where the attribute is explicitly true. The set stores
/// "is true", not "is explicitly false", so the false side is computed as a
/// complement over the whole store.
#[derive(Debug)]
pub struct BooleanIndex {
    set: RoaringTreemap,
}

impl BooleanIndex {
    pub fn new() -> Self {
        Self {
            set: RoaringTreemap::new(),
        }
    }
    pub fn add(&mut self, pos: Pos) {
        self.set.insert(pos);
    }
    pub fn matching(&self, wanted: bool, record_count: u64) -> MatchSet {
        if wanted {
            MatchSet::from_multi(self.set.clone())
        } else {
            let mut complement = RoaringTreemap::new();
            complement.insert_range(0..record_count);
            complement -= &self.set;
            MatchSet::from_multi(complement)
        }
    }
}

impl Default for BooleanIndex {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Range index -------------
/// `(value, pos)` pairs sorted by value then position, answering inclusive
/// interval lookups in `O(log n)` via `partition_point`.
#[derive(Debug)]
pub struct RangeIndex {
    entries: Vec<(i64, Pos)>,
}

impl RangeIndex {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, value: i64, pos: Pos) {
        self.entries.push((value, pos));
    }
    /// Must run once, after the load pass and before any lookup.
    pub fn sort(&mut self) {
        self.entries.sort_unstable();
    }
    pub fn matching(&self, range: IntRange) -> MatchSet {
        if range.min > range.max {
            return MatchSet::none();
        }
        let lower = self.entries.partition_point(|&(value, _)| value < range.min);
        let upper = self.entries.partition_point(|&(value, _)| value <= range.max);
        let mut set = RoaringTreemap::new();
        for &(_, pos) in &self.entries[lower..upper] {
            set.insert(pos);
        }
        MatchSet::from_multi(set)
    }
}

impl Default for RangeIndex {
    fn default() -> Self {
        Self::new()
    }
}
