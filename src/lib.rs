//! Grimoire – an in-memory spell index and multi-attribute query engine.
//!
//! Grimoire loads a fixed collection of spell records once at startup,
//! builds per-attribute indexes over it, and answers ad-hoc inquiries by
//! intersecting per-attribute match sets:
//! * A [`spell::Spell`] is one record: a unique name, categorical attributes
//!   drawn from fixed enumerations (`source`, `classes`, `school`), tri-state
//!   boolean attributes (components, ritual, concentration, ...) and optional
//!   numeric attributes (`cost`, `level`).
//! * The [`spell::Spellbook`] is the ordered, immutable record store.
//! * An [`inquiry::Inquiry`] is a per-query specification; omitted fields
//!   read as "don't care".
//! * The [`filter::Filter`] owns the indexes and the display, the ordered,
//!   deduplicated result list that successive inquiries reset or extend.
//!
//! ## Modules
//! * [`spell`] – the record model, the static attribute tables and the store.
//! * [`load`] – the loader boundary turning a JSON collection into a store.
//! * [`index`] – the three index families and [`index::MatchSet`], the
//!   intersection carrier built on roaring bitmaps.
//! * [`inquiry`] – the query specification.
//! * [`filter`] – index construction, evaluation, name lookup, the display.
//! * [`server`] – a thin axum endpoint accepting inquiries as JSON.
//! * [`settings`] – config-file and environment settings for the binary.
//!
//! ## Quick Start
//! ```
//! use grimoire::filter::Filter;
//! use grimoire::inquiry::Inquiry;
//! use grimoire::load;
//!
//! let spellbook = load::spellbook_from_str(
//!     r#"[{"name": "Fireball", "source": 0, "classes": [6, 7], "school": 4,
//!          "v": true, "s": true, "m": true, "level": 3}]"#,
//! ).unwrap();
//! let mut filter = Filter::new(spellbook).unwrap();
//! filter.filter(&Inquiry::new()).unwrap();
//! assert_eq!(filter.current_results().len(), 1);
//! ```
//!
//! ## Concurrency
//! The core is single-threaded: indexes are built once before the first
//! query and never mutated afterwards. Queries only mutate the display, so
//! one filter instance takes one logical query at a time; the server wraps
//! it in a mutex.

pub mod error;
pub mod filter;
pub mod index;
pub mod inquiry;
pub mod load;
pub mod server;
pub mod settings;
pub mod spell;
