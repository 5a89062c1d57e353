//! CrossSkills Core -- filter and catalog logic for cross-class skill lookup.
//!
//! Cross-class skills require investment in exactly two skill trees, and the
//! game's design constrains which trees can pair: at most one elemental tree
//! per skill, and Summoning pairs only with an elemental tree or Necromancer.
//! This crate models that taxonomy and implements the filtering rules a
//! viewer applies on top of it.
//!
//! Everything here is pure: functions take data in and return results, with
//! no I/O and no global state. A presentation layer owns the single mutable
//! [`filter::FilterState`] and re-renders after each transition.
//!
//! # Key Types
//!
//! - [`tree::Tree`] -- Closed enumeration of the ten skill trees, with the
//!   elemental / non-elemental / Summoning partitions as compile-time
//!   constant sets.
//! - [`pairing`] -- Which secondary filters are legal for a given primary.
//! - [`filter::FilterState`] -- Immutable-per-update filter state with the
//!   walled-garden visibility predicate.
//! - [`codec`] -- Query-string serialization of the filter state.
//! - [`summary`] -- Human-readable summary line for the current filters.
//! - [`catalog::GroupedCatalog`] -- Skills partitioned into display buckets.
//! - [`highlight::TermHighlighter`] -- Whole-word term marking in effect text.

pub mod catalog;
pub mod codec;
pub mod filter;
pub mod highlight;
pub mod pairing;
pub mod skill;
pub mod summary;
pub mod tree;

pub use catalog::GroupedCatalog;
pub use filter::FilterState;
pub use skill::{Ability, Skill};
pub use tree::Tree;
