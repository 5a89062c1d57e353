//! CrossSkills Data -- data-file schema, loading, and validation.
//!
//! Raw skill records live in external data files (`skills.ron`,
//! `skills.json`, or `skills.toml`). This crate deserializes them and
//! runs the validation pass that the pure core assumes: known tree names,
//! exactly two distinct requirement trees per skill, legal pairings,
//! positive levels, unique names. Only validated [`crossskills_core::Skill`]
//! values cross into the core.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::{CatalogError, load_catalog};
pub use validate::validate_catalog;
