//! Serde data file structs for skill catalog records.
//!
//! These structs define the on-disk shape. They are deserialized from RON,
//! JSON, or TOML and then resolved into core types by the validation pass;
//! tree names stay as strings here and are only rejected or accepted at
//! that boundary.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A skill record in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillData {
    pub name: String,

    /// Tree name to minimum level. Exactly two entries expected; the
    /// validation pass enforces it.
    pub requirements: BTreeMap<String, i64>,

    #[serde(default)]
    pub ability_details: Option<AbilityDetailsData>,

    #[serde(default)]
    pub wiki_url: Option<String>,
}

/// Ability metadata for a skill record. Every field is optional; source
/// material is incomplete for some skills.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilityDetailsData {
    #[serde(default)]
    pub ap_cost: Option<u32>,

    #[serde(default)]
    pub sp_cost: Option<u32>,

    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub cooldown: Option<String>,

    #[serde(default)]
    pub effect: Option<String>,

    #[serde(default)]
    pub special_terms: Vec<String>,

    /// Marks the effect text as incomplete or missing.
    #[serde(default)]
    pub missing: bool,
}

/// Wrapper for a list of skills in TOML format (TOML does not support
/// top-level arrays).
#[derive(Debug, Clone, Deserialize)]
pub struct TomlSkills {
    pub skills: Vec<SkillData>,
}

// ===========================================================================
// Tests
// ===========================================================================
