//! Skill catalog entries. Immutable after loading; the data crate's
//! validation pass guarantees every [`Skill`] has exactly two distinct
//! requirement trees in a legal pairing.

use crate::tree::Tree;
use serde::{Deserialize, Serialize};

/// A cross-class skill: a name, its two tree requirements, and optional
/// ability metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique across the catalog.
    pub name: String,

    /// Requirement trees with the minimum level in each. Exactly two
    /// entries with distinct trees.
    pub requirements: Vec<(Tree, u32)>,

    /// Ability details, when known.
    #[serde(default)]
    pub ability: Option<Ability>,

    /// External reference page, when one exists.
    #[serde(default)]
    pub wiki_url: Option<String>,
}

/// Gameplay details for a skill's ability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub ap_cost: Option<u32>,

    /// Source point cost.
    #[serde(default)]
    pub sp_cost: Option<u32>,

    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub cooldown: Option<String>,

    /// Effect description.
    #[serde(default)]
    pub effect: Option<String>,

    /// Terms within the effect text to highlight.
    #[serde(default)]
    pub special_terms: Vec<String>,

    /// The effect text is incomplete or missing from the source material.
    #[serde(default)]
    pub missing: bool,
}

impl Skill {
    /// The trees this skill requires.
    pub fn trees(&self) -> Vec<Tree> {
        self.requirements.iter().map(|(t, _)| *t).collect()
    }

    pub fn has_tree(&self, tree: Tree) -> bool {
        self.requirements.iter().any(|(t, _)| *t == tree)
    }

    /// The requirement tree that is not `category`, if any. Used for
    /// display ordering within a category bucket.
    pub fn partner_tree(&self, category: Tree) -> Option<Tree> {
        self.requirements
            .iter()
            .map(|(t, _)| *t)
            .find(|&t| t != category)
    }

    /// Source point cost, treating absent details as zero.
    pub fn source_cost(&self) -> u32 {
        self.ability
            .as_ref()
            .and_then(|a| a.sp_cost)
            .unwrap_or(0)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
