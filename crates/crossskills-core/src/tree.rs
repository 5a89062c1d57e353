//! The skill-tree taxonomy: ten trees, partitioned into elemental and
//! non-elemental sets plus the Summoning singleton.
//!
//! The partitions drive everything else in this crate -- pairing rules,
//! the walled-garden visibility predicate, and display grouping -- so they
//! are expressed as compile-time constant sets over a closed enum rather
//! than as bare strings. Invalid tree names are rejected at the data
//! boundary ([`Tree::from_str`]), never compared deep inside filter logic.

use serde::{Deserialize, Serialize};

/// One of the ten skill trees a cross-class skill can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tree {
    Pyrokinetic,
    Aerotheurge,
    Geomancer,
    Hydrosophist,
    Summoning,
    Warfare,
    Huntsman,
    Scoundrel,
    Polymorph,
    Necromancer,
}

/// The four elemental trees.
pub const ELEMENTAL_TREES: [Tree; 4] = [
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
];

/// The five non-elemental trees. Necromancer is a member here but is
/// carved out specially by the pairing rules for Summoning.
pub const NON_ELEMENTAL_TREES: [Tree; 5] = [
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

/// Every tree, in canonical display order.
pub const ALL_TREES: [Tree; 10] = [
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Summoning,
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

impl Tree {
    /// The tree's display name. Also the spelling used in data files and
    /// query strings.
    pub fn name(self) -> &'static str {
        match self {
            Tree::Pyrokinetic => "Pyrokinetic",
            Tree::Aerotheurge => "Aerotheurge",
            Tree::Geomancer => "Geomancer",
            Tree::Hydrosophist => "Hydrosophist",
            Tree::Summoning => "Summoning",
            Tree::Warfare => "Warfare",
            Tree::Huntsman => "Huntsman",
            Tree::Scoundrel => "Scoundrel",
            Tree::Polymorph => "Polymorph",
            Tree::Necromancer => "Necromancer",
        }
    }

    pub fn is_elemental(self) -> bool {
        ELEMENTAL_TREES.contains(&self)
    }

    pub fn is_summoning(self) -> bool {
        self == Tree::Summoning
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tree name that is not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill tree '{0}'")]
pub struct UnknownTree(pub String);

impl std::str::FromStr for Tree {
    type Err = UnknownTree;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TREES
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTree(s.to_string()))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
