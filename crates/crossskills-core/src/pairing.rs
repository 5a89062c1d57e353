//! Pairing rules: which secondary filters may combine with a given primary.
//!
//! The table mirrors the game's cross-class skill design. Elemental and
//! non-elemental trees only pair across the partition boundary; Summoning
//! pairs with elementals or Necromancer; with no primary active, every
//! tree except Summoning is offered (Summoning skills are reached by
//! selecting Summoning itself, see the visibility predicate).

use crate::tree::{ELEMENTAL_TREES, NON_ELEMENTAL_TREES, Tree};

/// Secondary options when no primary filter is active: every tree except
/// Summoning.
pub const NO_PRIMARY_SECONDARIES: [Tree; 9] = [
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

/// Secondary options when Summoning is the primary: the elemental trees
/// plus Necromancer.
pub const SUMMONING_SECONDARIES: [Tree; 5] = [
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Necromancer,
];

/// The set of secondary filters that are legal to combine with `primary`.
///
/// No tree is ever a valid secondary for itself; that holds structurally
/// because the returned sets never contain the primary.
pub fn valid_secondaries(primary: Option<Tree>) -> &'static [Tree] {
    match primary {
        None => &NO_PRIMARY_SECONDARIES,
        Some(Tree::Summoning) => &SUMMONING_SECONDARIES,
        Some(t) if t.is_elemental() => &NON_ELEMENTAL_TREES,
        Some(_) => &ELEMENTAL_TREES,
    }
}

/// Whether `candidate` is a legal secondary filter for `primary`.
pub fn is_valid_secondary(primary: Option<Tree>, candidate: Tree) -> bool {
    valid_secondaries(primary).contains(&candidate)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ALL_TREES;

    // -----------------------------------------------------------------------
    // No tree is its own valid secondary
    // -----------------------------------------------------------------------
    #[test]
    fn never_self_paired() {
        for t in ALL_TREES {
            assert!(
                !valid_secondaries(Some(t)).contains(&t),
                "{t} offered as its own secondary"
            );
        }
    }

    // -----------------------------------------------------------------------
    // The full rule table
    // -----------------------------------------------------------------------
    #[test]
    fn no_primary_offers_everything_but_summoning() {
        let options = valid_secondaries(None);
        assert_eq!(options.len(), 9);
        assert!(!options.contains(&Tree::Summoning));
        for t in ALL_TREES {
            if t != Tree::Summoning {
                assert!(options.contains(&t));
            }
        }
    }

    #[test]
    fn summoning_offers_elementals_and_necromancer() {
        let options = valid_secondaries(Some(Tree::Summoning));
        assert_eq!(options.len(), 5);
        for t in ELEMENTAL_TREES {
            assert!(options.contains(&t));
        }
        assert!(options.contains(&Tree::Necromancer));
        assert!(!options.contains(&Tree::Warfare));
    }

    #[test]
    fn elemental_primary_offers_non_elementals() {
        for t in ELEMENTAL_TREES {
            assert_eq!(valid_secondaries(Some(t)), &NON_ELEMENTAL_TREES);
        }
    }

    #[test]
    fn non_elemental_primary_offers_elementals() {
        for t in NON_ELEMENTAL_TREES {
            assert_eq!(valid_secondaries(Some(t)), &ELEMENTAL_TREES);
        }
    }

    #[test]
    fn is_valid_secondary_agrees_with_table() {
        assert!(is_valid_secondary(Some(Tree::Pyrokinetic), Tree::Warfare));
        assert!(!is_valid_secondary(
            Some(Tree::Pyrokinetic),
            Tree::Aerotheurge
        ));
        assert!(is_valid_secondary(Some(Tree::Summoning), Tree::Necromancer));
        assert!(!is_valid_secondary(Some(Tree::Summoning), Tree::Polymorph));
        assert!(!is_valid_secondary(None, Tree::Summoning));
    }
}
