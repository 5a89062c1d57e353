//! Filter state and the visibility predicate.
//!
//! The state couples an AND-semantics primary filter (a skill must require
//! that tree) with an OR-semantics secondary set (a skill must require at
//! least one member). Updates return a new value; the owner replaces its
//! copy and re-renders.
//!
//! Summoning forms a walled garden: Summoning skills and non-Summoning
//! skills are never shown together once any explicit filter is active.
//! Selecting any non-Summoning filter hides all Summoning skills even when
//! a Summoning skill's other tree would match; selecting Summoning itself
//! switches to the Summoning-only side.

use crate::pairing::{is_valid_secondary, valid_secondaries};
use crate::tree::Tree;

/// The active filters. Always internally consistent: the secondary list
/// holds no duplicates and only trees that are valid secondaries for the
/// current primary.
///
/// The secondary list preserves insertion order -- the summary line reads
/// back the trees in the order they were selected. Equality ignores that
/// order; two states with the same primary and the same secondary *set*
/// are equal.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    primary: Option<Tree>,
    secondary: Vec<Tree>,
}

impl FilterState {
    /// The empty state: no filters active, everything visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from raw parts, dropping duplicate secondaries and
    /// any secondary that is not valid for `primary`.
    pub fn from_parts(primary: Option<Tree>, secondary: impl IntoIterator<Item = Tree>) -> Self {
        let mut state = Self {
            primary,
            secondary: Vec::new(),
        };
        for tree in secondary {
            if !state.secondary.contains(&tree) && is_valid_secondary(primary, tree) {
                state.secondary.push(tree);
            }
        }
        state
    }

    pub fn primary(&self) -> Option<Tree> {
        self.primary
    }

    /// Active secondary filters, in selection order.
    pub fn secondaries(&self) -> &[Tree] {
        &self.secondary
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_empty()
    }

    /// The secondary options a filter UI should offer for this state.
    pub fn secondary_options(&self) -> &'static [Tree] {
        valid_secondaries(self.primary)
    }

    // -- Transitions --

    /// Select `tree` as primary, or deselect it if it already is the
    /// primary. Secondaries that are invalid for the new primary are
    /// dropped.
    pub fn toggled_primary(&self, tree: Tree) -> Self {
        let primary = if self.primary == Some(tree) {
            None
        } else {
            Some(tree)
        };
        Self::from_parts(primary, self.secondary.iter().copied())
    }

    /// Add `tree` to the secondary set, or remove it if present. Adding a
    /// tree that is not a valid secondary for the current primary is a
    /// no-op; callers normally only offer [`Self::secondary_options`].
    pub fn toggled_secondary(&self, tree: Tree) -> Self {
        let mut state = self.clone();
        if let Some(pos) = state.secondary.iter().position(|&t| t == tree) {
            state.secondary.remove(pos);
        } else if is_valid_secondary(state.primary, tree) {
            state.secondary.push(tree);
        }
        state
    }

    /// Drop all filters.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    // -- Visibility --

    /// Whether a skill with the given requirement trees should be shown.
    ///
    /// Total over the whole `Tree` domain; never fails.
    pub fn shows(&self, skill_trees: &[Tree]) -> bool {
        if self.is_empty() {
            return true;
        }

        let matches_primary = match self.primary {
            Some(p) => skill_trees.contains(&p),
            None => true,
        };
        let matches_secondary =
            self.secondary.is_empty() || self.secondary.iter().any(|t| skill_trees.contains(t));

        let summoning_selected = self.primary == Some(Tree::Summoning)
            || self.secondary.contains(&Tree::Summoning);

        if skill_trees.contains(&Tree::Summoning) {
            // Inside the wall: visible only when Summoning was picked
            // explicitly (the filterless case returned above).
            summoning_selected && matches_primary && matches_secondary
        } else {
            !summoning_selected && matches_primary && matches_secondary
        }
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        if self.primary != other.primary || self.secondary.len() != other.secondary.len() {
            return false;
        }
        self.secondary.iter().all(|t| other.secondary.contains(t))
    }
}

impl Eq for FilterState {}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use Tree::*;

    fn state(primary: Option<Tree>, secondary: &[Tree]) -> FilterState {
        FilterState::from_parts(primary, secondary.iter().copied())
    }

    /// The five-skill fixture used throughout: two plain cross-skills, one
    /// Pyro/Warfare skill, and two Summoning skills.
    const CATALOG: [&[Tree]; 5] = [
        &[Pyrokinetic, Necromancer],
        &[Aerotheurge, Necromancer],
        &[Pyrokinetic, Warfare],
        &[Summoning, Pyrokinetic],
        &[Summoning, Necromancer],
    ];

    fn visible(state: &FilterState) -> Vec<&'static [Tree]> {
        CATALOG.into_iter().filter(|t| state.shows(t)).collect()
    }

    // -----------------------------------------------------------------------
    // Empty state shows everything
    // -----------------------------------------------------------------------
    #[test]
    fn empty_state_shows_all() {
        let s = FilterState::new();
        assert!(s.is_empty());
        assert_eq!(visible(&s).len(), CATALOG.len());
    }

    // -----------------------------------------------------------------------
    // Primary filter excludes the Summoning side of the wall
    // -----------------------------------------------------------------------
    #[test]
    fn pyrokinetic_primary_hides_summoning_skills() {
        let s = state(Some(Pyrokinetic), &[]);
        // Summoning+Pyrokinetic shares the Pyro tree but stays hidden.
        assert_eq!(
            visible(&s),
            vec![
                &[Pyrokinetic, Necromancer][..],
                &[Pyrokinetic, Warfare][..]
            ]
        );
    }

    #[test]
    fn summoning_primary_shows_only_summoning_skills() {
        let s = state(Some(Summoning), &[]);
        assert_eq!(
            visible(&s),
            vec![
                &[Summoning, Pyrokinetic][..],
                &[Summoning, Necromancer][..]
            ]
        );
    }

    #[test]
    fn summoning_primary_with_secondary_narrows_within_wall() {
        let s = state(Some(Summoning), &[Necromancer]);
        assert_eq!(visible(&s), vec![&[Summoning, Necromancer][..]]);
    }

    // -----------------------------------------------------------------------
    // Secondary OR semantics
    // -----------------------------------------------------------------------
    #[test]
    fn secondary_is_or_semantics() {
        let s = state(None, &[Warfare, Necromancer]);
        assert_eq!(
            visible(&s),
            vec![
                &[Pyrokinetic, Necromancer][..],
                &[Aerotheurge, Necromancer][..],
                &[Pyrokinetic, Warfare][..]
            ]
        );
    }

    #[test]
    fn primary_and_secondary_combine() {
        let s = state(Some(Pyrokinetic), &[Warfare]);
        assert_eq!(visible(&s), vec![&[Pyrokinetic, Warfare][..]]);
    }

    // -----------------------------------------------------------------------
    // Transitions keep the state consistent
    // -----------------------------------------------------------------------
    #[test]
    fn toggle_same_primary_deselects() {
        let s = state(Some(Warfare), &[]);
        let s = s.toggled_primary(Warfare);
        assert_eq!(s.primary(), None);
    }

    #[test]
    fn primary_change_drops_invalid_secondaries() {
        // Pyro primary with Warfare secondary; switching primary to
        // Warfare makes Warfare its own secondary, which must be dropped.
        let s = state(Some(Pyrokinetic), &[Warfare]);
        let s = s.toggled_primary(Warfare);
        assert_eq!(s.primary(), Some(Warfare));
        assert!(s.secondaries().is_empty());
    }

    #[test]
    fn primary_change_keeps_still_valid_secondaries() {
        let s = state(Some(Warfare), &[Pyrokinetic, Geomancer]);
        let s = s.toggled_primary(Huntsman);
        assert_eq!(s.primary(), Some(Huntsman));
        assert_eq!(s.secondaries(), &[Pyrokinetic, Geomancer]);
    }

    #[test]
    fn toggle_secondary_adds_then_removes() {
        let s = FilterState::new();
        let s = s.toggled_secondary(Warfare);
        assert_eq!(s.secondaries(), &[Warfare]);
        let s = s.toggled_secondary(Necromancer);
        assert_eq!(s.secondaries(), &[Warfare, Necromancer]);
        let s = s.toggled_secondary(Warfare);
        assert_eq!(s.secondaries(), &[Necromancer]);
    }

    #[test]
    fn invalid_secondary_toggle_is_noop() {
        // Two elemental trees can't combine.
        let s = state(Some(Pyrokinetic), &[]);
        let s = s.toggled_secondary(Aerotheurge);
        assert!(s.secondaries().is_empty());

        // Summoning is never a secondary without being offered.
        let s = FilterState::new().toggled_secondary(Summoning);
        assert!(s.secondaries().is_empty());
    }

    #[test]
    fn cleared_resets_everything() {
        let s = state(Some(Summoning), &[Pyrokinetic]);
        assert!(s.cleared().is_empty());
    }

    #[test]
    fn from_parts_dedupes() {
        let s = state(None, &[Warfare, Warfare, Necromancer]);
        assert_eq!(s.secondaries(), &[Warfare, Necromancer]);
    }

    // -----------------------------------------------------------------------
    // Equality ignores secondary order
    // -----------------------------------------------------------------------
    #[test]
    fn equality_is_set_semantics() {
        let a = state(Some(Pyrokinetic), &[Warfare, Necromancer]);
        let b = state(Some(Pyrokinetic), &[Necromancer, Warfare]);
        assert_eq!(a, b);

        let c = state(Some(Pyrokinetic), &[Warfare]);
        assert_ne!(a, c);
        assert_ne!(state(None, &[Warfare]), c);
    }
}
