//! Display grouping of the flat skill list.
//!
//! Skills are bucketed by primary tree membership: anything requiring
//! Summoning lands in the Summoning bucket regardless of its other tree,
//! everything else lands in its one elemental tree. Within a bucket,
//! skills are ordered by partner tree name and then source cost -- the
//! order a card list renders in.

use crate::skill::Skill;
use crate::tree::Tree;

/// The display categories, in presentation order: Summoning first, then
/// the elemental trees.
pub const DISPLAY_CATEGORIES: [Tree; 5] = [
    Tree::Summoning,
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
];

/// Skills partitioned into display buckets. Every category in
/// [`DISPLAY_CATEGORIES`] is present, possibly empty.
#[derive(Debug, Clone, Default)]
pub struct GroupedCatalog {
    groups: Vec<(Tree, Vec<Skill>)>,
    dropped: usize,
}

impl GroupedCatalog {
    /// Partition `skills` into display buckets.
    ///
    /// A skill matching no category (no Summoning and no elemental
    /// requirement) is dropped and counted; validated catalogs never
    /// contain such records, but hand-built data might.
    pub fn group(skills: Vec<Skill>) -> Self {
        let mut groups: Vec<(Tree, Vec<Skill>)> = DISPLAY_CATEGORIES
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();
        let mut dropped = 0;

        for skill in skills {
            let category = if skill.has_tree(Tree::Summoning) {
                Some(Tree::Summoning)
            } else {
                skill.trees().into_iter().find(|t| t.is_elemental())
            };

            match category.and_then(|c| groups.iter_mut().find(|(t, _)| *t == c)) {
                Some((_, bucket)) => bucket.push(skill),
                None => dropped += 1,
            }
        }

        for (category, bucket) in &mut groups {
            let category = *category;
            bucket.sort_by(|a, b| {
                let partner_a = a.partner_tree(category).map(Tree::name).unwrap_or("");
                let partner_b = b.partner_tree(category).map(Tree::name).unwrap_or("");
                partner_a
                    .cmp(partner_b)
                    .then_with(|| a.source_cost().cmp(&b.source_cost()))
            });
        }

        Self { groups, dropped }
    }

    /// The skills in one category. Empty for trees that are not display
    /// categories.
    pub fn category(&self, category: Tree) -> &[Skill] {
        self.groups
            .iter()
            .find(|(t, _)| *t == category)
            .map(|(_, skills)| skills.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Tree, &[Skill])> {
        self.groups.iter().map(|(t, skills)| (*t, skills.as_slice()))
    }

    /// Total skills across all buckets.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, skills)| skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records that matched no category and were discarded.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

// ===========================================================================
// Tests
// ===========================================================================
