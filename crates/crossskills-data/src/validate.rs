//! The catalog validation pass.
//!
//! Raw records become core [`Skill`] values here, or the whole load fails
//! with the first violation found. Downstream filter logic assumes these
//! invariants and never re-checks them:
//!
//! - every requirement tree name is in the taxonomy;
//! - exactly two distinct requirement trees, positive levels;
//! - at most one of the two trees is elemental;
//! - a Summoning skill's partner is elemental or Necromancer;
//! - a non-Summoning skill has at least one elemental tree;
//! - skill names are unique; wiki URLs, when present, are https.

use crate::loader::CatalogError;
use crate::schema::SkillData;
use crossskills_core::tree::Tree;
use crossskills_core::{Ability, Skill};
use std::collections::HashSet;

/// Validate raw records and convert them to core skills.
pub fn validate_catalog(records: Vec<SkillData>) -> Result<Vec<Skill>, CatalogError> {
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut skills = Vec::with_capacity(records.len());

    for record in records {
        if !seen_names.insert(record.name.clone()) {
            let err = CatalogError::DuplicateName { name: record.name };
            tracing::warn!("catalog rejected: {err}");
            return Err(err);
        }

        let skill = validate_skill(record).inspect_err(|e| {
            tracing::warn!("catalog rejected: {e}");
        })?;
        skills.push(skill);
    }

    tracing::debug!(count = skills.len(), "skill catalog validated");
    Ok(skills)
}

fn validate_skill(record: SkillData) -> Result<Skill, CatalogError> {
    let count = record.requirements.len();
    if count != 2 {
        return Err(CatalogError::RequirementCount {
            skill: record.name,
            count,
        });
    }

    let mut requirements: Vec<(Tree, u32)> = Vec::with_capacity(2);
    for (name, level) in &record.requirements {
        let tree: Tree = name.parse().map_err(|_| CatalogError::UnknownTree {
            skill: record.name.clone(),
            tree: name.clone(),
        })?;
        if *level <= 0 || *level > u32::MAX as i64 {
            return Err(CatalogError::InvalidLevel {
                skill: record.name.clone(),
                tree: name.clone(),
                level: *level,
            });
        }
        requirements.push((tree, *level as u32));
    }

    let trees: Vec<Tree> = requirements.iter().map(|(t, _)| *t).collect();
    let elemental_count = trees.iter().filter(|t| t.is_elemental()).count();
    if elemental_count > 1 {
        return Err(CatalogError::TwoElemental { skill: record.name });
    }

    if trees.contains(&Tree::Summoning) {
        // Partner must be elemental or Necromancer.
        let partner = trees
            .iter()
            .copied()
            .find(|&t| t != Tree::Summoning)
            .unwrap_or(Tree::Summoning);
        if !partner.is_elemental() && partner != Tree::Necromancer {
            return Err(CatalogError::InvalidSummoningPair {
                skill: record.name,
                tree: partner.name().to_string(),
            });
        }
    } else if elemental_count == 0 {
        return Err(CatalogError::MissingElemental { skill: record.name });
    }

    if let Some(url) = &record.wiki_url
        && !url.starts_with("https://")
    {
        return Err(CatalogError::InvalidWikiUrl {
            skill: record.name,
            url: url.clone(),
        });
    }

    let ability = record.ability_details.map(|details| Ability {
        ap_cost: details.ap_cost,
        sp_cost: details.sp_cost,
        range: details.range,
        cooldown: details.cooldown,
        effect: details.effect,
        special_terms: details.special_terms,
        missing: details.missing,
    });

    Ok(Skill {
        name: record.name,
        requirements,
        ability,
        wiki_url: record.wiki_url,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
