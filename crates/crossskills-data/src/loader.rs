//! Catalog loading: format detection, file discovery, deserialization.
//!
//! The catalog is read once at startup. Loading either succeeds with a
//! fully validated skill list or fails with a [`CatalogError`] the caller
//! surfaces as a static error message; nothing is retried.

use crate::schema::SkillData;
use crate::validate::validate_catalog;
use crossskills_core::Skill;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading or validating the skill catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No `skills.*` data file exists in the given directory.
    #[error("no skills data file found in {dir}")]
    MissingData { dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // -- Validation failures --
    /// A requirement references a tree name outside the taxonomy.
    #[error("skill '{skill}' references unknown tree '{tree}'")]
    UnknownTree { skill: String, tree: String },

    /// A skill does not have exactly two requirement trees.
    #[error("skill '{skill}' has {count} requirement trees, expected 2")]
    RequirementCount { skill: String, count: usize },

    /// A requirement level is not a positive integer.
    #[error("skill '{skill}' has invalid level {level} for {tree}")]
    InvalidLevel {
        skill: String,
        tree: String,
        level: i64,
    },

    /// A skill pairs two elemental trees.
    #[error("skill '{skill}' pairs two elemental trees")]
    TwoElemental { skill: String },

    /// A Summoning skill's partner is neither elemental nor Necromancer.
    #[error("skill '{skill}' pairs Summoning with invalid tree '{tree}'")]
    InvalidSummoningPair { skill: String, tree: String },

    /// A non-Summoning skill has no elemental requirement tree.
    #[error("skill '{skill}' has no elemental requirement tree")]
    MissingElemental { skill: String },

    /// Two skills share a name.
    #[error("duplicate skill name '{name}'")]
    DuplicateName { name: String },

    /// A wiki URL is present but not https.
    #[error("skill '{skill}' has a non-https wiki url: {url}")]
    InvalidWikiUrl { skill: String, url: String },
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, CatalogError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(CatalogError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without
/// extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, CatalogError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(CatalogError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Deserialize a list from a file. For TOML files, extracts the array at
/// the given `toml_key` from a top-level table. For RON and JSON,
/// deserializes directly as `Vec<T>`.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, CatalogError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| CatalogError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => {
            let table: toml::Value = toml::from_str(&content).map_err(|e| CatalogError::Parse {
                file: path.to_path_buf(),
                detail: e.to_string(),
            })?;
            let array = table
                .get(toml_key)
                .ok_or_else(|| CatalogError::Parse {
                    file: path.to_path_buf(),
                    detail: format!("missing key '{toml_key}' in TOML file"),
                })?
                .clone();
            array
                .try_into()
                .map_err(|e: toml::de::Error| CatalogError::Parse {
                    file: path.to_path_buf(),
                    detail: e.to_string(),
                })
        }
    }
}

// ===========================================================================
// Catalog loading
// ===========================================================================

/// Load and validate the skill catalog from `skills.{ron,toml,json}` in
/// `dir`.
pub fn load_catalog(dir: &Path) -> Result<Vec<Skill>, CatalogError> {
    let path = find_data_file(dir, "skills")?.ok_or_else(|| CatalogError::MissingData {
        dir: dir.to_path_buf(),
    })?;

    tracing::debug!(file = %path.display(), "loading skill catalog");
    let raw: Vec<SkillData> = deserialize_list(&path, "skills")?;
    validate_catalog(raw)
}

// ===========================================================================
// Tests
// ===========================================================================
