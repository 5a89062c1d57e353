//! Whole-word term highlighting for skill effect text.

use regex::{Regex, RegexBuilder};

/// Wraps occurrences of a fixed set of terms in caller-supplied markers.
///
/// Matching is case-insensitive and anchored on word boundaries, so a term
/// never matches as a substring of a longer word. The matched text keeps
/// its original case.
#[derive(Debug)]
pub struct TermHighlighter {
    patterns: Vec<Regex>,
}

impl TermHighlighter {
    /// Compile one pattern per term. Terms are treated literally.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, regex::Error> {
        let patterns = terms
            .iter()
            .map(|term| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term.as_ref())))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Wrap every term occurrence in `text` with `open` and `close`.
    /// With no terms, returns the text unchanged.
    pub fn apply(&self, text: &str, open: &str, close: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.patterns {
            result = pattern
                .replace_all(&result, |caps: &regex::Captures<'_>| {
                    format!("{open}{}{close}", &caps[0])
                })
                .into_owned();
        }
        result
    }
}

// ===========================================================================
// Tests
// ===========================================================================
