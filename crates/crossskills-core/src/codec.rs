//! Query-string codec for the filter state.
//!
//! Two parameters: `and` holds the primary tree name, `or` holds the
//! secondary trees comma-joined. Encoding sorts the secondaries
//! lexicographically so the same filter set always produces the same URL;
//! decoding silently drops anything unknown or invalid and yields a
//! consistent [`FilterState`].

use crate::filter::FilterState;
use crate::tree::Tree;

/// Serialize a filter state. Returns the empty string for the empty state,
/// otherwise a `?`-prefixed query string.
pub fn encode(state: &FilterState) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(primary) = state.primary() {
        parts.push(format!("and={primary}"));
    }
    if !state.secondaries().is_empty() {
        let mut names: Vec<&str> = state.secondaries().iter().map(|t| t.name()).collect();
        names.sort_unstable();
        parts.push(format!("or={}", names.join(",")));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Parse a filter state from a query string, with or without the leading
/// `?`. Unknown tree names and invalid primary/secondary combinations are
/// dropped rather than surfaced; the result is always consistent.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut primary = None;
    let mut secondary = Vec::new();

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "and" => primary = value.parse::<Tree>().ok(),
            "or" => {
                for name in value.split(',') {
                    if let Ok(tree) = name.parse::<Tree>() {
                        secondary.push(tree);
                    }
                }
            }
            _ => {}
        }
    }

    // from_parts drops secondaries the pairing rules reject, covering
    // combinations like two elemental trees selected together.
    FilterState::from_parts(primary, secondary)
}

// ===========================================================================
// Tests
// ===========================================================================
