//! Human-readable one-line summary of the active filters.
//!
//! Secondary trees are listed in selection order, not sorted -- the line
//! reads back what the user clicked. The codec normalizes order for URLs;
//! the two orderings are deliberately distinct.

use crate::filter::FilterState;
use crate::tree::Tree;

/// Render the current filter state as a sentence for the status line.
pub fn summary_line(state: &FilterState) -> String {
    let secondaries = state.secondaries();

    match (state.primary(), secondaries) {
        (None, []) => "Showing all skills".to_string(),
        (Some(primary), []) => format!("Showing all {primary} skills"),
        (None, [only]) => format!("Showing all {only} skills"),
        (None, many) => format!("Showing skills with {}", join_or(many)),
        (Some(primary), [only]) => format!("Showing all {primary} skills, with {only}"),
        (Some(primary), many) => {
            format!("Showing all {primary} skills, with {}", join_or(many))
        }
    }
}

/// Join tree names with `", "`, using `" or "` before the last.
fn join_or(trees: &[Tree]) -> String {
    let names: Vec<&str> = trees.iter().map(|t| t.name()).collect();
    match names.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
