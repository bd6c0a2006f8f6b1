//! Parse warnings for display-options strings.
//!
//! Nothing in the parser is fatal: malformed input is repaired locally and
//! the repair is reported as a warning value. Warnings are data, not control
//! flow; callers surface them as diagnostics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-fatal problem found while parsing an options string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseWarning {
    /// A `[` fallback was never closed; it was truncated at end of input.
    #[error("unmatched '[' in \"{context}\"; fallback truncated at end of input")]
    UnbalancedBracket { context: String },

    /// A `(` filter was never closed; it was truncated at end of input.
    #[error("unmatched '(' in \"{context}\"; filter truncated at end of input")]
    UnbalancedParen { context: String },

    /// A filter or fallback with no field name in front of it; dropped.
    #[error("option \"{context}\" has no field name; dropped")]
    EmptyIdentifier { context: String },

    /// Text left over after a field's filter and fallback; ignored.
    #[error("unexpected trailing text \"{context}\"; ignored")]
    TrailingInput { context: String },

    /// A basic-mode keyword outside the recognized set; it contributes
    /// nothing to the output.
    #[error("unrecognized display option \"{keyword}\"{}", suggestion_suffix(.suggestions))]
    UnknownKeyword {
        keyword: String,
        suggestions: Vec<String>,
    },
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for an unrecognized identifier.
///
/// Candidates are ranked by Jaro-Winkler similarity; only close matches are
/// returned, best first, at most three.
pub fn compute_suggestions(input: &str, candidates: &[&str]) -> Vec<String> {
    const THRESHOLD: f64 = 0.8;

    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), *candidate))
        .filter(|(score, _)| *score >= THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
