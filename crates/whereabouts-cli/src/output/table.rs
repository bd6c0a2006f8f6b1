//! Table formatting utilities for CLI output.

use std::collections::BTreeSet;

use comfy_table::{ContentArrangement, Table, presets};
use whereabouts::eval::basic::BASIC_KEYWORDS;
use whereabouts::{ExpressionList, FilterSpec, Sign};

/// Format a parsed expression tree as an ASCII table, one row per field
/// node, fallbacks indented under their parent.
pub fn expression_table(list: &ExpressionList) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Filter"]);
    add_rows(&mut table, list, 0);
    table
}

fn add_rows(table: &mut Table, list: &ExpressionList, depth: usize) {
    for node in &list.nodes {
        let indent = "  ".repeat(depth);
        let filter = node.filter.as_ref().map_or_else(String::new, filter_summary);
        table.add_row(vec![format!("{indent}{}", node.canonical_name), filter]);
        if let Some(fallback) = &node.fallback {
            add_rows(table, fallback, depth + 1);
        }
    }
}

/// Human-readable filter summary, e.g. `-[motorway] & category -[highway]`.
fn filter_summary(filter: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if !filter.self_values.is_empty() {
        parts.push(format!(
            "{}[{}]",
            sign_glyph(filter.self_sign),
            join_values(&filter.self_values)
        ));
    }
    for sub in &filter.sub_predicates {
        parts.push(format!(
            "{} {}[{}]",
            sub.target_field,
            sign_glyph(sub.sign),
            join_values(&sub.values)
        ));
    }
    parts.join(" & ")
}

fn sign_glyph(sign: Sign) -> &'static str {
    match sign {
        Sign::Include => "+",
        Sign::Exclude => "-",
    }
}

fn join_values(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join("|")
}

/// Format a basic-mode token list as a table with recognition status.
pub fn tokens_table(tokens: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Token", "Recognized"]);
    for token in tokens {
        let recognized = if BASIC_KEYWORDS.contains(&token.as_str()) {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![token.clone(), recognized.to_string()]);
    }
    table
}
