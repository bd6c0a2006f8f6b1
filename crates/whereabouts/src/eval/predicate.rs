//! Predicate evaluation for field filters.

use crate::eval::context::AttributeContext;
use crate::parser::ast::{FilterSpec, Sign};

/// Evaluate a filter against the context.
///
/// The self-predicate (when present) compares the owning field's raw value
/// against the listed literals; each sub-predicate does the same for its
/// target field. All present conditions are ANDed. A filter with no
/// conditions at all evaluates to true.
///
/// Comparisons are case-insensitive exact matches against raw attribute
/// values: no filtering, fallback, or dedup state is visible here. An absent
/// field compares as blank, so an Exclude list passes for it unless blank
/// itself is listed.
pub fn matches(filter: &FilterSpec, ctx: &AttributeContext, owner_field: &str) -> bool {
    if !filter.self_values.is_empty() {
        let raw = normalized(ctx.get(owner_field));
        if filter.self_values.contains(&raw) != (filter.self_sign == Sign::Include) {
            return false;
        }
    }
    filter.sub_predicates.iter().all(|sub| {
        let raw = normalized(ctx.get(&sub.target_field));
        sub.values.contains(&raw) == (sub.sign == Sign::Include)
    })
}

fn normalized(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
