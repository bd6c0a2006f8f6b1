//! Expression-tree evaluation.
//!
//! Walks a parsed [`ExpressionList`] against one [`AttributeContext`]:
//! resolves each field, applies its filter, falls back when blank, and joins
//! the surviving segments. The accumulator is scoped to a single call, so
//! concurrent evaluations never share dedup state.

use crate::eval::context::{AttributeContext, NAME_DUPE_FIELDS};
use crate::eval::predicate;
use crate::parser::ast::{ExpressionList, FieldNode};
use crate::synonyms::fields;

/// Evaluate a parsed expression list into the final display string.
///
/// Non-blank results are joined with `", "`; blank results contribute
/// nothing, including no separator. Evaluating the same tree against the
/// same context twice yields the same string.
pub fn evaluate(expr: &ExpressionList, ctx: &AttributeContext) -> String {
    let mut acc = Accumulator::default();
    eval_list(expr, ctx, &mut acc);
    acc.join()
}

/// Output segments accumulated across the whole evaluation pass, including
/// fields emitted from within fallbacks.
#[derive(Default)]
struct Accumulator {
    segments: Vec<Segment>,
}

struct Segment {
    field: String,
    text: String,
}

impl Accumulator {
    fn push(&mut self, field: &str, text: String) {
        self.segments.push(Segment {
            field: field.to_string(),
            text,
        });
    }

    fn contains_text(&self, value: &str) -> bool {
        self.segments.iter().any(|segment| segment.text == value)
    }

    /// Join segments with `", "`, except a street directly following its
    /// street number, which reads as one address ("123 Elm Street").
    fn join(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                let prev = &self.segments[i - 1];
                if prev.field == fields::STREET_NUMBER
                    && (segment.field == fields::STREET || segment.field == fields::ROUTE_NUMBER)
                {
                    out.push(' ');
                } else {
                    out.push_str(", ");
                }
            }
            out.push_str(&segment.text);
        }
        out
    }
}

fn eval_list(expr: &ExpressionList, ctx: &AttributeContext, acc: &mut Accumulator) {
    for node in &expr.nodes {
        match resolve_node(node, ctx, acc) {
            Some(text) => acc.push(&node.canonical_name, text),
            None => {
                if let Some(fallback) = &node.fallback {
                    eval_list(fallback, ctx, acc);
                }
            }
        }
    }
}

/// Resolve one field node to its displayed text, or `None` when it ends up
/// blank (absent, filtered out, or deduplicated) and the fallback should run.
fn resolve_node(node: &FieldNode, ctx: &AttributeContext, acc: &Accumulator) -> Option<String> {
    let raw = resolve_raw(&node.canonical_name, ctx, acc);
    if raw.is_empty() {
        return None;
    }
    if let Some(filter) = &node.filter
        && !predicate::matches(filter, ctx, &node.canonical_name)
    {
        return None;
    }
    Some(raw.trim().to_string())
}

/// Field lookup plus the derivations that depend on evaluation state.
///
/// `name_no_dupe` resolves blank when the place name repeats a value already
/// emitted in this pass or held by one of the usual colliding fields.
/// `zone`/`zone_name` resolve blank while the tracked entity is away, so
/// their fallbacks engage.
fn resolve_raw(field: &str, ctx: &AttributeContext, acc: &Accumulator) -> String {
    match field {
        fields::NAME_NO_DUPE => {
            let name = ctx.get(fields::NAME);
            if acc.contains_text(name) || repeats_other_field(name, ctx) {
                String::new()
            } else {
                name.to_string()
            }
        }
        fields::ZONE | fields::ZONE_NAME if !ctx.in_zone() => String::new(),
        _ => ctx.get(field).to_string(),
    }
}

fn repeats_other_field(name: &str, ctx: &AttributeContext) -> bool {
    NAME_DUPE_FIELDS
        .iter()
        .any(|field| !name.is_empty() && ctx.get(field) == name)
}
