//! Display-options expression parser.
//!
//! Turns a raw options string into an [`ExpressionList`]. Handles:
//! - Comma-separated field lists, split depth-aware (a comma only separates
//!   when no `[`/`(` is open at that point)
//! - `(...)` filters with a leading default sign, bare literals, and nested
//!   sub-predicates on other fields
//! - `[...]` fallback expressions, recursively the same grammar
//! - Synonym folding, so later stages only see canonical field names
//!
//! The parser never fails: unmatched delimiters, missing field names, and
//! stray text are repaired locally and reported as [`ParseWarning`]s, so any
//! input yields some tree.

use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{ExpressionList, FieldNode, FilterSpec, Predicate, Sign};
use super::error::ParseWarning;
use crate::synonyms;

/// Parse a raw options string into an expression tree.
///
/// Always returns a tree; structural problems are reported in the warning
/// list instead of failing. Parsing is idempotent: equal inputs produce
/// structurally equal trees, so the result can be cached and reused across
/// evaluations.
pub fn parse_expression(raw: &str) -> (ExpressionList, Vec<ParseWarning>) {
    let mut warnings = Vec::new();
    let list = expression(raw, &mut warnings);
    (list, warnings)
}

/// Parse one comma-separated field list (the same rule applies at every
/// nesting level).
fn expression(input: &str, warnings: &mut Vec<ParseWarning>) -> ExpressionList {
    let mut nodes = Vec::new();
    for part in split_depth_zero(input) {
        if let Some(node) = field_node(part, warnings) {
            nodes.push(node);
        }
    }
    ExpressionList { nodes }
}

/// Split on commas that sit outside any `[`/`(` nesting.
fn split_depth_zero(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Parse one field node: identifier, then an optional filter and an optional
/// fallback, accepted in either order.
fn field_node(part: &str, warnings: &mut Vec<ParseWarning>) -> Option<FieldNode> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }

    let mut rest = part;
    let name = identifier(&mut rest);
    let mut filter = None;
    let mut fallback = None;
    loop {
        rest = rest.trim_start();
        if rest.starts_with('(') && filter.is_none() {
            let (body, balanced) = delimited_body(&mut rest, '(', ')');
            if !balanced {
                warnings.push(ParseWarning::UnbalancedParen {
                    context: part.to_string(),
                });
            }
            filter = Some(filter_body(body, false, warnings));
        } else if rest.starts_with('[') && fallback.is_none() {
            let (body, balanced) = delimited_body(&mut rest, '[', ']');
            if !balanced {
                warnings.push(ParseWarning::UnbalancedBracket {
                    context: part.to_string(),
                });
            }
            fallback = Some(expression(body, warnings));
        } else {
            break;
        }
    }
    if !rest.trim().is_empty() {
        warnings.push(ParseWarning::TrailingInput {
            context: rest.trim().to_string(),
        });
    }

    let name = name.trim();
    if name.is_empty() {
        warnings.push(ParseWarning::EmptyIdentifier {
            context: part.to_string(),
        });
        return None;
    }
    Some(FieldNode {
        canonical_name: synonyms::canonical(name),
        filter,
        fallback,
    })
}

/// Parse one filter body into a [`FilterSpec`].
///
/// The leading `+`/`-` item, when present, sets the sign shared by every bare
/// literal in this body. Items of the form `field(...)` become sub-predicates;
/// their own nested sub-predicates are flattened into the same spec, since the
/// overall combination is a conjunction either way.
///
/// `keep_blank_literals` preserves empty literal items in the value set, so an
/// exclusion list can match a blank field; it is set for sub-predicate bodies
/// only, mirroring how self filters drop empty tokens.
fn filter_body(
    body: &str,
    keep_blank_literals: bool,
    warnings: &mut Vec<ParseWarning>,
) -> FilterSpec {
    let mut spec = FilterSpec::default();
    let mut first = true;
    for item in split_depth_zero(body) {
        let item = item.trim();
        if first {
            first = false;
            if item == "-" {
                spec.self_sign = Sign::Exclude;
                continue;
            }
            if item == "+" {
                continue;
            }
        }
        if item.contains('(') {
            sub_predicate(item, &mut spec, warnings);
        } else if !item.is_empty() || keep_blank_literals {
            spec.self_values.insert(item.to_ascii_lowercase());
        }
    }
    spec
}

/// Parse a `field(...)` item inside a filter body and append it (plus any
/// flattened nested conditions) to `spec`.
fn sub_predicate(item: &str, spec: &mut FilterSpec, warnings: &mut Vec<ParseWarning>) {
    let mut rest = item;
    let target = identifier_before_paren(&mut rest);
    let (body, balanced) = delimited_body(&mut rest, '(', ')');
    if !balanced {
        warnings.push(ParseWarning::UnbalancedParen {
            context: item.to_string(),
        });
    }
    if !rest.trim().is_empty() {
        warnings.push(ParseWarning::TrailingInput {
            context: rest.trim().to_string(),
        });
    }

    let target = target.trim();
    if target.is_empty() {
        warnings.push(ParseWarning::EmptyIdentifier {
            context: item.to_string(),
        });
        return;
    }
    let inner = filter_body(body, true, warnings);
    spec.sub_predicates.push(Predicate {
        target_field: synonyms::canonical(target),
        sign: inner.self_sign,
        values: inner.self_values,
    });
    spec.sub_predicates.extend(inner.sub_predicates);
}

/// Take the leading identifier text, stopping at any grammar delimiter.
fn identifier<'i>(input: &mut &'i str) -> &'i str {
    let name: ModalResult<&str> =
        take_while(0.., |c: char| !matches!(c, '(' | ')' | '[' | ']')).parse_next(input);
    name.unwrap_or_default()
}

/// Take the leading identifier text of a sub-predicate, stopping at `(`.
fn identifier_before_paren<'i>(input: &mut &'i str) -> &'i str {
    let name: ModalResult<&str> = take_while(0.., |c: char| c != '(').parse_next(input);
    name.unwrap_or_default()
}

/// Consume a delimited construct, returning its interior and whether the
/// closing delimiter was found. Nested delimiters of the same kind are
/// tracked; an unmatched construct consumes the rest of the input.
fn delimited_body<'i>(input: &mut &'i str, open: char, close: char) -> (&'i str, bool) {
    let source = *input;
    let inner = source.strip_prefix(open).unwrap_or(source);
    let mut depth = 1usize;
    for (i, c) in inner.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                *input = &inner[i + close.len_utf8()..];
                return (&inner[..i], true);
            }
        }
    }
    *input = "";
    (inner, false)
}
