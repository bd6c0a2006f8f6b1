//! Legacy basic mode: fixed-keyword option lists without bracket/paren
//! syntax.
//!
//! Basic mode predates the expression grammar. Options are a plain comma
//! list of keywords; output follows a fixed canonical order unless the
//! author opts out with `do_not_reorder`, and the `place` keyword expands to
//! a composite of the descriptive place fields.

use crate::eval::context::AttributeContext;
use crate::parser::error::{ParseWarning, compute_suggestions};
use crate::synonyms::{self, fields};

/// Keywords the basic mode recognizes.
pub const BASIC_KEYWORDS: [&str; 15] = [
    "driving",
    "zone_name",
    "zone",
    "place_name",
    "place",
    "street_number",
    "street",
    "postal_code",
    "city",
    "county",
    "state",
    "country",
    "formatted_address",
    "do_not_show_not_home",
    "do_not_reorder",
];

/// Canonical output order applied unless `do_not_reorder` is present.
const DEFAULT_ORDER: [&str; 13] = [
    "driving",
    "zone_name",
    "zone",
    "place_name",
    "place",
    "street_number",
    "street",
    "postal_code",
    "city",
    "county",
    "state",
    "country",
    "formatted_address",
];

/// Composite used when no option produced any text.
const EMPTY_FALLBACK: [&str; 3] = ["zone", "street", "city"];

/// Split a basic options string into lower-cased keyword tokens.
///
/// Unrecognized keywords are kept (they resolve to blank at evaluation time)
/// but reported with "did you mean" suggestions.
pub fn tokenize(raw: &str) -> (Vec<String>, Vec<ParseWarning>) {
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();
    for part in raw.split(',') {
        let token = part.trim().to_ascii_lowercase();
        if token.is_empty() {
            continue;
        }
        if !BASIC_KEYWORDS.contains(&token.as_str()) {
            warnings.push(ParseWarning::UnknownKeyword {
                keyword: token.clone(),
                suggestions: compute_suggestions(&token, &BASIC_KEYWORDS),
            });
        }
        tokens.push(token);
    }
    (tokens, warnings)
}

/// Evaluate a basic-mode token list into the display string.
pub fn evaluate_basic(tokens: &[String], ctx: &AttributeContext) -> String {
    let has = |keyword: &str| tokens.iter().any(|token| token == keyword);
    let show_zone = ctx.in_zone() || !has("do_not_show_not_home");
    let skip_street = has("place");

    let mut segments: Vec<String> = Vec::new();
    if has("do_not_reorder") {
        for token in tokens {
            push_token(&mut segments, token, ctx, show_zone, skip_street);
        }
    } else {
        for keyword in DEFAULT_ORDER {
            if has(keyword) {
                push_token(&mut segments, keyword, ctx, show_zone, skip_street);
            }
        }
    }

    if segments.is_empty() {
        for keyword in EMPTY_FALLBACK {
            if keyword != "zone" || show_zone {
                push_value(&mut segments, ctx.get(keyword));
            }
        }
    }

    segments.join(", ")
}

fn push_token(
    segments: &mut Vec<String>,
    token: &str,
    ctx: &AttributeContext,
    show_zone: bool,
    skip_street: bool,
) {
    match token {
        "do_not_show_not_home" | "do_not_reorder" => {}
        "zone" | "zone_name" => {
            if show_zone {
                push_value(segments, ctx.get(token));
            }
        }
        "place" => place_composite(segments, ctx),
        "street" | "street_number" if skip_street => {}
        _ => push_value(segments, ctx.get(&synonyms::canonical(token))),
    }
}

/// Expand the `place` keyword into its composite segments: name, category,
/// type, neighborhood, street number, street, each only when non-blank. The
/// name is skipped when it repeats the street, a category of literal "place"
/// and a type of literal "yes" carry no information and are skipped too.
fn place_composite(segments: &mut Vec<String>, ctx: &AttributeContext) {
    let name = ctx.get(fields::NAME);
    if !name.is_empty() && name != ctx.get(fields::STREET) {
        segments.push(name.to_string());
    }
    let category = ctx.get(fields::CATEGORY);
    if !category.is_empty() && !category.eq_ignore_ascii_case("place") {
        segments.push(category.to_string());
    }
    let place_type = ctx.get(fields::TYPE);
    if !place_type.is_empty() && !place_type.eq_ignore_ascii_case("yes") {
        segments.push(place_type.to_string());
    }
    push_value(segments, ctx.get(fields::NEIGHBORHOOD));
    push_value(segments, ctx.get(fields::STREET_NUMBER));
    push_value(segments, ctx.get(fields::STREET));
}

fn push_value(segments: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        segments.push(value.to_string());
    }
}
