//! Fixed "formatted place" composite.
//!
//! Unlike the options-driven engines, this builder composes one opinionated
//! summary of the current place straight from the attribute context: zone
//! name while inside a zone, otherwise a driving marker, a place
//! description, and the city/state tail.

use crate::eval::context::{AttributeContext, NAME_DUPE_FIELDS};
use crate::synonyms::fields;

/// Compose the fixed formatted-place string for one context.
///
/// Inside a real zone this is just the zone name. Away from home it is, in
/// order and each only when non-blank: the driving marker; the place name
/// (or, when the name is blank or repeats another attribute, a description
/// built from type/category, street, and neighborhood); the cleaned city,
/// city, or county; and the state abbreviation. Segments are joined with
/// `", "` and interior whitespace is collapsed.
pub fn formatted_place(ctx: &AttributeContext) -> String {
    let mut parts: Vec<String> = Vec::new();
    if ctx.in_zone() {
        push(&mut parts, ctx.get(fields::ZONE_NAME));
    } else {
        if ctx.is_driving() {
            push(&mut parts, ctx.get(fields::DRIVING));
        }
        if use_place_name(ctx) {
            push(&mut parts, ctx.get(fields::NAME));
        } else {
            push_type_or_category(&mut parts, ctx);
            push_street(&mut parts, ctx);
            push_neighborhood_if_house(&mut parts, ctx);
        }
        if !ctx.is_blank(fields::CITY_CLEAN) {
            push(&mut parts, ctx.get(fields::CITY_CLEAN));
        } else if !ctx.is_blank(fields::CITY) {
            push(&mut parts, ctx.get(fields::CITY));
        } else {
            push(&mut parts, ctx.get(fields::COUNTY));
        }
        push(&mut parts, ctx.get(fields::STATE_ABBR));
    }
    collapse_whitespace(&parts.join(", "))
}

/// The place name is shown directly unless it is blank or merely repeats
/// another attribute (street, city, zone name, ...).
fn use_place_name(ctx: &AttributeContext) -> bool {
    let name = ctx.get(fields::NAME);
    !name.is_empty() && !NAME_DUPE_FIELDS.iter().any(|field| ctx.get(field) == name)
}

/// Describe the place by its type, falling back to its category. Highways
/// are described by their street instead, and an "unclassified" type carries
/// no information.
fn push_type_or_category(parts: &mut Vec<String>, ctx: &AttributeContext) {
    let category = ctx.get(fields::CATEGORY);
    let place_type = ctx.get(fields::TYPE);
    let highway = category.eq_ignore_ascii_case("highway");
    if !place_type.is_empty() && !place_type.eq_ignore_ascii_case("unclassified") && !highway {
        let cleaned = title_case(place_type)
            .replace("Proposed", "")
            .replace("Construction", "");
        push(parts, &cleaned);
    } else if !category.is_empty() && !highway {
        push(parts, &title_case(category));
    }
}

/// Street line: prefer the route number on motorway/trunk highways (or when
/// the street itself is blank), prefixed with the street number when present.
fn push_street(parts: &mut Vec<String>, ctx: &AttributeContext) {
    let street = ctx.get(fields::STREET);
    let route = ctx.get(fields::ROUTE_NUMBER);
    let motorway = ctx.get(fields::CATEGORY).eq_ignore_ascii_case("highway")
        && matches!(
            ctx.get(fields::TYPE).to_ascii_lowercase().as_str(),
            "motorway" | "trunk"
        );
    let chosen = if street.is_empty() || (motorway && !route.is_empty()) {
        route
    } else {
        street
    };
    if chosen.is_empty() {
        return;
    }
    let number = ctx.get(fields::STREET_NUMBER);
    if number.is_empty() {
        parts.push(chosen.trim().to_string());
    } else {
        parts.push(format!("{} {}", number.trim(), chosen.trim()));
    }
}

fn push_neighborhood_if_house(parts: &mut Vec<String>, ctx: &AttributeContext) {
    if ctx.get(fields::TYPE).eq_ignore_ascii_case("house") {
        push(parts, ctx.get(fields::NEIGHBORHOOD));
    }
}

fn push(parts: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        parts.push(value.to_string());
    }
}

/// Uppercase the first letter of each whitespace-separated word.
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn collapse_whitespace(value: &str) -> String {
    let mut out = value.replace('\n', " ");
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{collapse_whitespace, title_case};

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("residential"), "Residential");
        assert_eq!(title_case("rest area"), "Rest Area");
        assert_eq!(title_case("ALL CAPS"), "All Caps");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn collapse_whitespace_folds_runs() {
        assert_eq!(collapse_whitespace("a,  b\n c"), "a, b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
