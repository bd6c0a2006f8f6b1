//! Integration tests for the display-options expression parser.

use std::collections::BTreeSet;

use whereabouts::parser::{ParseWarning, Sign, parse_expression};

fn values(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn single_field() {
    let (list, warnings) = parse_expression("name");
    assert!(warnings.is_empty());
    assert_eq!(list.len(), 1);
    assert_eq!(list.nodes[0].canonical_name, "name");
    assert!(list.nodes[0].filter.is_none());
    assert!(list.nodes[0].fallback.is_none());
}

#[test]
fn comma_separated_fields() {
    let (list, warnings) = parse_expression("name, street, city");
    assert!(warnings.is_empty());
    let names: Vec<&str> = list
        .nodes
        .iter()
        .map(|node| node.canonical_name.as_str())
        .collect();
    assert_eq!(names, vec!["name", "street", "city"]);
}

#[test]
fn whitespace_is_trimmed() {
    let (list, _) = parse_expression("  name ,   city  ");
    assert_eq!(list.len(), 2);
    assert_eq!(list.nodes[0].canonical_name, "name");
    assert_eq!(list.nodes[1].canonical_name, "city");
}

#[test]
fn empty_input_yields_empty_list() {
    let (list, warnings) = parse_expression("");
    assert!(list.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn synonyms_fold_during_parsing() {
    let (list, _) = parse_expression("place_name, Postal_Code, street_ref, suburb");
    let names: Vec<&str> = list
        .nodes
        .iter()
        .map(|node| node.canonical_name.as_str())
        .collect();
    assert_eq!(names, vec!["name", "zip_code", "route_number", "postal_town"]);
}

#[test]
fn unrecognized_identifiers_are_preserved() {
    let (list, warnings) = parse_expression("leisure[sport]");
    assert!(warnings.is_empty());
    assert_eq!(list.nodes[0].canonical_name, "leisure");
}

// =============================================================================
// Depth-aware splitting
// =============================================================================

#[test]
fn commas_inside_nesting_do_not_split() {
    let (list, warnings) =
        parse_expression("type(-,motorway, category(-, highway, building)), city");
    assert!(warnings.is_empty());
    assert_eq!(list.len(), 2);
    assert_eq!(list.nodes[0].canonical_name, "type");
    assert_eq!(list.nodes[1].canonical_name, "city");

    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Exclude);
    assert_eq!(filter.self_values, values(&["motorway"]));
    assert_eq!(filter.sub_predicates.len(), 1);
    assert_eq!(filter.sub_predicates[0].target_field, "category");
    assert_eq!(filter.sub_predicates[0].sign, Sign::Exclude);
    assert_eq!(filter.sub_predicates[0].values, values(&["highway", "building"]));
}

#[test]
fn commas_inside_fallbacks_do_not_split() {
    let (list, _) = parse_expression("name[type, category], city");
    assert_eq!(list.len(), 2);
    let fallback = list.nodes[0].fallback.as_ref().unwrap();
    assert_eq!(fallback.len(), 2);
}

// =============================================================================
// Fallbacks
// =============================================================================

#[test]
fn nested_fallback_chain() {
    let (list, warnings) = parse_expression("name[type[category]]");
    assert!(warnings.is_empty());
    assert_eq!(list.len(), 1);

    let name = &list.nodes[0];
    assert_eq!(name.canonical_name, "name");
    let fallback = name.fallback.as_ref().unwrap();
    assert_eq!(fallback.len(), 1);

    let type_node = &fallback.nodes[0];
    assert_eq!(type_node.canonical_name, "type");
    let inner = type_node.fallback.as_ref().unwrap();
    assert_eq!(inner.nodes[0].canonical_name, "category");
}

#[test]
fn filter_and_fallback_in_either_order() {
    let (a, _) = parse_expression("name(museum)[type]");
    let (b, _) = parse_expression("name[type](museum)");
    assert_eq!(a.nodes[0].filter, b.nodes[0].filter);
    assert_eq!(a.nodes[0].fallback, b.nodes[0].fallback);
    assert!(a.nodes[0].filter.is_some());
    assert!(a.nodes[0].fallback.is_some());
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn include_is_the_default_sign() {
    let (list, _) = parse_expression("type(museum, park)");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Include);
    assert_eq!(filter.self_values, values(&["museum", "park"]));
}

#[test]
fn explicit_plus_sign_is_include() {
    let (a, _) = parse_expression("type(+, museum)");
    let (b, _) = parse_expression("type(museum)");
    assert_eq!(a.nodes[0].filter, b.nodes[0].filter);
}

#[test]
fn filter_values_are_lowercased() {
    let (list, _) = parse_expression("type(Museum, PARK)");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_values, values(&["museum", "park"]));
}

#[test]
fn sub_predicate_sign_defaults_to_include_independently() {
    let (a, _) = parse_expression("type(category(highway))");
    let (b, _) = parse_expression("type(category(+, highway))");
    assert_eq!(a, b);

    let filter = a.nodes[0].filter.as_ref().unwrap();
    assert!(filter.self_values.is_empty());
    assert_eq!(filter.sub_predicates[0].sign, Sign::Include);
}

#[test]
fn mixed_signs_stay_independent() {
    let (list, _) = parse_expression("type(-, motorway, category(highway))");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Exclude);
    assert_eq!(filter.sub_predicates[0].sign, Sign::Include);
}

#[test]
fn nested_sub_predicates_flatten_into_the_conjunction() {
    let (list, _) = parse_expression("type(-, motorway, category(-, highway, building(yes)))");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Exclude);
    assert_eq!(filter.self_values, values(&["motorway"]));
    assert_eq!(filter.sub_predicates.len(), 2);
    assert_eq!(filter.sub_predicates[0].target_field, "category");
    assert_eq!(filter.sub_predicates[0].values, values(&["highway"]));
    assert_eq!(filter.sub_predicates[1].target_field, "building");
    assert_eq!(filter.sub_predicates[1].sign, Sign::Include);
    assert_eq!(filter.sub_predicates[1].values, values(&["yes"]));
}

#[test]
fn sub_predicate_targets_fold_synonyms() {
    let (list, _) = parse_expression("name(place_category(museum))");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.sub_predicates[0].target_field, "category");
}

#[test]
fn later_signs_are_plain_literals() {
    let (list, _) = parse_expression("type(museum, -)");
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Include);
    assert_eq!(filter.self_values, values(&["museum", "-"]));
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn unclosed_bracket_truncates_with_warning() {
    let (list, warnings) = parse_expression("name[type");
    assert_eq!(
        warnings,
        vec![ParseWarning::UnbalancedBracket {
            context: "name[type".to_string()
        }]
    );
    let fallback = list.nodes[0].fallback.as_ref().unwrap();
    assert_eq!(fallback.nodes[0].canonical_name, "type");
}

#[test]
fn unclosed_paren_truncates_with_warning() {
    let (list, warnings) = parse_expression("type(-,motorway");
    assert_eq!(
        warnings,
        vec![ParseWarning::UnbalancedParen {
            context: "type(-,motorway".to_string()
        }]
    );
    let filter = list.nodes[0].filter.as_ref().unwrap();
    assert_eq!(filter.self_sign, Sign::Exclude);
    assert_eq!(filter.self_values, values(&["motorway"]));
}

#[test]
fn construct_without_field_name_is_dropped() {
    let (list, warnings) = parse_expression("(museum), city");
    assert_eq!(list.len(), 1);
    assert_eq!(list.nodes[0].canonical_name, "city");
    assert!(matches!(
        warnings.as_slice(),
        [ParseWarning::EmptyIdentifier { .. }]
    ));
}

#[test]
fn trailing_text_after_constructs_is_ignored() {
    let (list, warnings) = parse_expression("name[type]junk, city");
    assert_eq!(list.len(), 2);
    assert_eq!(list.nodes[0].canonical_name, "name");
    assert!(matches!(
        warnings.as_slice(),
        [ParseWarning::TrailingInput { .. }]
    ));
}

#[test]
fn parsing_never_fails_on_garbage() {
    for raw in ["]][[", "a(b(c(d", "[,,](", "name)]()", ",,,(", "(((("] {
        let (_, _) = parse_expression(raw);
    }
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn equal_inputs_parse_to_equal_trees() {
    let raw = "zone_name[name_no_dupe(-, motorway)[type]], city";
    let (a, warnings_a) = parse_expression(raw);
    let (b, warnings_b) = parse_expression(raw);
    assert_eq!(a, b);
    assert_eq!(warnings_a, warnings_b);
}
