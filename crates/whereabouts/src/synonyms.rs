//! Synonym resolution for display-option identifiers.
//!
//! Authors write options against a loose vocabulary (`place_name`, `region`,
//! `neighbourhood`, ...). Everything downstream of the parser works on one
//! canonical lower-case name per field; this module is the only place that
//! knows the accepted aliases.

/// Canonical attribute names used throughout the engine.
pub mod fields {
    pub const NAME: &str = "name";
    pub const NAME_NO_DUPE: &str = "name_no_dupe";
    pub const TYPE: &str = "type";
    pub const CATEGORY: &str = "category";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const STREET: &str = "street";
    pub const STREET_NUMBER: &str = "street_number";
    pub const ROUTE_NUMBER: &str = "route_number";
    pub const CITY: &str = "city";
    pub const CITY_CLEAN: &str = "city_clean";
    pub const POSTAL_TOWN: &str = "postal_town";
    pub const COUNTY: &str = "county";
    pub const STATE: &str = "state";
    pub const STATE_ABBR: &str = "state_abbr";
    pub const ZIP_CODE: &str = "zip_code";
    pub const COUNTRY: &str = "country";
    pub const FORMATTED_ADDRESS: &str = "formatted_address";
    pub const ZONE: &str = "zone";
    pub const ZONE_NAME: &str = "zone_name";
    pub const DRIVING: &str = "driving";
}

/// Resolve an identifier to its canonical field name.
///
/// Total function: matching is case-insensitive, and identifiers with no
/// registered alias map to themselves (lower-cased) so they can still be
/// looked up in the attribute context, typically resolving to blank.
///
/// # Example
///
/// ```
/// use whereabouts::synonyms::canonical;
///
/// assert_eq!(canonical("Place_Name"), "name");
/// assert_eq!(canonical("postal_code"), "zip_code");
/// assert_eq!(canonical("leisure"), "leisure");
/// ```
pub fn canonical(identifier: &str) -> String {
    let folded = identifier.trim().to_ascii_lowercase();
    let mapped = match folded.as_str() {
        "place_name" => fields::NAME,
        "place_name_no_dupe" => fields::NAME_NO_DUPE,
        "place_type" => fields::TYPE,
        "place_category" => fields::CATEGORY,
        "place_neighbourhood" | "neighbourhood" | "place_neighborhood" => fields::NEIGHBORHOOD,
        "house_number" => fields::STREET_NUMBER,
        "street_ref" => fields::ROUTE_NUMBER,
        "region" => fields::STATE,
        "postal_code" => fields::ZIP_CODE,
        "borough" | "suburb" => fields::POSTAL_TOWN,
        _ => return folded,
    };
    mapped.to_string()
}
