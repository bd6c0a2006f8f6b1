//! Attribute context: the flat, read-only field map for one evaluation pass.
//!
//! The host assembles one context per update from the reverse-geocode
//! response, the tracked entity's zone state, and its travel state. Lookup is
//! total: absent and empty values are the same blank, so downstream logic
//! never branches on presence.

use std::collections::{BTreeMap, HashMap};

use bon::bon;

use crate::synonyms::{self, fields};

/// Zone states that mean "not inside any zone".
pub const AWAY_SENTINELS: [&str; 4] = ["not_home", "away", "notset", "not_set"];

/// Fields checked when deciding whether the place name merely repeats
/// another attribute (the `name_no_dupe` derivation and the formatted-place
/// builder share this list).
pub(crate) const NAME_DUPE_FIELDS: [&str; 6] = [
    fields::STREET,
    fields::STREET_NUMBER,
    fields::CITY,
    fields::CITY_CLEAN,
    fields::POSTAL_TOWN,
    fields::ZONE_NAME,
];

/// Resolved attributes for one tracked entity at one point in time.
///
/// Immutable once built. Keys are canonical field names; aliases are folded
/// and values trimmed at construction. Derived fields are computed here once
/// per context: `city_clean` from `city`, and the `driving` marker from the
/// driving flag.
///
/// # Example
///
/// ```
/// use whereabouts::{AttributeContext, attrs};
///
/// let ctx = AttributeContext::builder()
///     .attrs(attrs! { "place_name" => "Fenway Park", "city" => "Boston" })
///     .build();
///
/// assert_eq!(ctx.get("name"), "Fenway Park");
/// assert_eq!(ctx.get("county"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeContext {
    attrs: BTreeMap<String, String>,
}

#[bon]
impl AttributeContext {
    /// Build a context from host-supplied attributes.
    #[builder]
    pub fn new(
        /// Field names (canonical or alias) mapped to their resolved values.
        #[builder(default)]
        attrs: HashMap<String, String>,
        /// Whether the tracked entity is currently driving.
        #[builder(default)]
        driving: bool,
        /// Literal contributed by the `driving` field when the flag is set.
        #[builder(default = String::from("Driving"))]
        driving_marker: String,
    ) -> Self {
        let mut entries: Vec<(String, String)> = attrs.into_iter().collect();
        entries.sort();

        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let value = value.trim().to_string();
            if !value.is_empty() {
                map.insert(synonyms::canonical(&key), value);
            }
        }
        if driving {
            map.insert(fields::DRIVING.to_string(), driving_marker);
        }
        let clean = map.get(fields::CITY).map(|city| clean_city(city));
        if let Some(clean) = clean
            && !clean.is_empty()
        {
            map.insert(fields::CITY_CLEAN.to_string(), clean);
        }
        Self { attrs: map }
    }
}

impl AttributeContext {
    /// Total lookup: the field's value, or blank (`""`) when absent.
    ///
    /// Field names are matched case-insensitively and through the synonym
    /// table, so `get("Place_Name")` and `get("name")` agree.
    pub fn get(&self, field: &str) -> &str {
        if let Some(value) = self.attrs.get(field) {
            return value;
        }
        self.attrs
            .get(&synonyms::canonical(field))
            .map_or("", String::as_str)
    }

    /// Whether the field is absent or empty.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_empty()
    }

    /// Whether the tracked entity is inside a real zone, as opposed to an
    /// away sentinel or no zone at all.
    pub fn in_zone(&self) -> bool {
        let zone = self.get(fields::ZONE);
        !zone.is_empty() && !AWAY_SENTINELS.contains(&zone.to_ascii_lowercase().as_str())
    }

    /// Whether the driving flag was set when the context was built.
    pub fn is_driving(&self) -> bool {
        !self.is_blank(fields::DRIVING)
    }
}

/// Strip a standalone "Township" token and rewrite "City of X" to "X City".
fn clean_city(city: &str) -> String {
    let cleaned = city.replace(" Township", "");
    let cleaned = cleaned.trim();
    match cleaned.strip_prefix("City of ") {
        Some(rest) if !rest.trim().is_empty() => format!("{} City", rest.trim()),
        _ => cleaned.to_string(),
    }
}
