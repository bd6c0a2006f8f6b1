pub mod eval;
pub mod formatter;
pub mod options;
pub mod parser;
pub mod synonyms;

pub use eval::{AWAY_SENTINELS, AttributeContext, evaluate, evaluate_basic};
pub use formatter::formatted_place;
pub use options::{DisplayOptions, Mode, OptionsCache, OptionsId};
pub use parser::{
    ExpressionList, FieldNode, FilterSpec, ParseWarning, Predicate, Sign, compute_suggestions,
    parse_expression,
};

/// Creates a `HashMap<String, String>` of attribute key-value pairs.
///
/// Keys and values are converted via `ToString`, so string literals can be
/// passed directly.
///
/// # Example
///
/// ```
/// use whereabouts::attrs;
///
/// let a = attrs! { "name" => "Fenway Park", "city" => "Boston" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["name"], "Fenway Park");
/// ```
#[macro_export]
macro_rules! attrs {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert(
                    ::std::string::ToString::to_string(&$key),
                    ::std::string::ToString::to_string(&$value),
                );
            )+
            map
        }
    };
}
