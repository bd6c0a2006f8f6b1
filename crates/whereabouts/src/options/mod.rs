//! Parsed display options: mode selection, parse-once storage, rendering.

mod cache;
mod id;

pub use cache::OptionsCache;
pub use id::OptionsId;

use serde::{Deserialize, Serialize};

use crate::eval::{self, AttributeContext};
use crate::parser::{self, ExpressionList, ParseWarning};

/// Which engine a parsed options string dispatches to.
///
/// The decision is a pure function of the raw string's character set: any
/// `[` or `(` selects the expression engine, everything else the legacy
/// keyword concatenator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Bracket/paren expression syntax, walked by the expression evaluator.
    Expression(ExpressionList),
    /// Plain keyword list, joined by the legacy concatenator.
    Basic(Vec<String>),
}

/// A parsed `display_options` string.
///
/// Parsing happens once; the result is immutable pure data that can be
/// rendered against any number of attribute contexts as updates arrive.
///
/// # Example
///
/// ```
/// use whereabouts::{AttributeContext, DisplayOptions, attrs};
///
/// let options = DisplayOptions::parse("name[type[category]], city");
/// let ctx = AttributeContext::builder()
///     .attrs(attrs! { "category" => "museum", "city" => "Boston" })
///     .build();
///
/// assert_eq!(options.render(&ctx), "museum, Boston");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    raw: String,
    id: OptionsId,
    mode: Mode,
    warnings: Vec<ParseWarning>,
}

impl DisplayOptions {
    /// Parse an options string, selecting the engine by its character set.
    ///
    /// Never fails: structural problems are repaired and recorded in
    /// [`warnings`](Self::warnings).
    pub fn parse(raw: &str) -> Self {
        let (mode, warnings) = if raw.contains('[') || raw.contains('(') {
            let (list, warnings) = parser::parse_expression(raw);
            (Mode::Expression(list), warnings)
        } else {
            let (tokens, warnings) = eval::basic::tokenize(raw);
            (Mode::Basic(tokens), warnings)
        };
        Self {
            raw: raw.to_string(),
            id: OptionsId::from_options(raw),
            mode,
            warnings,
        }
    }

    /// Render the display string for one attribute context.
    pub fn render(&self, ctx: &AttributeContext) -> String {
        match &self.mode {
            Mode::Expression(list) => eval::evaluate(list, ctx),
            Mode::Basic(tokens) => eval::evaluate_basic(tokens, ctx),
        }
    }

    /// The raw options string as authored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Stable identity of the raw options string.
    pub fn id(&self) -> OptionsId {
        self.id
    }

    /// The selected mode and its parsed form.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Non-fatal problems found while parsing.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Whether the expression engine was selected.
    pub fn is_expression(&self) -> bool {
        matches!(self.mode, Mode::Expression(_))
    }
}
