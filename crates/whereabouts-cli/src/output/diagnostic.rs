//! Miette diagnostic wrapper for display-options parse warnings.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use whereabouts::ParseWarning;

/// A miette-compatible diagnostic for a parse warning, with the offending
/// part of the options string underlined.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(whereabouts::options), severity(Warning))]
pub struct OptionsDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl OptionsDiagnostic {
    /// Create a diagnostic from a warning with the raw options string as
    /// source context.
    pub fn from_warning(raw: &str, warning: &ParseWarning) -> Self {
        let needle = match warning {
            ParseWarning::UnbalancedBracket { context }
            | ParseWarning::UnbalancedParen { context }
            | ParseWarning::EmptyIdentifier { context }
            | ParseWarning::TrailingInput { context } => context.as_str(),
            ParseWarning::UnknownKeyword { keyword, .. } => keyword.as_str(),
        };

        let offset = raw.find(needle).unwrap_or(0);
        // Clamp to the source length so miette never points out of bounds.
        let offset = offset.min(raw.len());
        let length = needle.len().clamp(1, raw.len().saturating_sub(offset).max(1));

        OptionsDiagnostic {
            src: NamedSource::new("display_options", raw.to_string()),
            span: (offset, length).into(),
            message: warning.to_string(),
        }
    }
}
