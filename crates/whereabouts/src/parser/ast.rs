//! Public AST types for display-options expressions.
//!
//! These types are public to enable external tooling (inspectors, linters).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An ordered sequence of field nodes; insertion order defines output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionList {
    pub nodes: Vec<FieldNode>,
}

impl ExpressionList {
    /// Whether the list contains no field nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of top-level field nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// One field reference: a canonical name, an optional filter gating its
/// inclusion, and an optional fallback expression evaluated when the field
/// resolves to blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNode {
    /// Canonical field name, already folded through the synonym table.
    pub canonical_name: String,
    pub filter: Option<FilterSpec>,
    pub fallback: Option<ExpressionList>,
}

/// Whether a predicate includes or excludes its listed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Include,
    Exclude,
}

/// Filter attached to a field node: one self-predicate over the owning
/// field's value plus any number of predicates over other fields, ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Sign of the self-predicate. Ignored when `self_values` is empty.
    pub self_sign: Sign,
    /// Literal values compared against the owning field. Empty means the
    /// filter has no self condition.
    pub self_values: BTreeSet<String>,
    /// Conditions on other fields, all of which must pass.
    pub sub_predicates: Vec<Predicate>,
}

impl FilterSpec {
    /// Whether this filter carries no conditions at all.
    ///
    /// The grammar should not produce such a filter, but a malformed options
    /// string can; it evaluates to true.
    pub fn is_empty(&self) -> bool {
        self.self_values.is_empty() && self.sub_predicates.is_empty()
    }
}

/// A single condition on another field's raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Canonical name of the field this condition reads.
    pub target_field: String,
    pub sign: Sign,
    pub values: BTreeSet<String>,
}
