//! Display-options expression parser.
//!
//! This module provides parsing for the bracket/paren options syntax. The
//! parser produces an AST that can be used for evaluation or external
//! tooling, and never fails: malformed input is repaired locally and
//! reported through [`ParseWarning`] values.

pub mod ast;
pub mod error;
mod expression;

pub use ast::{ExpressionList, FieldNode, FilterSpec, Predicate, Sign};
pub use error::{ParseWarning, compute_suggestions};
pub use expression::parse_expression;
