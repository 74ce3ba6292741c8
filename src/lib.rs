//! # treemath
//!
//! treemath is a small arithmetic expression calculator. It scans a flat
//! expression string into tokens, grows the tokens one at a time into a
//! binary tree whose shape encodes operator precedence, and reduces that
//! tree to a single `f64` result.
//!
//! The parser is deliberately not a grammar-driven one: each token is
//! spliced into the existing tree by comparing precedences locally, so the
//! finished tree encodes conventional precedence without a separate
//! parsing pass.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, tree::ExprTree};

/// Provides unified error types for building and evaluating expressions.
///
/// This module defines all errors that can be raised while a tree is built
/// or reduced. It standardizes error reporting and carries the offending
/// operator symbol where one exists.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the operator table, the tree
/// builder, and the evaluator to provide a complete pipeline from an
/// expression string to a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, operator table, tree builder,
///   and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates an expression string, returning the numeric result.
///
/// The expression alphabet is `0-9`, `(`, `)` and the operator characters
/// `+ - * /`. Adjacent operator characters fuse into composite operators,
/// so `3*-2` multiplies by a negated operand. The tree is built and
/// consumed inside the call; nothing is retained between calls.
///
/// # Errors
/// Returns [`error::ExpressionError::InvalidOperator`] when the expression
/// contains an operator symbol the operator table does not know, and
/// [`error::ExpressionError::NoResult`] when the input does not reduce to a
/// single number.
///
/// # Examples
/// ```
/// use treemath::solve_expression;
///
/// assert_eq!(solve_expression("3**2+6*2-12").unwrap(), 9.0);
/// assert_eq!(solve_expression("(2+3)*4").unwrap(), 20.0);
/// assert!(solve_expression("3%2").is_err());
/// ```
pub fn solve_expression(expression: &str) -> error::ExprResult<f64> {
    let mut tree = ExprTree::parse(expression)?;
    evaluator::solve(&mut tree)
}
