//! # nodeval
//!
//! nodeval evaluates prefix-notation formulas stored in a hierarchical graph
//! of named nodes. A formula refers to other nodes by relative path, applies
//! numeric and set operators, broadcasts over lists and may assign values
//! back into the graph. Every evaluation reports the value it computed, the
//! paths it read and wrote, and whether the graph held enough data to compute
//! it.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{Context, Evaluation},
    system::core::System,
    value::core::Value,
};

/// Defines the operators of the formula language.
///
/// This module declares the `Operator` enum together with the written symbol
/// and operand shape of every operator.
///
/// # Responsibilities
/// - Maps operator symbols such as `+` or `union` to `Operator` values.
/// - Describes how many operands each operator consumes.
/// - Tells which names are reserved because they spell an operator.
pub mod ast;
/// Provides the error types for evaluation and system loading.
///
/// Evaluation errors never abort an evaluation. They are logged, attached to
/// the result as diagnostics and turn the result into one that is not well
/// defined. System errors are ordinary failures of reading or parsing a
/// system description.
///
/// # Responsibilities
/// - Defines one variant per failure mode with the data needed to report it.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Ties together the system, its values and the evaluator.
///
/// # Responsibilities
/// - Stores and navigates the graph of nodes.
/// - Tokenizes operand lists.
/// - Classifies and evaluates formulas, threading the system through
///   assignments.
pub mod interpreter;
/// General helpers shared by the resolver and the evaluator.
///
/// # Responsibilities
/// - Scans matched bracket pairs.
/// - Deduplicates paths and values while keeping first appearances.
pub mod util;

/// Evaluates the formula at `node` with default settings.
///
/// `expr`, when given, is evaluated at `node` in place of the value stored
/// there. The updated system is available on the returned evaluation.
///
/// # Examples
/// ```
/// use nodeval::{
///     evaluate,
///     interpreter::{system::core::System, value::core::Value},
/// };
///
/// let system = System::new().with("tank", [("level", 3.0), ("limit", 9.0)]);
///
/// let evaluation = evaluate(system, "tank", Some("= level (* level 2)"));
///
/// assert!(evaluation.well_defined);
/// assert_eq!(evaluation.value, Some(Value::from(6.0)));
/// assert_eq!(evaluation.system.resolve("tank.level").unwrap().value, &Value::from(6.0));
///
/// // An unknown word is returned as written, but not well defined.
/// let evaluation = evaluate(evaluation.system, "tank", Some("volume"));
/// assert!(!evaluation.well_defined);
/// assert_eq!(evaluation.value, Some(Value::from("volume")));
/// ```
#[must_use]
pub fn evaluate(system: System, node: &str, expr: Option<&str>) -> Evaluation {
    Context::new().evaluate(system, node, expr.map(Value::from))
}
