/// Core evaluation logic and context management.
///
/// Contains the `Context`, the `Evaluation` result record and the recursive
/// entry point that resolves the node, picks the formula and dispatches on
/// its form.
pub mod core;

/// Formula classification.
///
/// Decides, in strict priority order, whether a formula is a literal, an
/// escaped text, a boolean, a number, a list literal, a path reference or a
/// prefix expression.
pub mod classify;

/// List literal evaluation.
///
/// Evaluates each element of a list literal at the same node and merges the
/// results positionally.
pub mod list;

/// Path reference evaluation.
///
/// Moves focus to the referenced node, evaluates what is stored there and
/// records the one-hop dependency.
pub mod reference;

/// Prefix expression evaluation.
///
/// Walks the operands of `op a b ...`, tracks assignment targets, merges
/// dependency metadata and applies the operator.
pub mod prefix;

/// Operator application.
///
/// Applies operators to evaluated operands, retrying with broadcasting when
/// a list shows up where a scalar was expected.
pub mod operator;
