/// The evaluator module resolves formulas against a system.
///
/// The evaluator classifies a formula as a literal, a list literal, a path
/// reference or a prefix-notation operator expression, evaluates its parts
/// recursively and reports the outcome together with the paths it read and
/// wrote and the operators it used.
///
/// # Responsibilities
/// - Classifies formulas and dispatches on the resulting form.
/// - Follows path references while detecting reference loops.
/// - Applies operators, broadcasting over lists where needed.
/// - Threads the system through assignments so later operands observe
///   earlier writes.
pub mod evaluator;
/// The lexer module tokenizes the operand section of prefix expressions.
///
/// Formulas are whitespace separated. The lexer yields parenthesized groups
/// and bare operand words, skipping separating spaces and commas.
pub mod lexer;
/// The system module holds the graph of named nodes.
///
/// # Responsibilities
/// - Loads a system from JSON.
/// - Resolves dotted paths, including the `this` and `parent` navigation
///   keywords, to their canonical form.
/// - Writes values at resolved paths.
pub mod system;
/// The value module defines the data stored in nodes.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Node` map.
/// - Coerces values for the numeric and set operators.
/// - Provides hashable keys for structural deduplication.
pub mod value;
