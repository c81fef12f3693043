/// Operator dispatch.
///
/// Checks operand counts, routes each operator to its implementation and
/// retries with broadcasting when the direct attempt hits a type mismatch.
pub mod core;
/// Numeric and comparison operators.
///
/// Coerces both operands to numbers and applies `+ - * / %` or one of the
/// comparisons.
pub mod numeric;
/// Set operators on lists.
///
/// Implements `union`, `intersection` and `dot`, and the unary aggregates
/// `sum`, `sigma`, `pi` and `cardinality`.
pub mod set;
/// Broadcasting over lists.
///
/// Distributes a scalar across the elements of a list, or pairs the
/// elements of two equally long lists.
pub mod broadcast;
