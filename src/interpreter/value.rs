/// Runtime values.
///
/// Declares the tagged `Value` stored in nodes and produced by evaluation,
/// along with coercions used by the operators and conversions from plain
/// Rust values.
pub mod core;
/// Hashable value keys.
///
/// Defines `ValueKey`, a structural, hashable mirror of `Value` used for
/// membership tests and deduplication in the set operators.
pub mod key;
