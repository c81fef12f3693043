/// Matched-pair scanning.
///
/// Splits a string that starts with `(`, `[` or `{` into the bracketed span
/// and whatever follows it. Used to delimit parenthesized operands and list
/// literals.
pub mod brackets;
/// Order-preserving deduplication.
///
/// Provides the insertion-ordered path sets carried on evaluation results and
/// the value deduplication used by the set operators.
pub mod dedup;
