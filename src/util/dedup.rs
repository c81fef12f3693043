use indexmap::{IndexMap, IndexSet};

use crate::interpreter::value::{core::Value, key::ValueKey};

/// An insertion-ordered set of canonical paths.
///
/// Extending a `PathSet` is the order-preserving set union used to merge the
/// `referenced` and `output` metadata of sub-evaluations: the first
/// appearance of a path fixes its position and later duplicates are dropped.
pub type PathSet = IndexSet<String>;

/// Removes duplicate values while keeping the first appearance of each.
///
/// Values are compared structurally. Numbers compare by value, and nodes
/// compare independently of key order.
///
/// # Example
/// ```
/// use nodeval::{interpreter::value::core::Value, util::dedup::unique_values};
///
/// let values = vec![Value::from(2.0), Value::from(1.0), Value::from(2.0)];
///
/// assert_eq!(unique_values(values),
///            vec![Value::from(2.0), Value::from(1.0)]);
/// ```
pub fn unique_values<I>(values: I) -> Vec<Value>
    where I: IntoIterator<Item = Value>
{
    let mut seen: IndexMap<ValueKey, Value> = IndexMap::new();

    for value in values {
        seen.entry(ValueKey::from(&value)).or_insert(value);
    }

    seen.into_values().collect()
}
