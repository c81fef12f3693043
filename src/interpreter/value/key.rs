use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// Structural, hashable mirror of a [`Value`].
///
/// `Value` holds `f64`s and insertion-ordered nodes, so it is neither `Eq`
/// nor `Hash`. `ValueKey` wraps numbers in [`OrderedFloat`] and stores node
/// entries sorted by key, which makes two nodes with the same entries equal
/// regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKey {
    /// Mirrors [`Value::Null`].
    Null,
    /// Mirrors [`Value::Boolean`].
    Boolean(bool),
    /// Mirrors [`Value::Number`].
    Number(OrderedFloat<f64>),
    /// Mirrors [`Value::Text`].
    Text(String),
    /// Mirrors [`Value::List`].
    List(Vec<Self>),
    /// Mirrors [`Value::Node`], with entries sorted by key.
    Node(Vec<(String, Self)>),
}

impl From<&Value> for ValueKey {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Boolean(b) => Self::Boolean(*b),
            Value::Number(n) => Self::Number(OrderedFloat(*n)),
            Value::Text(text) => Self::Text(text.clone()),
            Value::List(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Node(node) => {
                let mut entries: Vec<(String, Self)> =
                    node.iter()
                        .map(|(key, value)| (key.clone(), Self::from(value)))
                        .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                Self::Node(entries)
            },
        }
    }
}
