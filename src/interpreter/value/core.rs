use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// A node: an insertion-ordered mapping from identifiers to values.
pub type Node = IndexMap<String, Value>;

/// Represents a value stored in a system or produced by evaluation.
///
/// Any value may itself be a [`Value::Node`], so a system is an arbitrarily
/// nested tree. Text values are formulas until evaluation proves otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absence of a value. Fills the position of a list element whose
    /// evaluation produced nothing.
    Null,
    /// A boolean, produced by the boolean literals and the comparison
    /// operators.
    Boolean(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// Text. Either a formula, an escaped `//` literal or an unresolved
    /// symbol.
    Text(String),
    /// An ordered sequence of values.
    List(Vec<Self>),
    /// A nested node.
    Node(Node),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Self::Node(v)
    }
}

impl<K: Into<String>, V: Into<Self>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Node(entries.into_iter()
                          .map(|(key, value)| (key.into(), value.into()))
                          .collect())
    }
}

impl Value {
    /// Coerces the value to a number.
    ///
    /// Numbers are returned as-is, booleans become `1` or `0` and text is
    /// parsed after trimming surrounding whitespace. Lists, nodes and null
    /// cannot be coerced.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric value.
    /// - `Err(EvalError::TypeMismatch)`: If the value is not numeric.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(true).as_number().unwrap(), 1.0);
    /// assert_eq!(Value::from(" 2.5 ").as_number().unwrap(), 2.5);
    /// assert!(Value::from(vec![Value::from(1.0)]).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(b) => Ok(f64::from(u8::from(*b))),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                                                   EvalError::TypeMismatch { details: format!("expected a number, found text '{text}'") }
                                               }),
            _ => Err(EvalError::TypeMismatch { details: format!("expected a number, found {} {self}",
                                                                self.type_name()) }),
        }
    }

    /// Borrows the elements of a list.
    ///
    /// # Returns
    /// - `Ok(&[Value])`: If the value is a list.
    /// - `Err(EvalError::TypeMismatch)`: Otherwise.
    pub fn as_list(&self) -> EvalResult<&[Self]> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(EvalError::TypeMismatch { details: format!("expected a list, found {} {self}",
                                                                self.type_name()) }),
        }
    }

    /// Returns the name of this value's variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Node(_) => "node",
        }
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Node(node) => {
                write!(f, "{{")?;
                for (index, (key, value)) in node.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
