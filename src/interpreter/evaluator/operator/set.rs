use std::collections::HashSet;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, key::ValueKey},
    },
    util::dedup::unique_values,
};

impl Context {
    /// Combines two values into one list without duplicates.
    ///
    /// List operands contribute their elements, scalar operands contribute
    /// themselves. Nulls are dropped and each value keeps the position of
    /// its first appearance.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let left = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
    ///
    /// assert_eq!(Context::union(&left, &Value::from(1.0)), left);
    /// assert_eq!(Context::union(&Value::Null, &Value::from(3.0)),
    ///            Value::from(vec![Value::from(3.0)]));
    /// ```
    #[must_use]
    pub fn union(left: &Value, right: &Value) -> Value {
        let items = [left, right].into_iter()
                                 .flat_map(|operand| match operand {
                                     Value::List(items) => items.clone(),
                                     other => vec![other.clone()],
                                 })
                                 .filter(|value| !value.is_null());

        Value::List(unique_values(items))
    }

    /// Keeps the elements of `left` that also occur in `right`, in the order
    /// of `left`.
    ///
    /// # Errors
    /// `EvalError::TypeMismatch` if either operand is not a list.
    pub fn intersection(left: &Value, right: &Value) -> EvalResult<Value> {
        let members: HashSet<ValueKey> = right.as_list()?.iter().map(ValueKey::from).collect();

        Ok(Value::List(left.as_list()?
                           .iter()
                           .filter(|item| members.contains(&ValueKey::from(*item)))
                           .cloned()
                           .collect()))
    }

    /// Multiplies two equally long lists element by element and sums the
    /// products.
    ///
    /// # Errors
    /// `EvalError::TypeMismatch` if an operand is not a list, an element is
    /// not numeric or the lengths differ.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let a = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
    /// let b = Value::from(vec![Value::from(3.0), Value::from(4.0)]);
    ///
    /// assert_eq!(Context::dot(&a, &b), Ok(Value::from(11.0)));
    /// ```
    pub fn dot(left: &Value, right: &Value) -> EvalResult<Value> {
        let (a, b) = (left.as_list()?, right.as_list()?);
        if a.len() != b.len() {
            return Err(EvalError::TypeMismatch { details: format!("cannot pair a list of {} \
                                                                   elements with one of {}",
                                                                  a.len(),
                                                                  b.len()) });
        }

        a.iter()
         .zip(b)
         .try_fold(0.0, |acc, (x, y)| -> EvalResult<f64> {
             Ok(acc + x.as_number()? * y.as_number()?)
         })
         .map(Value::Number)
    }

    /// Adds up the elements of a list.
    ///
    /// # Errors
    /// `EvalError::TypeMismatch` if the operand is not a list of numbers.
    pub fn sum(operand: &Value) -> EvalResult<Value> {
        operand.as_list()?
               .iter()
               .try_fold(0.0, |acc, item| -> EvalResult<f64> { Ok(acc + item.as_number()?) })
               .map(Value::Number)
    }

    /// Multiplies the elements of a list into an accumulator that starts at
    /// zero, so every product is zero.
    ///
    /// # Errors
    /// `EvalError::TypeMismatch` if the operand is not a list of numbers.
    pub fn product(operand: &Value) -> EvalResult<Value> {
        operand.as_list()?
               .iter()
               .try_fold(0.0, |acc, item| -> EvalResult<f64> { Ok(acc * item.as_number()?) })
               .map(Value::Number)
    }

    /// Counts the elements of a list, the entries of a node or the
    /// characters of a text.
    ///
    /// # Errors
    /// `EvalError::TypeMismatch` for any other value.
    #[allow(clippy::cast_precision_loss)]
    pub fn cardinality(operand: &Value) -> EvalResult<Value> {
        let count = match operand {
            Value::List(items) => items.len(),
            Value::Node(node) => node.len(),
            Value::Text(text) => text.chars().count(),
            other => {
                return Err(EvalError::TypeMismatch { details: format!("cannot count the \
                                                                       elements of {} {other}",
                                                                      other.type_name()) });
            },
        };

        Ok(Value::Number(count as f64))
    }
}
