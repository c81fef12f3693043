use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies a unary operator to each element of a list operand.
    ///
    /// # Example
    /// ```
    /// use nodeval::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let rows = Value::from(vec![Value::from(vec![Value::from(1.0), Value::from(2.0)]),
    ///                             Value::from(vec![Value::from(3.0)])]);
    ///
    /// assert_eq!(Context::broadcast_unary(Operator::Sum, &rows),
    ///            Ok(Value::from(vec![Value::from(3.0), Value::from(3.0)])));
    /// ```
    pub fn broadcast_unary(operator: Operator, operand: &Value) -> EvalResult<Value> {
        operand.as_list()?
               .iter()
               .map(|item| Self::apply_unary(operator, item))
               .collect::<EvalResult<Vec<_>>>()
               .map(Value::List)
    }

    /// Applies a binary operator across list operands.
    ///
    /// - List with list: elements are paired by index. Both lists must have
    ///   the same length.
    /// - List with scalar, either way round: the scalar is paired with every
    ///   element.
    /// - Scalar with scalar: the operator is applied directly.
    ///
    /// Only one level of nesting is unpacked; the paired elements are handed
    /// to the operator as they are.
    ///
    /// # Parameters
    /// - `operator`: The binary operator to apply.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `Value::List` of results when either operand is a list, otherwise
    /// the plain result.
    ///
    /// # Example
    /// ```
    /// use nodeval::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let list = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
    ///
    /// assert_eq!(Context::broadcast_binary(Operator::Sub, &Value::from(10.0), &list),
    ///            Ok(Value::from(vec![Value::from(9.0), Value::from(8.0)])));
    /// assert!(Context::broadcast_binary(Operator::Add, &list, &Value::from(vec![])).is_err());
    /// ```
    pub fn broadcast_binary(operator: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        let apply = |l: &Value, r: &Value| Self::apply_binary(operator, l, r);

        let items = match (left, right) {
            (Value::List(larr), Value::List(rarr)) => {
                if larr.len() != rarr.len() {
                    return Err(EvalError::TypeMismatch { details: format!("cannot apply {operator} to lists of different lengths: {} vs {}",
                                                                          larr.len(),
                                                                          rarr.len()) });
                }
                larr.iter()
                    .zip(rarr)
                    .map(|(l, r)| apply(l, r))
                    .collect::<EvalResult<Vec<_>>>()?
            },
            (Value::List(larr), scalar) => {
                larr.iter().map(|l| apply(l, scalar)).collect::<EvalResult<Vec<_>>>()?
            },
            (scalar, Value::List(rarr)) => {
                rarr.iter().map(|r| apply(scalar, r)).collect::<EvalResult<Vec<_>>>()?
            },
            _ => return apply(left, right),
        };

        Ok(Value::List(items))
    }
}
