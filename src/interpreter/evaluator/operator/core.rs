use crate::{
    ast::{Arity, Operator},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies `operator` to already evaluated operands.
    ///
    /// Unary operators take exactly one operand. Binary operators take two or
    /// more and fold them from the left, so `- 10 3 2` is `(10 - 3) - 2`.
    ///
    /// Each application is first tried directly on the operands as given.
    /// If that fails with a type mismatch, typically a list where a scalar
    /// was expected, it is retried with broadcasting: unary operators map
    /// over the elements of their list operand, binary operators distribute
    /// scalars over lists and pair up the elements of two lists.
    ///
    /// # Parameters
    /// - `operator`: The operator to apply. `=` is not accepted here; the
    ///   evaluator performs assignments itself.
    /// - `operands`: The operand values, in order.
    ///
    /// # Returns
    /// - `Ok(Value)`: The result of the application.
    /// - `Err(EvalError::OperatorArity)`: If the operand count is wrong.
    /// - `Err(EvalError::Evaluation)`: If both attempts failed.
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
    /// assert_eq!(Context::apply_operator(Operator::Add, &[Value::from(3.0), Value::from(4.0)]),
    ///            Ok(Value::from(7.0)));
    /// assert_eq!(Context::apply_operator(Operator::Add, &[list.clone(), Value::from(3.0)]),
    ///            Ok(Value::from(vec![Value::from(4.0), Value::from(5.0)])));
    /// assert!(Context::apply_operator(Operator::Sum, &[list.clone(), list]).is_err());
    /// ```
    pub fn apply_operator(operator: Operator, operands: &[Value]) -> EvalResult<Value> {
        match operator.arity() {
            Arity::Unary => match operands {
                [operand] => Self::operate_unary(operator, operand),
                _ => Err(EvalError::OperatorArity { operator,
                                                    expected: "exactly 1",
                                                    found: operands.len() }),
            },
            Arity::Binary => {
                if operands.len() < 2 {
                    return Err(EvalError::OperatorArity { operator,
                                                          expected: "at least 2",
                                                          found: operands.len() });
                }
                Self::operate_binary(operator, operands)
            },
            Arity::Assignment => {
                let details = "assignments are performed by the evaluator".to_string();
                Err(EvalError::Evaluation { operator, details })
            },
        }
    }

    /// Applies a unary operator to a single value, without broadcasting.
    pub fn apply_unary(operator: Operator, operand: &Value) -> EvalResult<Value> {
        match operator {
            Operator::Sum | Operator::Sigma => Self::sum(operand),
            Operator::Pi => Self::product(operand),
            Operator::Cardinality => Self::cardinality(operand),
            _ => Err(EvalError::Evaluation { operator,
                                             details: "not a unary operator".to_string() }),
        }
    }

    /// Applies a binary operator to one pair of values, without
    /// broadcasting.
    pub fn apply_binary(operator: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        match operator {
            Operator::Union => Ok(Self::union(left, right)),
            Operator::Intersection => Self::intersection(left, right),
            Operator::Dot => Self::dot(left, right),
            Operator::Assign | Operator::Sum | Operator::Sigma | Operator::Pi | Operator::Cardinality => {
                Err(EvalError::Evaluation { operator,
                                            details: "not a binary operator".to_string() })
            },
            _ => Self::eval_numeric(operator, left, right),
        }
    }

    fn operate_unary(operator: Operator, operand: &Value) -> EvalResult<Value> {
        match Self::apply_unary(operator, operand) {
            Err(EvalError::TypeMismatch { .. }) => {
                Self::broadcast_unary(operator, operand).map_err(|e| failure(operator, e))
            },
            direct => direct.map_err(|e| failure(operator, e)),
        }
    }

    fn operate_binary(operator: Operator, operands: &[Value]) -> EvalResult<Value> {
        match fold(operands, |l, r| Self::apply_binary(operator, l, r)) {
            Err(EvalError::TypeMismatch { .. }) => {
                fold(operands, |l, r| Self::broadcast_binary(operator, l, r)).map_err(|e| {
                                                                                 failure(operator, e)
                                                                             })
            },
            direct => direct.map_err(|e| failure(operator, e)),
        }
    }
}

/// Folds `operands` from the left with `f`.
fn fold<F>(operands: &[Value], f: F) -> EvalResult<Value>
    where F: Fn(&Value, &Value) -> EvalResult<Value>
{
    let Some((first, rest)) = operands.split_first() else {
        return Err(EvalError::TypeMismatch { details: "no operands to fold".to_string() });
    };

    rest.iter().try_fold(first.clone(), |acc, next| f(&acc, next))
}

/// Turns a type mismatch that survived broadcasting into an evaluation
/// failure of `operator`.
fn failure(operator: Operator, error: EvalError) -> EvalError {
    match error {
        EvalError::TypeMismatch { details } => EvalError::Evaluation { operator, details },
        other => other,
    }
}
