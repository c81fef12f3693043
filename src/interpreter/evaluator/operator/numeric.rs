use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a numeric or comparison operator on two scalars.
    ///
    /// Both operands are coerced with [`Value::as_number`], so booleans count
    /// as `1` and `0` and numeric text is parsed. Arithmetic yields a
    /// `Value::Number`, comparisons a `Value::Boolean`. `%` takes the sign of
    /// the divisor.
    ///
    /// # Parameters
    /// - `operator`: One of `+ - * / % == < <= > >=`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// - `Ok(Value)`: The result.
    /// - `Err(EvalError::TypeMismatch)`: If an operand is not numeric.
    /// - `Err(EvalError::Evaluation)`: On division or modulo by zero.
    ///
    /// # Example
    /// ```
    /// use nodeval::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_numeric(Operator::Mod, &Value::from(-7.0), &Value::from(3.0));
    /// assert_eq!(result, Ok(Value::from(2.0)));
    ///
    /// let result = Context::eval_numeric(Operator::LessEqual, &Value::from(2.0), &Value::from("2"));
    /// assert_eq!(result, Ok(Value::from(true)));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_numeric(operator: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        let l = left.as_number()?;
        let r = right.as_number()?;

        let division_by_zero = || {
            Err(EvalError::Evaluation { operator,
                                        details: format!("cannot divide {l} by zero") })
        };

        Ok(match operator {
               Operator::Add => Value::Number(l + r),
               Operator::Sub => Value::Number(l - r),
               Operator::Mul => Value::Number(l * r),
               Operator::Div => {
                   if r == 0.0 {
                       return division_by_zero();
                   }
                   Value::Number(l / r)
               },
               Operator::Mod => {
                   if r == 0.0 {
                       return division_by_zero();
                   }
                   Value::Number(floor_mod(l, r))
               },
               Operator::Equal => Value::Boolean(l == r),
               Operator::Less => Value::Boolean(l < r),
               Operator::LessEqual => Value::Boolean(l <= r),
               Operator::Greater => Value::Boolean(l > r),
               Operator::GreaterEqual => Value::Boolean(l >= r),
               _ => {
                   return Err(EvalError::Evaluation { operator,
                                                      details: "not a numeric operator".to_string() });
               },
           })
    }
}

/// Remainder of `l / r` carrying the sign of `r`.
fn floor_mod(l: f64, r: f64) -> f64 {
    let rem = l % r;
    if rem != 0.0 && (rem < 0.0) != (r < 0.0) {
        rem + r
    } else {
        rem
    }
}
