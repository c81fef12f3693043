use log::warn;

use crate::{
    ast::{Arity, Operator},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        lexer::{Operand, OperandCursor},
        system::core::System,
        value::core::Value,
    },
};

/// Where an assignment will write, as far as the operands have told us.
enum Target {
    /// The operator is not `=`.
    NotAssigning,
    /// `=` whose first operand has not been read yet.
    Pending,
    /// The canonical path named by the first operand.
    Path(String),
    /// The first operand was a group or did not resolve.
    Unavailable,
}

impl Target {
    fn path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path.as_str()),
            _ => None,
        }
    }
}

impl Context {
    /// Evaluates a prefix expression `operator operand ...` at `node`.
    ///
    /// Operands are evaluated left to right at the same node, with the
    /// system threaded through them. Their referenced paths, outputs and
    /// operators are merged into the result. For `=`, the first operand must
    /// be a bare path: it names the output and is left out of the
    /// referenced paths.
    ///
    /// An operand that is not well defined is logged, and the operator is
    /// still applied to whatever values are present. The result is well
    /// defined only if every operand is and the operator succeeds.
    ///
    /// # Parameters
    /// - `system`: The system to evaluate against.
    /// - `node`: Canonical path of the node the expression is written at.
    /// - `operator`: The leading operator.
    /// - `operands`: The text following the operator.
    /// - `previous`: The reference chain leading here.
    /// - `depth`: Nesting depth of this evaluation.
    pub(crate) fn eval_prefix(&self,
                              system: System,
                              node: &str,
                              operator: Operator,
                              operands: &str,
                              previous: &[String],
                              depth: usize)
                              -> Evaluation {
        let mut evaluation = Evaluation::new(system);
        evaluation.well_defined = false;
        evaluation.operators.insert(operator);

        let mut target = match operator.arity() {
            Arity::Assignment => Target::Pending,
            _ => Target::NotAssigning,
        };
        let mut all_defined = true;
        let mut values = Vec::new();

        for operand in OperandCursor::new(operands) {
            if matches!(target, Target::Pending) {
                target = match operand {
                    Operand::Word(word) => evaluation.system
                                                     .resolve(&format!("{node}.{word}"))
                                                     .map_or(Target::Unavailable, |r| {
                                                         Target::Path(r.path)
                                                     }),
                    Operand::Group(_) => Target::Unavailable,
                };
            }

            let section = self.evaluate_at(std::mem::take(&mut evaluation.system),
                                           node,
                                           Some(Value::from(operand.text())),
                                           previous,
                                           depth + 1);

            let (well_defined, value) = evaluation.absorb(section, target.path());
            all_defined &= well_defined;
            values.push(value);
        }

        if !all_defined {
            warn!("Operand(s) of '{operator} {operands}' at '{node}' are not well defined.");
        }

        if operator.arity() == Arity::Assignment {
            Self::assign(&mut evaluation, target, values, all_defined);
            return evaluation;
        }

        let values: Vec<Value> = values.into_iter()
                                       .map(|value| value.unwrap_or(Value::Null))
                                       .collect();

        match Self::apply_operator(operator, &values) {
            Ok(value) => {
                evaluation.value = Some(value);
                evaluation.well_defined = all_defined;
            },
            Err(error) => evaluation.report(error),
        }

        evaluation
    }

    /// Writes the second operand into the target of an `=` expression.
    ///
    /// Nothing is written unless every operand is well defined and there are
    /// exactly two of them.
    fn assign(evaluation: &mut Evaluation,
              target: Target,
              mut values: Vec<Option<Value>>,
              all_defined: bool) {
        if !all_defined {
            return;
        }

        if values.len() != 2 {
            evaluation.report(EvalError::OperatorArity { operator: Operator::Assign,
                                                         expected: "exactly 2",
                                                         found:    values.len(), });
            return;
        }

        let Target::Path(path) = target else {
            let details = "the first operand does not name a path".to_string();
            evaluation.report(EvalError::Assignment { path: None, details });
            return;
        };

        let value = values.pop().flatten().unwrap_or(Value::Null);
        match evaluation.system.set_value(&path, value.clone()) {
            Ok(()) => {
                evaluation.output.insert(path);
                evaluation.value = Some(value);
                evaluation.well_defined = true;
            },
            Err(error) => {
                evaluation.report(EvalError::Assignment { path:    Some(path),
                                                          details: error.to_string(), })
            },
        }
    }
}
