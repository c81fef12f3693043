use crate::interpreter::{
    evaluator::core::{Context, Evaluation},
    system::core::System,
    value::core::Value,
};

impl Context {
    /// Evaluates the body of a list literal at `node`.
    ///
    /// The body is split on every comma, so elements cannot themselves
    /// contain commas. Each element is stripped of surrounding brackets and
    /// spaces and evaluated at the same node, left to right, with the system
    /// threaded from one element to the next. An element that produces no
    /// value is kept as [`Value::Null`] so positions line up with the text.
    ///
    /// # Parameters
    /// - `system`: The system to evaluate against.
    /// - `node`: Canonical path of the node the literal is written at.
    /// - `body`: The text between the outer brackets.
    /// - `previous`: The reference chain leading here.
    /// - `depth`: Nesting depth of this evaluation.
    ///
    /// # Returns
    /// An `Evaluation` holding a `Value::List`, well defined only if every
    /// element is.
    pub(crate) fn eval_list(&self,
                            system: System,
                            node: &str,
                            body: &str,
                            previous: &[String],
                            depth: usize)
                            -> Evaluation {
        let mut evaluation = Evaluation::new(system);
        let mut items = Vec::new();

        if !body.trim_matches(' ').is_empty() {
            for element in body.split(',') {
                let element = element.trim_start_matches(['[', ' '])
                                     .trim_end_matches([']', ' ']);

                let section = self.evaluate_at(std::mem::take(&mut evaluation.system),
                                               node,
                                               Some(Value::from(element)),
                                               previous,
                                               depth + 1);

                let (well_defined, value) = evaluation.absorb(section, None);
                evaluation.well_defined &= well_defined;
                items.push(value.unwrap_or(Value::Null));
            }
        }

        evaluation.value = Some(Value::List(items));
        evaluation
    }
}
