use log::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        system::core::System,
    },
    util::dedup::PathSet,
};

impl Context {
    /// Follows a path reference from `node` to `target` and evaluates the
    /// formula stored there.
    ///
    /// The target is evaluated with `node` appended to the reference chain.
    /// Whatever the target's own formula read, wrote or applied stays with
    /// the target: the returned evaluation reports `target` as its only
    /// referenced path and no outputs or operators. Its value, system and
    /// well-definedness pass through unchanged.
    ///
    /// # Parameters
    /// - `system`: The system to evaluate against.
    /// - `node`: Canonical path of the node being left.
    /// - `target`: Canonical path of the referenced node.
    /// - `previous`: The reference chain leading to `node`.
    /// - `depth`: Nesting depth of this evaluation.
    ///
    /// # Returns
    /// The evaluation of `target`, or a failed evaluation carrying
    /// `EvalError::LoopDetected` if `target` is already on the chain.
    pub(crate) fn eval_reference(&self,
                                 system: System,
                                 node: &str,
                                 target: String,
                                 previous: &[String],
                                 depth: usize)
                                 -> Evaluation {
        if previous.contains(&target) {
            return Evaluation::failed(system, EvalError::LoopDetected { path: target });
        }

        trace!("Following reference from '{node}' to '{target}'.");

        let mut chain = previous.to_vec();
        chain.push(node.to_string());

        let mut evaluation = self.evaluate_at(system, &target, None, &chain, depth + 1);
        evaluation.referenced = PathSet::from([target]);
        evaluation.output.clear();
        evaluation.operators.clear();
        evaluation
    }
}
