use indexmap::IndexSet;
use log::{debug, error, warn};
use serde::Serialize;

use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::{evaluator::classify::Form, system::core::System, value::core::Value},
    util::dedup::PathSet,
};

/// Result type used by the evaluator.
///
/// Internal evaluation routines return either a value of type `T` or an
/// `EvalError` describing the failure. The public entry points never return
/// errors; they fold them into an [`Evaluation`].
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on how deeply evaluations may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The outcome of evaluating a formula against a system.
///
/// `referenced`, `output` and `operators` only describe the evaluated formula
/// itself. When evaluation follows a path reference into another node, the
/// metadata of that node's own formula is replaced by the single referenced
/// path, so each record covers exactly one hop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The system after evaluation. Differs from the input only if an
    /// assignment ran.
    #[serde(skip)]
    pub system:       System,
    /// Canonical paths read directly by the formula.
    pub referenced:   PathSet,
    /// Canonical paths written by the formula.
    pub output:       PathSet,
    /// Operators applied directly by the formula.
    pub operators:    IndexSet<Operator>,
    /// Whether the data in the system sufficed to compute the value.
    pub well_defined: bool,
    /// The computed value, if any.
    pub value:        Option<Value>,
    /// Every problem met while evaluating, nested evaluations included.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics:  Vec<EvalError>,
}

impl Evaluation {
    /// Creates a well-defined evaluation without a value.
    #[must_use]
    pub fn new(system: System) -> Self {
        Self { system,
               referenced: PathSet::new(),
               output: PathSet::new(),
               operators: IndexSet::new(),
               well_defined: true,
               value: None,
               diagnostics: Vec::new() }
    }

    /// Creates a well-defined evaluation holding `value`.
    #[must_use]
    pub fn literal(system: System, value: Value) -> Self {
        Self { value: Some(value),
               ..Self::new(system) }
    }

    /// Creates a failed evaluation without a value.
    #[must_use]
    pub fn failed(system: System, error: EvalError) -> Self {
        let mut evaluation = Self::new(system);
        evaluation.report(error);
        evaluation
    }

    /// Logs `error`, records it and marks the evaluation as not well
    /// defined.
    pub fn report(&mut self, error: EvalError) {
        match &error {
            EvalError::UnknownSymbol { .. } => warn!("{error}"),
            _ => error!("{error}"),
        }
        self.well_defined = false;
        self.diagnostics.push(error);
    }

    /// Takes over the system of a sub-evaluation made at the same node and
    /// merges its metadata into this one, leaving out `excluded` from the
    /// referenced paths.
    ///
    /// Returns the sub-evaluation's well-definedness and value.
    pub(crate) fn absorb(&mut self, section: Self, excluded: Option<&str>) -> (bool, Option<Value>) {
        self.system = section.system;
        self.referenced
            .extend(section.referenced
                           .into_iter()
                           .filter(|path| Some(path.as_str()) != excluded));
        self.output.extend(section.output);
        self.operators.extend(section.operators);
        self.diagnostics.extend(section.diagnostics);

        (section.well_defined, section.value)
    }
}

/// Stores the evaluation settings.
///
/// A `Context` holds no graph state: the system is passed into every
/// evaluation and handed back on the result, so one context can serve any
/// number of systems.
#[derive(Debug, Clone)]
pub struct Context {
    /// Exogenous input paths. Threaded through every nested evaluation but
    /// not consulted by any evaluation rule.
    pub inputs:    Vec<String>,
    /// Deepest nesting of evaluations allowed before giving up with
    /// `EvalError::DepthExceeded`.
    pub max_depth: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with no inputs and the default depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { inputs:    Vec::new(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }

    /// Sets the exogenous input paths.
    #[must_use]
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates the formula at `node`, or `expr` in place of it.
    ///
    /// This is the main entry point for evaluation. `node` is an absolute
    /// path; paths inside the formula are relative to it. The system is
    /// returned on the result, updated by any assignment the formula made.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::{
    ///     evaluator::core::Context, system::core::System, value::core::Value,
    /// };
    ///
    /// let system = System::new().with("tank", [("level", 3.0), ("limit", 9.0)]);
    /// let context = Context::new();
    ///
    /// let evaluation = context.evaluate(system, "tank", Some("- limit level".into()));
    ///
    /// assert!(evaluation.well_defined);
    /// assert_eq!(evaluation.value, Some(Value::Number(6.0)));
    /// assert_eq!(evaluation.referenced.len(), 2);
    /// ```
    #[must_use]
    pub fn evaluate(&self, system: System, node: &str, expr: Option<Value>) -> Evaluation {
        self.evaluate_at(system, node, expr, &[], 0)
    }

    /// Evaluates at `node` with an explicit reference chain.
    ///
    /// `previous` holds the canonical paths already left through a path
    /// reference on the way here; following a reference back into one of
    /// them reports `EvalError::LoopDetected`. `depth` counts the nested
    /// evaluations above this one.
    #[must_use]
    pub fn evaluate_at(&self,
                       system: System,
                       node: &str,
                       expr: Option<Value>,
                       previous: &[String],
                       depth: usize)
                       -> Evaluation {
        if depth > self.max_depth {
            return Evaluation::failed(system, EvalError::DepthExceeded { limit: self.max_depth });
        }

        let resolved = system.resolve(node)
                             .map(|r| (r.path, expr.unwrap_or_else(|| r.value.clone())));
        let Some((node, expr)) = resolved else {
            return Evaluation::failed(system, EvalError::InvalidPath { path: node.to_string() });
        };

        let form = Self::classify(&system, &node, &expr);
        debug!("Evaluating {form:?} at '{node}'.");

        match form {
            Form::Literal => Evaluation::literal(system, expr.clone()),
            Form::EscapedText(text) => Evaluation::literal(system, Value::from(text)),
            Form::Boolean(b) => Evaluation::literal(system, Value::Boolean(b)),
            Form::Number(n) => Evaluation::literal(system, Value::Number(n)),
            Form::ListLiteral(body) => self.eval_list(system, &node, body, previous, depth),
            Form::PartialList => Evaluation::new(system),
            Form::PathReference(target) => {
                self.eval_reference(system, &node, target, previous, depth)
            },
            Form::PrefixExpression { operator, operands } => {
                self.eval_prefix(system, &node, operator, operands, previous, depth)
            },
            Form::Unrecognized(text) => {
                let mut evaluation = Evaluation::literal(system, Value::from(text));
                evaluation.report(EvalError::UnknownSymbol { symbol: text.to_string() });
                evaluation
            },
        }
    }
}
