/// Evaluation errors.
///
/// Defines every failure that can occur while a formula is evaluated against
/// a system: unresolvable paths, reference loops, operator arity and type
/// problems, failed assignments and unknown symbols. None of them abort an
/// evaluation; they are logged and collected as diagnostics on the result.
pub mod eval_error;
/// System loading errors.
///
/// Contains the errors raised while reading a system description from disk
/// or from JSON text.
pub mod system_error;

pub use eval_error::EvalError;
pub use system_error::SystemError;
