use serde::Serialize;

use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Represents all errors that can occur during evaluation.
///
/// Evaluation never stops on one of these. The evaluator logs the error,
/// records it on the result and marks the result as not well defined.
pub enum EvalError {
    /// A node or dotted path does not resolve against the system.
    InvalidPath {
        /// The absolute path that failed to resolve.
        path: String,
    },
    /// Following a path reference would re-enter a node that is already on
    /// the current reference chain.
    LoopDetected {
        /// The canonical path of the node that would be re-entered.
        path: String,
    },
    /// An operator received the wrong number of operands.
    OperatorArity {
        /// The operator being applied.
        operator: Operator,
        /// Human readable description of the accepted operand count.
        expected: &'static str,
        /// The number of operands supplied.
        found:    usize,
    },
    /// An operand had a shape the operator cannot use directly, such as a
    /// list where a number was needed. Operator dispatch answers this error
    /// by retrying with broadcasting.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Applying an operator failed both directly and with broadcasting.
    Evaluation {
        /// The operator being applied.
        operator: Operator,
        /// Details about the failure.
        details:  String,
    },
    /// Resolving or writing the output path of an assignment failed.
    Assignment {
        /// The output path, if one could be determined.
        path:    Option<String>,
        /// Details about the failure.
        details: String,
    },
    /// A formula matched no literal form, no path and no operator.
    UnknownSymbol {
        /// The text that could not be interpreted.
        symbol: String,
    },
    /// Evaluation nested deeper than the configured limit.
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath { path } => {
                write!(f, "Invalid path: '{path}' does not resolve against the system.")
            },
            Self::LoopDetected { path } => {
                write!(f, "Loop detected: evaluating '{path}' would re-enter it.")
            },
            Self::OperatorArity { operator,
                                  expected,
                                  found, } => write!(f,
                                                     "Operator '{operator}' needs {expected} operand(s) but was given {found}."),
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}."),
            Self::Evaluation { operator, details } => {
                write!(f, "Problem performing '{operator}': {details}.")
            },
            Self::Assignment { path: Some(path),
                               details, } => {
                write!(f, "Problem setting '{path}': {details}.")
            },
            Self::Assignment { path: None, details } => {
                write!(f, "Problem assigning a value: {details}.")
            },
            Self::UnknownSymbol { symbol } => {
                write!(f, "Unknown symbol: '{symbol}' is not a literal, path or operator expression.")
            },
            Self::DepthExceeded { limit } => {
                write!(f, "Evaluation nested deeper than the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
