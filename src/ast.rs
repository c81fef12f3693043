use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// An operator of the prefix-notation formula language.
///
/// Operators are always written first in a formula, followed by their
/// whitespace separated operands: `+ a b`, `sum [1,2,3]`, `= x (* y 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Assignment (`=`). Writes the second operand into the path named by
    /// the first.
    Assign,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`), with the sign of the divisor.
    Mod,
    /// Numeric equality (`==`)
    Equal,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Flattening union of two values (`union`)
    Union,
    /// Elements of the first list found in the second (`intersection`)
    Intersection,
    /// Pairwise product sum of two equally long lists (`dot`)
    Dot,
    /// Sum of list elements (`sum`)
    Sum,
    /// Sum of list elements (`sigma`)
    Sigma,
    /// Product of list elements (`pi`)
    Pi,
    /// Number of elements (`cardinality`)
    Cardinality,
}

/// How many operands an operator consumes and how it folds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly two operands: the target path and the assigned value.
    Assignment,
    /// Exactly one operand.
    Unary,
    /// Two or more operands, folded from the left: `op a b c` is
    /// `op(op(a, b), c)`.
    Binary,
}

impl Operator {
    /// Every operator, in the order they are documented.
    pub const ALL: [Self; 18] = [Self::Assign,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod,
                                 Self::Equal,
                                 Self::Less,
                                 Self::LessEqual,
                                 Self::Greater,
                                 Self::GreaterEqual,
                                 Self::Union,
                                 Self::Intersection,
                                 Self::Dot,
                                 Self::Sum,
                                 Self::Sigma,
                                 Self::Pi,
                                 Self::Cardinality];

    /// Returns the symbol used to write this operator in a formula.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Dot => "dot",
            Self::Sum => "sum",
            Self::Sigma => "sigma",
            Self::Pi => "pi",
            Self::Cardinality => "cardinality",
        }
    }

    /// Returns the operand shape this operator expects.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Assign => Arity::Assignment,
            Self::Sum | Self::Sigma | Self::Pi | Self::Cardinality => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Returns `true` if `name` is spelled like an operator.
    ///
    /// Node keys and top-level names must not collide with operators,
    /// otherwise a formula consisting of that name would be read as an
    /// operator application.
    ///
    /// # Example
    /// ```
    /// use nodeval::ast::Operator;
    ///
    /// assert!(Operator::is_reserved("dot"));
    /// assert!(!Operator::is_reserved("flow"));
    /// ```
    #[must_use]
    pub fn is_reserved(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or(())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
