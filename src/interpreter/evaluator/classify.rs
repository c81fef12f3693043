use crate::{
    ast::Operator,
    interpreter::{
        evaluator::core::Context,
        system::core::System,
        value::core::Value,
    },
    util::brackets::{is_enclosed, split_bracketed},
};

/// Marker that makes the rest of a text literal.
pub const ESCAPE: &str = "//";

/// The syntactic form of a formula, decided before anything is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Form<'a> {
    /// A value that is not text, or empty text. Already fully evaluated.
    Literal,
    /// Text starting with `//`, kept verbatim.
    EscapedText(&'a str),
    /// `True`, `true`, `False` or `false`.
    Boolean(bool),
    /// Text that parses completely as a finite number.
    Number(f64),
    /// `[a,b,...]` spanning the whole text. Holds the text between the
    /// outer brackets.
    ListLiteral(&'a str),
    /// Text starting with `[` whose bracketed span ends before the text
    /// does, such as `[1,2] x`. Has no value.
    PartialList,
    /// A path, relative to the current node, that resolves. Holds the
    /// canonical absolute path.
    PathReference(String),
    /// `operator operand ...`, after stripping enclosing parentheses.
    PrefixExpression {
        /// The leading operator.
        operator: Operator,
        /// The text following the operator.
        operands: &'a str,
    },
    /// Text that matched nothing above. Evaluates to itself.
    Unrecognized(&'a str),
}

impl Context {
    /// Classifies `expr` as written at the node with canonical path `node`.
    ///
    /// The checks run in a fixed priority order: non-text literal, escaped
    /// text, boolean, number, list literal, path reference and finally
    /// prefix expression. Text starting with `[` never gets past the list
    /// check. Only the path check consults the system.
    ///
    /// # Example
    /// ```
    /// use nodeval::{
    ///     ast::Operator,
    ///     interpreter::{
    ///         evaluator::{classify::Form, core::Context},
    ///         system::core::System,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let system = System::new().with("tank", [("level", 3.0)]);
    ///
    /// assert_eq!(Context::classify(&system, "tank", &Value::from("2.5")), Form::Number(2.5));
    /// assert_eq!(Context::classify(&system, "tank", &Value::from("level")),
    ///            Form::PathReference("tank.level".to_string()));
    /// assert_eq!(Context::classify(&system, "tank", &Value::from("(+ level 1)")),
    ///            Form::PrefixExpression { operator: Operator::Add,
    ///                                     operands: "level 1" });
    /// ```
    #[must_use]
    pub fn classify<'a>(system: &System, node: &str, expr: &'a Value) -> Form<'a> {
        let Value::Text(text) = expr else {
            return Form::Literal;
        };

        if text.is_empty() {
            return Form::Literal;
        }

        if text.starts_with(ESCAPE) {
            return Form::EscapedText(text.as_str());
        }

        match text.as_str() {
            "True" | "true" => return Form::Boolean(true),
            "False" | "false" => return Form::Boolean(false),
            _ => {},
        }

        if let Ok(n) = text.trim().parse::<f64>()
           && n.is_finite()
        {
            return Form::Number(n);
        }

        if text.starts_with('[') {
            if split_bracketed(text).1.is_some() {
                return Form::PartialList;
            }
            let body = &text[1..];
            return Form::ListLiteral(body.strip_suffix(']').unwrap_or(body));
        }

        if let Some(resolved) = system.resolve(&format!("{node}.{text}")) {
            return Form::PathReference(resolved.path);
        }

        Self::classify_prefix(text)
    }

    /// Reads `text` as `operator operand ...`.
    ///
    /// Enclosing parentheses are stripped first, as many layers as fully
    /// enclose the text, followed by surrounding spaces. The operator is the
    /// leading run of non-space characters with trailing commas removed.
    fn classify_prefix(text: &str) -> Form<'_> {
        let mut body = text;
        while is_enclosed(body, '(', ')') {
            body = &body[1..body.len() - 1];
        }

        let body = body.trim_matches(' ');
        let (word, operands) = body.split_once(' ').unwrap_or((body, ""));
        match word.trim_end_matches(',').parse::<Operator>() {
            Ok(operator) => Form::PrefixExpression { operator,
                                                     operands: operands.trim_start_matches(' ') },
            Err(()) => Form::Unrecognized(text),
        }
    }
}
