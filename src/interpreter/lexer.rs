use logos::Logos;

use crate::util::brackets::split_bracketed;

/// Represents a lexical token in the operand section of a prefix expression.
///
/// Operands are separated by spaces, and commas between operands are
/// invisible. A word runs until the next space, so list literals such as
/// `[1,2]` stay in one piece; trailing commas are trimmed off afterwards.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `(`, the start of a parenthesized sub-expression.
    #[token("(")]
    LParen,
    /// An operand word such as `flow`, `parent.level`, `2.5` or `[1,2]`.
    #[regex(r"[^ ,(][^ ]*", allow_greedy = true)]
    Word,
    /// Spaces and commas between operands.
    #[regex(r"[ ,]+", logos::skip)]
    Separator,
}

/// One operand of a prefix expression, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A parenthesized sub-expression, parentheses included.
    Group(&'a str),
    /// A bare word with trailing commas removed.
    Word(&'a str),
}

impl<'a> Operand<'a> {
    /// Returns the operand text.
    #[must_use]
    pub const fn text(self) -> &'a str {
        match self {
            Self::Group(text) | Self::Word(text) => text,
        }
    }
}

/// Cursor over the operands of a prefix expression.
///
/// Yields each operand in order. A `(` starts a group that extends to its
/// matching `)`, nested groups included; everything else is read word by
/// word.
///
/// # Example
/// ```
/// use nodeval::interpreter::lexer::{Operand, OperandCursor};
///
/// let operands: Vec<_> = OperandCursor::new("x, (* y (+ 1 2)) [1,2]").collect();
///
/// assert_eq!(operands,
///            vec![Operand::Word("x"),
///                 Operand::Group("(* y (+ 1 2))"),
///                 Operand::Word("[1,2]")]);
/// ```
pub struct OperandCursor<'a> {
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> OperandCursor<'a> {
    /// Creates a cursor over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Returns the text not yet consumed by the cursor.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.lexer.remainder()
    }
}

impl<'a> Iterator for OperandCursor<'a> {
    type Item = Operand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lexer.next()? {
                Ok(Token::LParen) => {
                    let source: &'a str = self.lexer.source();
                    let (group, _) = split_bracketed(&source[self.lexer.span().start..]);
                    self.lexer.bump(group.len() - 1);
                    return Some(Operand::Group(group));
                },
                Ok(Token::Word) => {
                    let word: &'a str = self.lexer.slice();
                    return Some(Operand::Word(word.trim_end_matches(',')));
                },
                Ok(Token::Separator) | Err(()) => {},
            }
        }
    }
}
