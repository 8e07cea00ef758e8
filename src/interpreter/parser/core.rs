use std::{iter::Peekable, slice};

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        number_table::NumberTable,
        parser::binary::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Position in the token sequence, plus the number table used to read values
/// of number words.
///
/// Every grammar function takes the cursor by mutable reference and advances
/// it past whatever it consumed.
pub struct Cursor<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    table:  &'a NumberTable,
}

impl<'a> Cursor<'a> {
    /// Places a cursor before the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token], table: &'a NumberTable) -> Self {
        Self { tokens: tokens.iter().peekable(),
               table }
    }

    /// Returns the next unconsumed token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Returns the kind of the next unconsumed token.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }

    /// Consumes the next token if it has the given kind.
    pub fn advance_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        self.tokens.next_if(|t| t.kind == kind)
    }

    #[cfg(test)]
    pub(crate) fn is_at_end(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Looks up the value of a number-word token.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownNumberWord` if the token's text is not in
    /// the number table.
    pub fn word_value(&self, token: &Token) -> ParseResult<i64> {
        Ok(self.table.lookup(&token.text)?)
    }
}

/// Parses a complete token sequence into a syntax tree.
///
/// The whole sequence must form exactly one expression.
///
/// Grammar: `line := expression EOF`
///
/// # Errors
/// - `ExpectedEndOfInput` if tokens remain after the expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use wordcalc::interpreter::{lexer::tokenize, number_table::NumberTable, parser::core::parse};
///
/// let table = NumberTable::shared();
/// let tokens = tokenize("2 + 3 * 4", table).unwrap();
/// let expr = parse(&tokens, table).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &[Token], table: &NumberTable) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(tokens, table);
    let expr = parse_expression(&mut cursor)?;

    if let Some(token) = cursor.peek() {
        return Err(ParseError::ExpectedEndOfInput { token: token.text.clone() });
    }

    debug!(%expr, "parsed expression");
    Ok(expr)
}
