use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{Cursor, ParseResult},
            unary::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// This is the lowest precedence level and the entry point for expression
/// parsing. Operators are left-associative, so `10 - 2 - 3` parses as
/// `(10 - 2) - 3`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the single term if no operator follows.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(cursor)?;
    loop {
        if let Some(kind) = cursor.peek_kind()
           && let Some(op) = token_to_binary_operator(kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            cursor.advance();
            let right = parse_term(cursor)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Binds tighter than [`parse_expression`]; operators are left-associative.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the term.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(cursor)?;
    loop {
        if let Some(kind) = cursor.peek_kind()
           && let Some(op) = token_to_binary_operator(kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            cursor.advance();
            let right = parse_factor(cursor)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its binary operator.
///
/// Returns `None` for every kind that is not an operator. `Minus` always maps
/// to subtraction here; its unary use is handled by the factor rule.
///
/// # Example
/// ```
/// use wordcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Divide), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::DigitLiteral), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::DigitLiteral
        | TokenKind::LexicalOnesOrTeens
        | TokenKind::LexicalTens
        | TokenKind::LexicalMultiplier
        | TokenKind::LexicalAnd => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ParseError,
        interpreter::{lexer::tokenize, number_table::NumberTable, parser::core::parse},
    };

    fn tree(line: &str) -> String {
        let table = NumberTable::shared();
        let tokens = tokenize(line, table).unwrap();
        parse(&tokens, table).unwrap().to_string()
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(tree("10 - 2 - 3"), "((10 - 2) - 3)");
        assert_eq!(tree("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(tree("1 plus 2 minus 3 plus 4"), "(((1 + 2) - 3) + 4)");
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(tree("2 + 3 * 4"), "(2 + (3 * 4))");
        assert_eq!(tree("2 * 3 + 4 / 2"), "((2 * 3) + (4 / 2))");
        assert_eq!(tree("two times three minus four divided by two"), "((2 * 3) - (4 / 2))");
    }

    #[test]
    fn dangling_operator_fails() {
        let table = NumberTable::shared();

        let tokens = tokenize("1 +", table).unwrap();
        assert_eq!(parse(&tokens, table), Err(ParseError::UnexpectedEndOfInput));

        let tokens = tokenize("3 * * 4", table).unwrap();
        assert_eq!(parse(&tokens, table),
                   Err(ParseError::ExpectedNumber { token: "*".to_string() }));
    }
}
