use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Cursor, ParseResult},
            lexical::parse_lexical_number,
        },
    },
    util::num::parse_digits_saturating,
};

/// Parses a factor: a negated factor or a number.
///
/// Unary minus is right-recursive and binds tighter than every binary
/// operator, so `- - 5` is `-(-5)` and `-5 + 3` is `(-5) + 3`. Anything that
/// is neither a minus nor a digit literal is handed to
/// [`parse_lexical_number`].
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | DigitLiteral
///             | lexical_number
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `ExpectedNumber` if the token cannot start a number.
pub fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let token = cursor.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Minus => {
            cursor.advance();
            let expr = parse_factor(cursor)?;
            Ok(Expr::negate(expr))
        },
        TokenKind::DigitLiteral => {
            cursor.advance();
            parse_digit_literal(token)
        },
        _ => parse_lexical_number(cursor).map(Expr::number),
    }
}

/// Converts a digit-literal token into a literal node.
///
/// Literals too large for `i64` saturate; the evaluator rejects them later
/// as out of range.
fn parse_digit_literal(token: &Token) -> ParseResult<Expr> {
    parse_digits_saturating(&token.text)
        .map(Expr::number)
        .ok_or_else(|| ParseError::ExpectedNumber { token: token.text.clone() })
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Expr,
        error::ParseError,
        interpreter::{
            lexer::{Token, TokenKind, tokenize},
            number_table::NumberTable,
            parser::core::{ParseResult, parse},
        },
    };

    fn parse_str(line: &str) -> ParseResult<Expr> {
        let table = NumberTable::shared();
        let tokens = tokenize(line, table).unwrap();
        parse(&tokens, table)
    }

    #[test]
    fn negation_is_right_recursive() {
        assert_eq!(parse_str("- - 5").unwrap(), Expr::negate(Expr::negate(Expr::number(5))));
        assert_eq!(parse_str("minus five").unwrap(), Expr::negate(Expr::number(5)));
    }

    #[test]
    fn negation_binds_tighter_than_binary_operators() {
        assert_eq!(parse_str("-5 + 3").unwrap().to_string(), "(-5 + 3)");
        assert_eq!(parse_str("2 * -3").unwrap().to_string(), "(2 * -3)");
        assert_eq!(parse_str("2 - -3").unwrap().to_string(), "(2 - -3)");
    }

    #[test]
    fn oversized_digit_literal_saturates() {
        assert_eq!(parse_str("123456789012345678901234567890").unwrap(), Expr::number(i64::MAX));
    }

    #[test]
    fn operator_cannot_start_a_factor() {
        assert_eq!(parse_str("+ 3"), Err(ParseError::ExpectedNumber { token: "+".to_string() }));
        assert_eq!(parse_str("-"), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn malformed_digit_token_is_rejected() {
        let table = NumberTable::shared();
        let tokens = [Token::new(TokenKind::DigitLiteral, "4x")];

        assert_eq!(parse(&tokens, table),
                   Err(ParseError::ExpectedNumber { token: "4x".to_string() }));
    }
}
