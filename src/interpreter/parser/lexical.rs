use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Cursor, ParseResult},
    },
};

/// A run of words that has been scaled by the same multiplier.
#[derive(Debug, Clone, Copy)]
struct Group {
    value: i64,
    /// The last multiplier applied, `1` for a bare base word.
    scale: i64,
}

/// Parses a number written in English words.
///
/// The phrase is a sequence of base words, each followed by any number of
/// multipliers, optionally separated by `and`. Multipliers right after a
/// base word chain on it: "twelve hundred thousand" is 1 200 000. A
/// multiplier also scales every earlier group whose scale is strictly
/// smaller, so "nine hundred ninety nine thousand" is (900 + 99) * 1000,
/// while "three million two hundred thousand" keeps the million apart and
/// "one thousand two thousand" is 3000.
/// The groups are summed, with or without `and` between them, so
/// "one hundred and seven" and "one hundred seven" are both 107.
///
/// Grammar:
/// ```text
///     lexical_number := base multiplier* ( "and"? lexical_number )?
///     base           := OnesOrTeens | Tens OnesOrTeens?
/// ```
///
/// Arithmetic saturates at `i64::MAX`; the evaluator's range check rejects
/// anything that large.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the phrase ends where a base word is needed,
///   e.g. after a trailing `and`.
/// - `ExpectedNumber` if a base word is needed but another token is found.
/// - `ZeroAfterTens` for phrases such as "twenty zero".
///
/// # Example
/// ```
/// use wordcalc::interpreter::{
///     lexer::tokenize,
///     number_table::NumberTable,
///     parser::{core::Cursor, lexical::parse_lexical_number},
/// };
///
/// let table = NumberTable::shared();
/// let tokens = tokenize("one hundred and seven", table).unwrap();
/// let mut cursor = Cursor::new(&tokens, table);
/// assert_eq!(parse_lexical_number(&mut cursor).unwrap(), 107);
/// ```
pub fn parse_lexical_number(cursor: &mut Cursor<'_>) -> ParseResult<i64> {
    let mut groups = Vec::new();

    loop {
        let mut group = Group { value: parse_base(cursor)?,
                                scale: 1 };

        while let Some(multiplier) = cursor.advance_if(TokenKind::LexicalMultiplier) {
            group = scale_group(&mut groups, group, cursor.word_value(multiplier)?);
        }
        groups.push(group);

        match cursor.peek_kind() {
            Some(TokenKind::LexicalAnd) => {
                cursor.advance();
            },
            Some(TokenKind::LexicalOnesOrTeens | TokenKind::LexicalTens) => {},
            _ => break,
        }
    }

    Ok(groups.iter().fold(0, |sum, group| sum.saturating_add(group.value)))
}

/// Multiplies `group` together with the closed groups before it whose scale
/// is strictly smaller than `multiplier`.
///
/// Closed groups of an equal or larger scale stay apart and are summed
/// later, so "one thousand two thousand" is 1000 + 2000.
fn scale_group(groups: &mut Vec<Group>, group: Group, multiplier: i64) -> Group {
    let mut value = group.value;
    while let Some(last) = groups.last()
          && last.scale < multiplier
    {
        value = value.saturating_add(last.value);
        groups.pop();
    }
    Group { value: value.saturating_mul(multiplier),
            scale: multiplier }
}

/// Parses a ones-or-teens word, or a tens word with an optional ones word.
fn parse_base(cursor: &mut Cursor<'_>) -> ParseResult<i64> {
    let token = cursor.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::LexicalOnesOrTeens => {
            cursor.advance();
            cursor.word_value(token)
        },
        TokenKind::LexicalTens => {
            cursor.advance();
            parse_tens_with_optional_ones(cursor, token)
        },
        _ => Err(ParseError::ExpectedNumber { token: token.text.clone() }),
    }
}

/// Adds a directly following ones word (`one` to `nine`) to a tens word.
///
/// Teens are left alone and start a group of their own in
/// [`parse_lexical_number`], so "twenty eleven" is 20 + 11.
fn parse_tens_with_optional_ones(cursor: &mut Cursor<'_>, tens: &Token) -> ParseResult<i64> {
    let value = cursor.word_value(tens)?;

    if let Some(next) = cursor.peek()
       && next.kind == TokenKind::LexicalOnesOrTeens
    {
        let ones = cursor.word_value(next)?;
        if ones < 10 {
            cursor.advance();
            if ones == 0 {
                return Err(ParseError::ZeroAfterTens { tens: tens.text.clone() });
            }
            return Ok(value + ones);
        }
    }

    Ok(value)
}
