use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::TokenizeError,
    interpreter::number_table::{NumberTable, WordClass},
};

/// The kind of a token produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+` or `plus`.
    Plus,
    /// `-` or `minus`. Also used for unary negation.
    Minus,
    /// `*` or `times`.
    Multiply,
    /// `/` or `divided by`.
    Divide,
    /// A run of decimal digits, such as `123`.
    DigitLiteral,
    /// `zero` through `nineteen`.
    LexicalOnesOrTeens,
    /// `twenty`, `thirty`, ..., `ninety`.
    LexicalTens,
    /// `hundred`, `thousand`, `million`.
    LexicalMultiplier,
    /// The connector `and`, as in "five hundred and six".
    LexicalAnd,
}

impl From<WordClass> for TokenKind {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::OnesOrTeens => Self::LexicalOnesOrTeens,
            WordClass::Tens => Self::LexicalTens,
            WordClass::Multiplier => Self::LexicalMultiplier,
            WordClass::And => Self::LexicalAnd,
        }
    }
}

/// A token: its kind and the exact source text it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The text the token was produced from. Never empty.
    pub text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Operator spellings, tried in this order.
///
/// Every spelling is matched as a plain substring before the remaining text is
/// split on whitespace, which is what lets `divided by` survive as one
/// operator.
pub const OPERATORS: [(&str, TokenKind); 8] = [("+", TokenKind::Plus),
                                               ("plus", TokenKind::Plus),
                                               ("-", TokenKind::Minus),
                                               ("minus", TokenKind::Minus),
                                               ("*", TokenKind::Multiply),
                                               ("times", TokenKind::Multiply),
                                               ("/", TokenKind::Divide),
                                               ("divided by", TokenKind::Divide)];

/// A whitespace-separated piece of an operand segment.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of ASCII digits, such as `42`.
    #[regex(r"[0-9]+", priority = 3)]
    Digits,
    /// Anything else up to the next whitespace, such as `seven` or `4x`.
    #[regex(r"[^\s]+", allow_greedy = true)]
    Word,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits a line into tokens.
///
/// The line is first split on every operator spelling from [`OPERATORS`], in
/// table order, recursively: each piece between two occurrences of one
/// spelling is split again with the spellings not tried yet. What remains
/// after all spellings have been tried is an operand segment: its
/// whitespace-separated words become digit literals when they are runs of
/// digits, and number-word tokens looked up in `table` otherwise.
///
/// Tokens come out in the same left-to-right order as their source text.
///
/// # Errors
/// Returns [`TokenizeError::UnknownToken`] for the first word of an operand
/// segment that is not in `table`.
///
/// # Example
/// ```
/// use wordcalc::interpreter::{
///     lexer::{TokenKind, tokenize},
///     number_table::NumberTable,
/// };
///
/// let tokens = tokenize("ten divided by 2", NumberTable::shared()).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LexicalOnesOrTeens, TokenKind::Divide, TokenKind::DigitLiteral]);
/// ```
pub fn tokenize(line: &str, table: &NumberTable) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    split_on_operators(line, &OPERATORS, table, &mut tokens)?;
    debug!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}

fn split_on_operators(input: &str,
                      operators: &[(&str, TokenKind)],
                      table: &NumberTable,
                      tokens: &mut Vec<Token>)
                      -> Result<(), TokenizeError> {
    let Some(((spelling, kind), remaining)) = operators.split_first() else {
        return tokenize_operand(input, table, tokens);
    };

    for (i, segment) in input.split(*spelling).enumerate() {
        if i != 0 {
            tokens.push(Token::new(*kind, *spelling));
        }
        split_on_operators(segment, remaining, table, tokens)?;
    }
    Ok(())
}

/// Tokenizes a segment that contains no operator spelling.
fn tokenize_operand(segment: &str,
                    table: &NumberTable,
                    tokens: &mut Vec<Token>)
                    -> Result<(), TokenizeError> {
    let operand = segment.trim();
    if operand.is_empty() {
        return Ok(());
    }
    trace!(operand, "operand segment");

    let mut lexer = Lexeme::lexer(operand);
    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        match lexeme {
            Ok(Lexeme::Digits) => tokens.push(Token::new(TokenKind::DigitLiteral, text)),
            Ok(Lexeme::Word) => {
                let entry = table.classify(text)?;
                tokens.push(Token::new(entry.class.into(), text));
            },
            Ok(Lexeme::Ignored) => {},
            Err(()) => return Err(TokenizeError::UnknownToken { word: text.to_string() }),
        }
    }
    Ok(())
}
