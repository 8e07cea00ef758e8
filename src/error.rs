use thiserror::Error;

/// Tokenizer errors.
///
/// Raised while splitting the raw line into operator and number tokens, when
/// a word is neither an operator spelling nor a known number word.
pub mod tokenize_error;
/// Parsing errors.
///
/// Defines everything that can go wrong while turning tokens into a syntax
/// tree: premature end of input, stray tokens, trailing tokens and malformed
/// compound numbers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic failures raised during evaluation: literals out of
/// range, overflow, underflow and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::{TokenizeError, UnknownWordError};

/// The first error encountered while evaluating a line.
///
/// Each phase contributes its own error type; they are wrapped here so that
/// [`crate::evaluate`] has a single failure type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Failure while tokenizing.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// Failure while parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Failure while evaluating.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat classification of every [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized word in a number phrase.
    Tokenize,
    /// Grammar violation.
    Parse,
    /// Literal outside the representable bounds.
    Range,
    /// Result above the upper bound.
    Overflow,
    /// Result below the lower bound.
    Underflow,
    /// Divisor at or near zero.
    DivideByZero,
}

impl EvalError {
    /// Returns the flat category of this error.
    ///
    /// # Example
    /// ```
    /// use wordcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Tokenize(_) => ErrorKind::Tokenize,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(RuntimeError::LiteralTooSmall { .. }
                          | RuntimeError::LiteralTooBig { .. }) => ErrorKind::Range,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
            Self::Runtime(RuntimeError::Underflow { .. }) => ErrorKind::Underflow,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivideByZero,
        }
    }
}
