use thiserror::Error;

use crate::error::UnknownWordError;

/// Represents all errors that can occur while building the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line ended where a number was required.
    #[error("expected a number")]
    UnexpectedEndOfInput,
    /// A complete expression was parsed but tokens remain.
    #[error("expected end of input but got '{token}'")]
    ExpectedEndOfInput {
        /// The first token that was not consumed.
        token: String,
    },
    /// A token that cannot start a number was found where one was required.
    #[error("expected a number but got '{token}'")]
    ExpectedNumber {
        /// The offending token.
        token: String,
    },
    /// A tens word was followed by `zero`, as in `twenty zero`.
    #[error("expected one|two|three|... after '{tens}' but got zero")]
    ZeroAfterTens {
        /// The tens word preceding `zero`.
        tens: String,
    },
    /// A number token whose word is missing from the number table.
    #[error(transparent)]
    UnknownNumberWord(#[from] UnknownWordError),
}
