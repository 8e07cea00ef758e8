use thiserror::Error;

/// A word that has no entry in the number table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown number word '{word}'")]
pub struct UnknownWordError {
    /// The word that was looked up.
    pub word: String,
}

/// Represents all errors that can occur while splitting a line into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A word in a number phrase is neither an operator nor a number word.
    #[error("unknown token '{word}'")]
    UnknownToken {
        /// The unrecognized word.
        word: String,
    },
}

impl From<UnknownWordError> for TokenizeError {
    fn from(e: UnknownWordError) -> Self {
        Self::UnknownToken { word: e.word }
    }
}
