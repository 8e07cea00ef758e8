use std::{collections::HashMap, sync::LazyLock};

use crate::error::UnknownWordError;

/// Grammatical class of an English number word.
///
/// The class decides which token kind the tokenizer emits for the word and
/// which grammar rule the parser may use it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// `zero` through `nineteen`.
    OnesOrTeens,
    /// `twenty`, `thirty`, ..., `ninety`.
    Tens,
    /// `hundred`, `thousand`, `million`.
    Multiplier,
    /// The connector `and`, as in "one hundred and seven".
    And,
}

/// A number word together with its class and integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWord {
    /// Grammatical class of the word.
    pub class: WordClass,
    /// Integer value of the word. The connector `and` has value `0`.
    pub value: i64,
}

const ONES_OR_TEENS: [&str; 20] = ["zero",
                                   "one",
                                   "two",
                                   "three",
                                   "four",
                                   "five",
                                   "six",
                                   "seven",
                                   "eight",
                                   "nine",
                                   "ten",
                                   "eleven",
                                   "twelve",
                                   "thirteen",
                                   "fourteen",
                                   "fifteen",
                                   "sixteen",
                                   "seventeen",
                                   "eighteen",
                                   "nineteen"];

const TENS: [(&str, i64); 8] = [("twenty", 20),
                                 ("thirty", 30),
                                 ("forty", 40),
                                 ("fifty", 50),
                                 ("sixty", 60),
                                 ("seventy", 70),
                                 ("eighty", 80),
                                 ("ninety", 90)];

const MULTIPLIERS: [(&str, i64); 3] =
    [("hundred", 100), ("thousand", 1000), ("million", 1_000_000)];

static SHARED: LazyLock<NumberTable> = LazyLock::new(NumberTable::new);

/// Immutable mapping from lowercase English number words to their values.
///
/// A table is built once and then only read, so a single instance can be
/// shared by any number of tokenizers, parsers and threads. Use
/// [`NumberTable::shared`] for the process-wide instance.
#[derive(Debug, Clone)]
pub struct NumberTable {
    words: HashMap<&'static str, NumberWord>,
}

impl Default for NumberTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberTable {
    /// Builds a fresh table containing every supported number word.
    #[must_use]
    pub fn new() -> Self {
        let capacity = ONES_OR_TEENS.len() + TENS.len() + MULTIPLIERS.len() + 1;
        let mut words = HashMap::with_capacity(capacity);

        for (value, word) in (0..).zip(ONES_OR_TEENS) {
            words.insert(word, NumberWord { class: WordClass::OnesOrTeens,
                                            value });
        }
        for (word, value) in TENS {
            words.insert(word, NumberWord { class: WordClass::Tens,
                                            value });
        }
        for (word, value) in MULTIPLIERS {
            words.insert(word, NumberWord { class: WordClass::Multiplier,
                                            value });
        }
        words.insert("and", NumberWord { class: WordClass::And,
                                         value: 0 });

        Self { words }
    }

    /// Returns the process-wide table, building it on first use.
    ///
    /// Initialization happens exactly once no matter how many threads race to
    /// call this.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the class and value of `word`.
    ///
    /// # Errors
    /// Returns [`UnknownWordError`] if the word is not in the table. Matching
    /// is exact, so `"Five"` is unknown.
    ///
    /// # Example
    /// ```
    /// use wordcalc::interpreter::number_table::{NumberTable, WordClass};
    ///
    /// let table = NumberTable::new();
    /// let word = table.classify("forty").unwrap();
    /// assert_eq!(word.class, WordClass::Tens);
    /// assert_eq!(word.value, 40);
    /// assert!(table.classify("fourty").is_err());
    /// ```
    pub fn classify(&self, word: &str) -> Result<NumberWord, UnknownWordError> {
        self.words
            .get(word)
            .copied()
            .ok_or_else(|| UnknownWordError { word: word.to_string() })
    }

    /// Returns the integer value of `word`.
    ///
    /// # Errors
    /// Returns [`UnknownWordError`] if the word is not in the table.
    pub fn lookup(&self, word: &str) -> Result<i64, UnknownWordError> {
        self.classify(word).map(|w| w.value)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.words.len()
    }
}
