/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree produced by the parser and performs checked
/// arithmetic, so that every literal, intermediate and final value stays
/// within fixed bounds.
///
/// # Responsibilities
/// - Evaluates literals, negation and the four binary operations.
/// - Reports range errors, overflow, underflow and division by zero.
pub mod evaluator;
/// The lexer module tokenizes a line of input for the parser.
///
/// The lexer splits the raw text on operator spellings, symbolic or written
/// out in words, and turns the remaining operand segments into digit
/// literals and number-word tokens.
///
/// # Responsibilities
/// - Recognizes multi-word operators such as `divided by` as one token.
/// - Classifies number words using the number table.
/// - Reports unknown words.
pub mod lexer;
/// The number table maps English number words to their values.
///
/// The table is built once, is never mutated, and is shared by the lexer and
/// the parser.
pub mod number_table;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent parser over an explicit token cursor.
/// It handles operator precedence, unary minus and English number phrases,
/// and requires the whole line to be consumed.
///
/// # Responsibilities
/// - Converts tokens into an owned `Expr` tree.
/// - Validates the grammar and reports the first violation.
pub mod parser;
