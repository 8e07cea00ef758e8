/// Parser entry point and the token cursor shared by every grammar rule.
pub mod core;

/// Left-associative binary operators.
///
/// Implements the `expression` (`+`, `-`) and `term` (`*`, `/`) precedence
/// levels.
pub mod binary;

/// The `factor` level: unary minus and number literals.
pub mod unary;

/// English number phrases.
///
/// Combines ones, teens, tens, multipliers and the `and` connector into a
/// single integer, e.g. "nine hundred and ninety nine thousand".
pub mod lexical;
