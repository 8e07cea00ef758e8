use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur while evaluating the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A literal lies below the smallest representable value.
    #[error("number too small: {value}")]
    LiteralTooSmall {
        /// The rejected literal.
        value: i64,
    },
    /// A literal lies above the largest representable value.
    #[error("number too big: {value}")]
    LiteralTooBig {
        /// The rejected literal.
        value: i64,
    },
    /// The result of an operation would exceed the upper bound.
    #[error("overflow while {}", .op.gerund())]
    Overflow {
        /// The operation that overflowed.
        op: BinaryOperator,
    },
    /// The result of an operation would fall below the lower bound.
    #[error("underflow while {}", .op.gerund())]
    Underflow {
        /// The operation that underflowed.
        op: BinaryOperator,
    },
    /// The divisor was zero, or close enough to zero to be treated as such.
    #[error("can not divide by zero")]
    DivisionByZero,
}
