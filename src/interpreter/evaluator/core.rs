use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    util::num::{MAX_VALUE, MIN_VALUE, i64_to_f64_bounded},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the limits arithmetic is checked against.
///
/// The defaults are the closed interval `[MIN_VALUE, MAX_VALUE]` and
/// `f64::EPSILON` as the smallest divisor magnitude that is not treated as
/// zero. A context holds no per-line state and can be reused for any number
/// of evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Smallest allowed value.
    pub min_value: f64,
    /// Largest allowed value.
    pub max_value: f64,
    /// Divisors whose magnitude is at or below this are rejected.
    pub epsilon:   f64,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self { min_value: MIN_VALUE,
               max_value: MAX_VALUE,
               epsilon:   f64::EPSILON, }
    }

    /// Evaluates a syntax tree.
    ///
    /// The walk is post-order. For binary nodes the right operand is
    /// evaluated before the left one, so when both fail the right side's
    /// error is reported. The first error aborts the whole evaluation.
    ///
    /// # Errors
    /// Any [`RuntimeError`]: a literal out of range, overflow, underflow or
    /// division by zero.
    ///
    /// # Example
    /// ```
    /// use wordcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::binary(Expr::number(7), BinaryOperator::Div, Expr::number(2));
    /// assert_eq!(Context::new().eval(&expr).unwrap(), 3.5);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::NumberLiteral { value } => self.eval_literal(*value)?,
            Expr::Negate { expr } => Self::eval_negate(self.eval(expr)?),
            Expr::BinaryOp { left, op, right } => {
                let right = self.eval(right)?;
                let left = self.eval(left)?;
                self.eval_binary(*op, left, right)?
            },
        };
        trace!(%expr, value, "evaluated node");
        Ok(value)
    }

    /// Converts a literal to `f64`, rejecting it if it lies outside the
    /// bounds.
    ///
    /// # Errors
    /// `LiteralTooSmall` or `LiteralTooBig`.
    pub fn eval_literal(&self, value: i64) -> EvalResult<f64> {
        i64_to_f64_bounded(value, self.min_value, self.max_value)
    }
}
