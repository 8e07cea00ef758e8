use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Every operation is checked against the context's bounds before it is
    /// performed, so a result outside `[min_value, max_value]` is reported
    /// instead of returned.
    ///
    /// - `Add`: overflow if `max - right < left`, underflow if
    ///   `min - right > left`.
    /// - `Sub`: overflow if `max + right < left`, underflow if
    ///   `min + right > left`.
    /// - `Mul`: compares magnitudes, overflow if `max / |right| < |left|`. A
    ///   zero right operand never overflows.
    /// - `Div`: division by zero if `|right| <= epsilon`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use wordcalc::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval_binary(BinaryOperator::Mul, 3.0, 4.0), Ok(12.0));
    /// assert_eq!(context.eval_binary(BinaryOperator::Add, 9_999_999.0, 1.0),
    ///            Err(RuntimeError::Overflow { op: BinaryOperator::Add }));
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => self.eval_add(left, right),
            BinaryOperator::Sub => self.eval_sub(left, right),
            BinaryOperator::Mul => self.eval_mul(left, right),
            BinaryOperator::Div => self.eval_div(left, right),
        }
    }

    fn eval_add(&self, left: f64, right: f64) -> EvalResult<f64> {
        let op = BinaryOperator::Add;
        if self.max_value - right < left {
            return Err(RuntimeError::Overflow { op });
        }
        if self.min_value - right > left {
            return Err(RuntimeError::Underflow { op });
        }
        Ok(left + right)
    }

    fn eval_sub(&self, left: f64, right: f64) -> EvalResult<f64> {
        let op = BinaryOperator::Sub;
        if self.max_value + right < left {
            return Err(RuntimeError::Overflow { op });
        }
        if self.min_value + right > left {
            return Err(RuntimeError::Underflow { op });
        }
        Ok(left - right)
    }

    fn eval_mul(&self, left: f64, right: f64) -> EvalResult<f64> {
        let op = BinaryOperator::Mul;
        let left_abs = left.abs();
        let right_abs = right.abs();

        // Both guards divide by |right|.
        if right_abs != 0.0 {
            if self.max_value / right_abs < left_abs {
                return Err(RuntimeError::Overflow { op });
            }
            if self.min_value / right_abs > left_abs {
                return Err(RuntimeError::Underflow { op });
            }
        }
        Ok(left * right)
    }

    fn eval_div(&self, left: f64, right: f64) -> EvalResult<f64> {
        if right.abs() <= self.epsilon {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(left / right)
    }
}
