use crate::interpreter::evaluator::core::Context;

impl Context {
    /// Negates a value.
    ///
    /// Cannot leave the bounds, since they are symmetric around zero.
    ///
    /// # Example
    /// ```
    /// use wordcalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_negate(5.0), -5.0);
    /// assert_eq!(Context::eval_negate(-2.5), 2.5);
    /// ```
    #[must_use]
    pub const fn eval_negate(value: f64) -> f64 {
        -value
    }
}
