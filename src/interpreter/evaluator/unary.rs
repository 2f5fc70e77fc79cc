use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Minus`: numeric negation.
    ///
    /// Neither can fail.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Minus, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, 5.0), 5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}
