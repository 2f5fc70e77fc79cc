use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-` and `*` are computed directly. `/`, `%` and `^` go through
    /// their own checked helpers.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, 3.0, 4.0, 0);
    /// assert_eq!(result.unwrap(), 7.0);
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => Self::eval_div(left, right, position),
            Mod => Self::eval_mod(left, right, position),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
