use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates `left / right`.
    ///
    /// A zero divisor of either sign is an error rather than an infinity.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_div(7.0, 2.0, 0).unwrap(), 3.5);
    /// assert!(Context::eval_div(1.0, -0.0, 0).is_err());
    /// ```
    pub fn eval_div(left: f64, right: f64, position: usize) -> EvalResult<f64> {
        if right == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(left / right)
    }

    /// Evaluates `left % right` as floored modulo (see [`floored_mod`]).
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_mod(-7.0, 3.0, 0).unwrap(), 2.0);
    /// assert!(Context::eval_mod(5.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_mod(left: f64, right: f64, position: usize) -> EvalResult<f64> {
        if right == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(floored_mod(left, right))
    }
}

/// Remainder whose sign follows the divisor.
///
/// `-7 % 3` is `2` and `7 % -3` is `-2`. A zero remainder carries the sign of
/// the divisor.
#[must_use]
pub fn floored_mod(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem == 0.0 {
        0.0_f64.copysign(right)
    } else if (right < 0.0) != (rem < 0.0) {
        rem + right
    } else {
        rem
    }
}
