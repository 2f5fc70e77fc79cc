use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Follows `f64::powf`, so fractional and negative exponents work and
    /// overflow gives infinity. Two cases fail instead:
    /// - zero raised to a negative power is `DivisionByZero`;
    /// - a NaN result from non-NaN operands (a negative base with a fractional
    ///   exponent, whose real value does not exist) is `DomainError`.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0, 0).unwrap(), 1024.0);
    /// assert_eq!(Context::eval_pow(2.0, -1.0, 0).unwrap(), 0.5);
    /// assert!(Context::eval_pow(0.0, -1.0, 0).is_err());
    /// assert!(Context::eval_pow(-8.0, 1.0 / 3.0, 0).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64, position: usize) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }

        let result = base.powf(exponent);
        if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
            return Err(RuntimeError::DomainError { operation: "^".to_string(),
                                                   argument: base,
                                                   position });
        }
        Ok(result)
    }
}
