use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Computes the base-10 logarithm, exposed as `log`.
///
/// Non-positive arguments fail with a domain error.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::log::log10;
///
/// assert_eq!(log10(&[100.0], 0).unwrap(), 2.0);
/// assert!(log10(&[0.0], 0).is_err());
/// ```
pub fn log10(args: &[f64], position: usize) -> EvalResult<f64> {
    check_arity("log", args, 1, position)?;
    positive("log", args[0], position).map(f64::log10)
}

/// Computes the natural logarithm, exposed as `ln`.
///
/// Non-positive arguments fail with a domain error.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::log::ln;
///
/// assert_eq!(ln(&[1.0], 0).unwrap(), 0.0);
/// assert!(ln(&[-2.0], 0).is_err());
/// ```
pub fn ln(args: &[f64], position: usize) -> EvalResult<f64> {
    check_arity("ln", args, 1, position)?;
    positive("ln", args[0], position).map(f64::ln)
}

fn positive(function: &str, x: f64, position: usize) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(RuntimeError::DomainError { operation: function.to_string(),
                                               argument: x,
                                               position });
    }
    Ok(x)
}
