use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Computes the square root of a non-negative value.
///
/// Negative arguments have no real square root and fail with a domain error
/// rather than returning NaN. `sqrt(-0)` is `-0`.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[16.0], 0).unwrap(), 4.0);
/// assert!(sqrt(&[-1.0], 0).is_err());
/// ```
pub fn sqrt(args: &[f64], position: usize) -> EvalResult<f64> {
    check_arity("sqrt", args, 1, position)?;

    let x = args[0];
    if x < 0.0 {
        return Err(RuntimeError::DomainError { operation: "sqrt".to_string(),
                                               argument: x,
                                               position });
    }
    Ok(x.sqrt())
}
