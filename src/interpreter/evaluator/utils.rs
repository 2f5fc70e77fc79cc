use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Errors
/// `ArgumentCountMismatch` otherwise.
pub fn check_arity(function: &str,
                   args: &[f64],
                   expected: usize,
                   position: usize)
                   -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                  expected,
                                                  found: args.len(),
                                                  position })
    }
}

/// Turns a NaN produced from a non-NaN argument into a domain error.
///
/// Host math functions signal an undefined input by returning NaN (e.g.
/// `sin(inf)`); this reports it instead of passing the NaN on as a result.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::utils::guard_domain;
///
/// assert_eq!(guard_domain("sin", 0.0, 0.0, 0).unwrap(), 0.0);
/// assert!(guard_domain("sin", f64::INFINITY, f64::INFINITY.sin(), 0).is_err());
/// assert!(guard_domain("sin", f64::NAN, f64::NAN, 0).unwrap().is_nan());
/// ```
pub fn guard_domain(function: &str, argument: f64, result: f64, position: usize) -> EvalResult<f64> {
    if result.is_nan() && !argument.is_nan() {
        return Err(RuntimeError::DomainError { operation: function.to_string(),
                                               argument,
                                               position });
    }
    Ok(result)
}
