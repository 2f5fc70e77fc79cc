use crate::interpreter::evaluator::{
    core::EvalResult,
    utils::{check_arity, guard_domain},
};

/// Applies a unary real function to a single argument.
///
/// The generated functions accept exactly one argument. A NaN result from a
/// non-NaN argument is reported as a domain error.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0], 0).unwrap();
/// assert_eq!(r, 1.0);
///
/// assert!(sin(&[f64::INFINITY], 0).is_err());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("The `", stringify!($fname), "` builtin.")]
        pub fn $fname(args: &[f64], position: usize) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1, position)?;

            let x = args[0];
            guard_domain(stringify!($fname), x, x.$real_fn(), position)
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(abs, abs);
