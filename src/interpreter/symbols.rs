use crate::interpreter::evaluator::{
    core::EvalResult,
    function::{builtin, log, sqrt},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the byte
/// offset of the call.
pub type BuiltinFn = fn(&[f64], usize) -> EvalResult<f64>;

/// A function that expressions may call.
#[derive(Debug)]
pub struct Builtin {
    /// The name used in expressions.
    pub name:  &'static str,
    /// The exact number of arguments.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// A named constant that expressions may reference.
#[derive(Debug)]
pub struct Constant {
    /// The name used in expressions.
    pub name:  &'static str,
    /// The value.
    pub value: f64,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every function an expression may call.
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => { arity: 1, func: builtin::sin },
    "cos"  => { arity: 1, func: builtin::cos },
    "tan"  => { arity: 1, func: builtin::tan },
    "sqrt" => { arity: 1, func: sqrt::sqrt },
    "abs"  => { arity: 1, func: builtin::abs },
    "log"  => { arity: 1, func: log::log10 },
    "ln"   => { arity: 1, func: log::ln },
}

/// Every constant an expression may reference.
pub static CONSTANTS: &[Constant] = &[Constant { name:  "pi",
                                                 value: std::f64::consts::PI, },
                                      Constant { name:  "e",
                                                 value: std::f64::consts::E, }];

