/// Binary operator evaluation logic.
///
/// Arithmetic on two `f64` operands, including the zero-divisor and domain
/// checks for `/`, `%` and `^`.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic and the evaluation context.
///
/// Contains the tree walk, name dispatch through the whitelist and the public
/// [`evaluate`](core::evaluate) entry point.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides arity and domain checks shared by the builtin functions.
pub mod utils;

/// Builtin function implementations.
///
/// Handles the functions listed in the symbol table.
pub mod function;
