/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression: empty input, unexpected tokens, unbalanced parentheses, trailing
/// input and exceeded limits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing the value of a validated tree,
/// such as division by zero or a domain error in a built-in function.
pub mod runtime_error;
/// Validation errors.
///
/// Contains the errors raised when a tree contains a node kind, operator or
/// name that the whitelist does not permit.
pub mod validation_error;

mod eval_failure;

pub use eval_failure::{EvalFailure, FailureKind, PUBLIC_MESSAGE};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use validation_error::ValidationError;
