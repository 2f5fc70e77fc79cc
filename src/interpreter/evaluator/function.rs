/// Trigonometric functions and `abs`.
pub mod builtin;
/// Logarithm function implementations.
///
/// Supports the base-10 and natural logarithms.
pub mod log;
/// The `sqrt` (square root) function implementation.
pub mod sqrt;
