/// Dispatch from operator to implementation.
pub mod core;

/// `+`, `-`, `*`, `/` and `%`.
pub mod scalar;

/// `^`.
pub mod power;
