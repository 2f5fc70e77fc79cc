/// Parser entry points, depth tracking and the result alias.
pub mod core;

/// Prefix operators and atoms (numbers, names, calls, groups).
pub mod unary;

/// Additive, multiplicative and power levels of the grammar.
pub mod binary;

/// Helpers shared by the parsing functions.
pub mod utils;
