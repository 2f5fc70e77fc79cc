/// Display formatting for results.
///
/// Renders an `f64` result the way it is shown to the person who submitted
/// the expression: integers without a fractional part, everything else with
/// ten significant digits.
pub mod format;
