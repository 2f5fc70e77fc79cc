//! # safecalc
//!
//! safecalc is a sandboxed arithmetic expression evaluator written in Rust.
//! It parses untrusted text into an expression tree, checks every node
//! against a strict allow-list of operators, functions and constants, and
//! only then computes a single `f64`.
//!
//! ```
//! use safecalc::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate_expression("sqrt(16) + log(100)").unwrap(), 6.0);
//! assert!(evaluate_expression("__import__('os')").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{EvalFailure, ParseError},
    interpreter::{
        evaluator::core::evaluate, parser::core::parse_source, validator::validate,
        whitelist::Whitelist,
    },
    limits::Limits,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The tree is built by the parser, checked by the
/// validator and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the five node kinds and their operators.
/// - Attaches byte offsets to nodes for error reporting.
pub mod ast;
/// Provides error types for parsing, validation and evaluation.
///
/// Each phase has its own error enum; [`EvalFailure`](error::EvalFailure)
/// wraps whichever phase failed and maps it to a
/// [`FailureKind`](error::FailureKind).
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches byte offsets and offending names for diagnostics.
/// - Offers a generic public message that hides the detail.
pub mod error;
/// Orchestrates lexing, parsing, validation and evaluation.
///
/// # Responsibilities
/// - Converts text to tokens and tokens to a tree.
/// - Enforces the whitelist on the tree.
/// - Computes the value of a validated tree.
pub mod interpreter;
/// Caps on input length and nesting depth.
pub mod limits;
/// Formatting helpers.
pub mod util;

/// A configured evaluator.
///
/// Bundles the [`Limits`] applied while parsing and the [`Whitelist`] applied
/// while validating. A calculator holds no mutable state, so one instance can
/// be shared across threads.
///
/// # Example
/// ```
/// use safecalc::{Calculator, interpreter::whitelist::Whitelist, limits::Limits};
///
/// let whitelist = Whitelist::full().without_name("tan");
/// let calculator = Calculator::new(Limits::default().with_max_depth(10), &whitelist);
///
/// assert_eq!(calculator.evaluate("sin(0)").unwrap(), 0.0);
/// assert!(calculator.evaluate("tan(0)").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'w> {
    limits:    Limits,
    whitelist: &'w Whitelist,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self { limits:    Limits::default(),
               whitelist: Whitelist::standard(), }
    }
}

impl<'w> Calculator<'w> {
    /// Creates a calculator with the given limits and whitelist.
    #[must_use]
    pub const fn new(limits: Limits, whitelist: &'w Whitelist) -> Self {
        Self { limits,
               whitelist }
    }

    /// The limits applied while parsing.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// The whitelist applied while validating.
    #[must_use]
    pub const fn whitelist(&self) -> &'w Whitelist {
        self.whitelist
    }

    /// Parses an expression without validating or evaluating it.
    pub fn parse(&self, source: &str) -> Result<Expr, ParseError> {
        parse_source(source, &self.limits)
    }

    /// Parses, validates and evaluates an expression.
    ///
    /// Nothing is computed unless the whole tree passes validation. Every
    /// failure is logged at debug level with its phase and specific reason.
    ///
    /// # Errors
    /// The [`EvalFailure`] of the first phase that failed.
    pub fn evaluate(&self, source: &str) -> Result<f64, EvalFailure> {
        let result = self.run(source);
        match &result {
            Ok(value) => log::debug!("evaluated {source:?} to {value}"),
            Err(failure) => {
                let kind = failure.kind();
                let phase = if kind.is_syntax() {
                    "malformed"
                } else if kind.is_rejection() {
                    "rejected"
                } else {
                    "failed to compute"
                };
                log::debug!("{phase} {source:?}: {kind:?}: {failure}");
            },
        }
        result
    }

    fn run(&self, source: &str) -> Result<f64, EvalFailure> {
        let expr = self.parse(source)?;
        let validated = validate(&expr, self.whitelist)?;
        Ok(evaluate(validated)?)
    }
}

/// Evaluates one expression with the standard whitelist and default limits.
///
/// # Errors
/// Returns an [`EvalFailure`] if the text is malformed, uses anything outside
/// the whitelist, or cannot be computed (division by zero, domain error).
///
/// # Examples
/// ```
/// use safecalc::{error::FailureKind, evaluate_expression};
///
/// assert_eq!(evaluate_expression("-2 ^ 2").unwrap(), -4.0);
///
/// let failure = evaluate_expression("sqrt(-1)").unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::DomainError);
/// assert_eq!(failure.public_message(), "Invalid expression");
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, EvalFailure> {
    Calculator::default().evaluate(source)
}
