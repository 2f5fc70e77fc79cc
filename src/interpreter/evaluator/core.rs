use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{validator::Validated, whitelist::Whitelist},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context.
///
/// The only state is the whitelist the tree was validated against, used to
/// resolve constant and function names. The context is never mutated, so one
/// evaluation cannot affect another.
pub struct Context<'a> {
    whitelist: &'a Whitelist,
}

/// Computes the value of a validated tree.
///
/// Operands and arguments are evaluated before the operator or function that
/// consumes them, left operand before right.
///
/// # Errors
/// A [`RuntimeError`] for division by zero or a domain error.
///
/// # Example
/// ```
/// use safecalc::{
///     interpreter::{
///         evaluator::core::evaluate, parser::core::parse_source, validator::validate,
///         whitelist::Whitelist,
///     },
///     limits::Limits,
/// };
///
/// let expr = parse_source("2 ^ 3 ^ 2", &Limits::default()).unwrap();
/// let validated = validate(&expr, Whitelist::standard()).unwrap();
/// assert_eq!(evaluate(validated).unwrap(), 512.0);
/// ```
pub fn evaluate(validated: Validated<'_>) -> EvalResult<f64> {
    Context { whitelist: validated.whitelist() }.eval(validated.expr())
}

impl Context<'_> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant. Names are looked
    /// up in the whitelist; a miss means the tree was not validated against
    /// this whitelist and yields `UnresolvedSymbol`.
    fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, position } => self.eval_identifier(name, *position),
            Expr::UnaryOp { op, operand, .. } => {
                let value = self.eval(operand)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::Call { name,
                         args,
                         position,
                         .. } => self.eval_call(name, args, *position),
        }
    }

    fn eval_identifier(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.whitelist
            .constant(name)
            .ok_or_else(|| RuntimeError::UnresolvedSymbol { name: name.to_string(),
                                                            position })
    }

    /// Evaluates a function call.
    ///
    /// Arguments are evaluated in order, then passed to the builtin, which
    /// checks its own arity.
    fn eval_call(&self, name: &str, args: &[Expr], position: usize) -> EvalResult<f64> {
        let builtin =
            self.whitelist
                .function(name)
                .ok_or_else(|| RuntimeError::UnresolvedSymbol { name: name.to_string(),
                                                                position })?;

        let values = args.iter()
                         .map(|arg| self.eval(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        (builtin.func)(&values, position)
    }
}
