use crate::{
    ast::Expr,
    error::ValidationError,
    interpreter::whitelist::Whitelist,
};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A tree that has passed validation against a whitelist.
///
/// Only [`validate`] creates this handle, and the evaluator only accepts this
/// handle, so an unvalidated tree cannot be evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a> {
    expr:      &'a Expr,
    whitelist: &'a Whitelist,
}

impl<'a> Validated<'a> {
    /// The validated tree.
    #[must_use]
    pub const fn expr(&self) -> &'a Expr {
        self.expr
    }

    /// The whitelist the tree was validated against.
    #[must_use]
    pub const fn whitelist(&self) -> &'a Whitelist {
        self.whitelist
    }
}

/// Checks that every node of the tree is permitted by the whitelist.
///
/// For each node, in this order:
/// 1. its kind must be permitted;
/// 2. its operator must be permitted, or its name must be a permitted constant
///    (for identifiers) or function (for calls);
/// 3. a call must not have keyword arguments;
/// 4. every child must validate, left to right;
/// 5. a call must supply exactly the function's arity.
///
/// The first failure is returned and the rest of the tree is not examined.
///
/// # Errors
/// A [`ValidationError`] naming the first construct outside the whitelist.
///
/// # Example
/// ```
/// use safecalc::{
///     interpreter::{validator::validate, whitelist::Whitelist},
///     limits::Limits,
///     interpreter::parser::core::parse_source,
/// };
///
/// let whitelist = Whitelist::standard();
/// let expr = parse_source("sqrt(2) * pi", &Limits::default()).unwrap();
/// assert!(validate(&expr, whitelist).is_ok());
///
/// let expr = parse_source("__import__(os)", &Limits::default()).unwrap();
/// assert!(validate(&expr, whitelist).is_err());
/// ```
pub fn validate<'a>(expr: &'a Expr, whitelist: &'a Whitelist) -> ValidationResult<Validated<'a>> {
    check_node(expr, whitelist)?;
    Ok(Validated { expr,
                   whitelist })
}

fn check_node(expr: &Expr, whitelist: &Whitelist) -> ValidationResult<()> {
    let kind = expr.kind();
    if !whitelist.allows_node_kind(kind) {
        return Err(ValidationError::UnsupportedConstruct { kind,
                                                           position: expr.position() });
    }

    match expr {
        Expr::Number { .. } => Ok(()),

        Expr::Identifier { name, position } => {
            if whitelist.constant(name).is_none() {
                return Err(ValidationError::UnknownIdentifier { name:     name.clone(),
                                                                position: *position, });
            }
            Ok(())
        },

        Expr::UnaryOp { op,
                        operand,
                        position, } => {
            if !whitelist.allows_unary_operator(*op) {
                return Err(ValidationError::UnsupportedUnaryOperator { op:       *op,
                                                                       position: *position, });
            }
            check_node(operand, whitelist)
        },

        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            if !whitelist.allows_operator(*op) {
                return Err(ValidationError::UnsupportedOperator { op:       *op,
                                                                  position: *position, });
            }
            check_node(left, whitelist)?;
            check_node(right, whitelist)
        },

        Expr::Call { name,
                     args,
                     keywords,
                     position, } => {
            let builtin =
                whitelist.function(name)
                         .ok_or_else(|| ValidationError::UnknownFunction { name:     name.clone(),
                                                                           position: *position, })?;

            if let Some(keyword) = keywords.first() {
                return Err(ValidationError::KeywordArgumentsNotAllowed { function: name.clone(),
                                                                         keyword:  keyword.name
                                                                                          .clone(),
                                                                         position: keyword.position, });
            }

            for arg in args {
                check_node(arg, whitelist)?;
            }

            if args.len() != builtin.arity {
                return Err(ValidationError::ArityMismatch { name:     name.clone(),
                                                            expected: builtin.arity,
                                                            found:    args.len(),
                                                            position: *position, });
            }
            Ok(())
        },
    }
}
