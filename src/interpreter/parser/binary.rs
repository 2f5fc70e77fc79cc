use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult},
            unary::{parse_atom, parse_unary},
        },
    },
};

/// Parses the lowest precedence level, `+` and `-`.
///
/// Both operators associate to the left: `5 - 2 - 1` is `(5 - 2) - 1`. Each
/// operator adds a level to the tree, and the chain fails with
/// `NestingTooDeep` once it no longer fits below `depth`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// A left-leaning chain of `Expr::BinaryOp` nodes, or the single term.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    let mut height = left.height();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            height = height.max(right.height()) + 1;
            depth.check_height(height, *position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses the `*`, `/` and `%` level.
///
/// Handles left-associative operators `*`, `/` and `%`, which share one
/// precedence level. Chains are height-checked like `+` and `-`.
///
/// The rule is: `term := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    let mut height = left.height();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            height = height.max(right.height()) + 1;
            depth.check_height(height, *position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an optional `^` after an atom.
///
/// The base is an atom, so a prefix operator in front of it applies to the
/// whole power (`-2 ^ 2` is `-(2 ^ 2)`). The exponent is a full unary
/// expression, which makes `^` right-associative (`2 ^ 3 ^ 2` is
/// `2 ^ (3 ^ 2)`) and allows signed exponents (`2 ^ -1`).
///
/// The rule is: `power := atom ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the base.
/// - `depth`: Nesting depth of this expression. The exponent is parsed one
///   level deeper.
///
/// # Returns
/// An exponentiation expression tree, or the atom itself.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_atom(tokens, depth)?;
    if let Some((token, position)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && matches!(op, BinaryOperator::Pow)
    {
        tokens.next();
        let exponent = parse_unary(tokens, depth.descend(*position)?)?;
        depth.check_height(base.height().max(exponent.height()) + 1, *position)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op,
                                   right: Box::new(exponent),
                                   position: *position });
    }
    Ok(base)
}

/// Returns the binary operator a token stands for, if any.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+`, `-`, `*`, `/`,
/// `%` or `^`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
