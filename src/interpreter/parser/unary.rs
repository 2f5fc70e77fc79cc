use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{Depth, ParseResult, parse_expression},
            utils::{Argument, parse_argument, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. They are right-associative, so
/// `-+-x` is parsed as `-(+(-x))`, and bind looser than `^`, so `-2 ^ 2` is
/// `-(2 ^ 2)`. Each prefix operator opens one nesting level.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        _ => return parse_power(tokens, depth),
    };

    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let operand = parse_unary(tokens, depth.descend(*position)?)?;
    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       position: *position })
}

/// Parses an atom, the base of the expression grammar.
///
/// Atoms are numeric literals, bare names, function calls and parenthesised
/// expressions. Any other token here is a syntax error, which is where inputs
/// like `* 2`, `2 +` or `2 ** 3` are rejected.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | IDENTIFIER ("(" arglist? ")")?
///           | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// The parsed atom or a `ParseError` on failure.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Number { value:    *value,
                                                                    position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, depth),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_call(tokens, name, *position, depth)
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. The inner expression is parsed one nesting level deeper.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `open`: Byte offset of the `(`.
/// - `depth`: Nesting depth of the group itself.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// `ExpectedClosingParen` if the input ends before the `)`, or if another
/// token stands where `)` is required.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth.descend(open)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

/// Parses a bare identifier or a function call.
///
/// A name immediately followed by `(` is a call; its arguments are separated
/// by commas and may be empty (`f()`), which validation later rejects on
/// arity. A `keyword = value` argument is recorded on the call rather than
/// treated as a syntax error so that validation reports it precisely. Any
/// other name is an [`Expr::Identifier`].
///
/// Grammar:
/// ```text
///     call    := IDENTIFIER "(" (argument ("," argument)*)? ")"
///     argument := IDENTIFIER "=" expression | expression
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `name`: The identifier.
/// - `position`: Byte offset of the identifier.
/// - `depth`: Nesting depth of the call itself. Arguments are parsed one
///   level deeper.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   position: usize,
                                   depth: Depth)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::LParen, open)) = tokens.peek() else {
        return Ok(Expr::Identifier { name: name.to_string(),
                                     position });
    };
    let open = *open;
    tokens.next();

    let inner = depth.descend(open)?;
    let arguments =
        parse_comma_separated(tokens, |tokens| parse_argument(tokens, inner), open)?;

    let mut args = Vec::new();
    let mut keywords = Vec::new();
    for argument in arguments {
        match argument {
            Argument::Positional(expr) => args.push(expr),
            Argument::Keyword(keyword) => keywords.push(keyword),
        }
    }

    Ok(Expr::Call { name: name.to_string(),
                    args,
                    keywords,
                    position })
}
