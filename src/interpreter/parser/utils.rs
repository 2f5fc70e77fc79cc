use std::iter::Peekable;

use crate::{
    ast::{Expr, KeywordArgument},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Depth, ParseResult, parse_expression},
    },
};

/// One entry of a call's argument list.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::interpreter::parser) enum Argument {
    /// A plain expression.
    Positional(Expr),
    /// A `name = value` pair.
    Keyword(KeywordArgument),
}

/// Parses a comma-separated list of items until the closing `)`.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list. A trailing comma
/// (`f(1,)`) is an error, since the item after it fails to parse.
///
/// Grammar: `list := ")" | item ("," item)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or `)`.
/// - `parse_item`: Parser for one element.
/// - `open`: Byte offset of the opening parenthesis, for error reporting.
///
/// # Returns
/// The items in source order.
///
/// # Errors
/// The first error from `parse_item`. `UnexpectedToken` if anything other
/// than `,` or `)` follows an item, and `ExpectedClosingParen` if the input
/// ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or ')', found {tok}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
    Ok(items)
}

/// Parses one call argument.
///
/// An identifier directly followed by `=` starts a keyword argument; anything
/// else is parsed as a positional expression. This needs two tokens of
/// lookahead, which is taken on a clone of the iterator.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the argument.
/// - `depth`: Nesting depth of the argument list.
pub(in crate::interpreter::parser) fn parse_argument<'a, I>(tokens: &mut Peekable<I>,
                                                            depth: Depth)
                                                            -> ParseResult<Argument>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(name), position)) = lookahead.next()
       && let Some((Token::Equals, _)) = lookahead.next()
    {
        tokens.next();
        tokens.next();
        let value = parse_expression(tokens, depth)?;
        return Ok(Argument::Keyword(KeywordArgument { name: name.clone(),
                                                      value,
                                                      position: *position }));
    }

    parse_expression(tokens, depth).map(Argument::Positional)
}
