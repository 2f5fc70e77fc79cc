use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
    limits::Limits,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Current nesting depth of the parse, and the maximum allowed.
///
/// Copied into every parsing function. Functions that open a new nesting level
/// call [`Depth::descend`] before recursing; functions that combine operands
/// into a new node call [`Depth::check_height`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    max:     usize,
}

impl Depth {
    /// Starts at depth zero with the given maximum.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { current: 0,
               max }
    }

    /// Returns the depth one level down.
    ///
    /// # Errors
    /// `NestingTooDeep` if the new depth exceeds the maximum.
    pub const fn descend(self, position: usize) -> ParseResult<Self> {
        let current = self.current + 1;
        if current > self.max {
            return Err(ParseError::NestingTooDeep { limit: self.max,
                                                    position });
        }
        Ok(Self { current,
                  max: self.max })
    }

    /// Checks that a node of the given height fits below the current depth.
    ///
    /// Left-associative chains such as `1 + 1 + 1` grow the tree without
    /// descending, so the parser measures them here. A tree accepted at depth
    /// zero is never taller than the maximum.
    ///
    /// # Errors
    /// `NestingTooDeep` if `current + height` exceeds the maximum.
    pub const fn check_height(self, height: usize, position: usize) -> ParseResult<()> {
        if self.current + height > self.max {
            return Err(ParseError::NestingTooDeep { limit: self.max,
                                                    position });
        }
        Ok(())
    }
}

/// Parses a full expression.
///
/// This is the entry point for recursive parsing; it begins at the lowest
/// precedence level.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Parses a complete source string into a tree.
///
/// The source must hold exactly one expression: empty input and input left
/// over after the expression are both errors.
///
/// # Errors
/// - `InputTooLong` if the source exceeds `limits.max_length` bytes.
/// - `EmptyInput` if the source is empty or whitespace-only.
/// - Any lexing or parsing error, including `NestingTooDeep`.
/// - `UnexpectedTrailingTokens` if a complete expression is followed by more
///   tokens.
///
/// # Example
/// ```
/// use safecalc::{ast::Expr, interpreter::parser::core::parse_source, limits::Limits};
///
/// let expr = parse_source("  42 ", &Limits::default()).unwrap();
/// assert_eq!(expr,
///            Expr::Number { value:    42.0,
///                           position: 2, });
///
/// assert!(parse_source("(1 + 2", &Limits::default()).is_err());
/// assert!(parse_source("1 2", &Limits::default()).is_err());
/// ```
pub fn parse_source(source: &str, limits: &Limits) -> ParseResult<Expr> {
    if source.len() > limits.max_length {
        return Err(ParseError::InputTooLong { length: source.len(),
                                              limit:  limits.max_length, });
    }
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, Depth::new(limits.max_depth))?;

    if let Some((tok, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}
