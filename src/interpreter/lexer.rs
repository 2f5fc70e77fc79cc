use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an expression.
///
/// Only the characters that can take part in an arithmetic expression have a
/// token. Everything else (`.` outside a number, `;`, `:`, quotes, brackets,
/// non-ASCII letters) fails to lex, so it never reaches the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `1.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]*\.?[0-9]+[eE][+-]?", reject_exponent)]
    #[regex(r"[0-9]+\.[eE][+-]?", reject_exponent)]
    Number(f64),
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`, only meaningful between a keyword and its value in a call.
    #[token("=")]
    Equals,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
        }
    }
}

/// Splits the source into `(token, byte offset)` pairs.
///
/// # Errors
/// - `MalformedNumber` for a literal whose exponent has no digits (`1e`,
///   `2.5E+`).
/// - `UnexpectedToken` for any character outside the token set.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * pi").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 2),
///                 (Token::Identifier("pi".to_string()), 4)]);
///
/// assert!(tokenize("abs(1);print(2)").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = source.get(lexer.span()).unwrap_or_default();
                return Err(if slice.contains(|c: char| c.is_ascii_digit()) {
                               ParseError::MalformedNumber { literal: slice.to_string(),
                                                             position }
                           } else {
                               ParseError::UnexpectedToken { token: slice.to_string(),
                                                             position }
                           });
            },
        }
    }

    log::trace!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals too large for `f64` become
///   infinity.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Fails a literal that ends in an exponent marker without digits.
///
/// Without this, `1e+` would lex as `1`, `e`, `+` and be reported as a
/// dangling operator rather than as a bad number.
fn reject_exponent(_: &logos::Lexer<Token>) -> Option<f64> {
    None
}
