use crate::error::FailureKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The expression was empty or contained only whitespace.
    EmptyInput,
    /// The expression was longer than the configured maximum.
    InputTooLong {
        /// Length of the input in bytes.
        length: usize,
        /// The configured maximum.
        limit:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the matching opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// A numeric literal could not be converted to a number.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// Parentheses, calls or prefix operators were nested too deeply.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset where the limit was crossed.
        position: usize,
    },
}

impl ParseError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::EmptyInput => FailureKind::EmptyInput,
            Self::InputTooLong { .. } | Self::NestingTooDeep { .. } => FailureKind::LimitExceeded,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput
            | Self::ExpectedClosingParen { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::MalformedNumber { .. } => FailureKind::SyntaxError,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty expression."),

            Self::InputTooLong { length, limit } => write!(f,
                                                           "Expression is {length} bytes long, the maximum is {limit}."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after expression: {token}"),

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at {position}: Malformed number '{literal}'.")
            },

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at {position}: Expression is nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
