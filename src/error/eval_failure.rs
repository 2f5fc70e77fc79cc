use crate::error::{ParseError, RuntimeError, ValidationError};

/// The message shown to untrusted callers for every kind of failure.
pub const PUBLIC_MESSAGE: &str = "Invalid expression";

/// Any failure of the parse, validate and evaluate pipeline.
///
/// Wraps the error of the phase that failed. Use [`EvalFailure::kind`] to
/// branch on the category and [`EvalFailure::public_message`] for text that
/// is safe to hand back to whoever submitted the expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalFailure {
    /// The text could not be turned into a tree.
    Parse(ParseError),
    /// The tree falls outside the whitelist.
    Validation(ValidationError),
    /// The value could not be computed.
    Runtime(RuntimeError),
}

/// The category of an [`EvalFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Empty or whitespace-only input.
    EmptyInput,
    /// Malformed text.
    SyntaxError,
    /// Input length or nesting depth over the configured limit.
    LimitExceeded,
    /// A node kind outside the whitelist.
    UnsupportedConstruct,
    /// A binary operator outside the whitelist.
    UnsupportedOperator,
    /// A unary operator outside the whitelist.
    UnsupportedUnaryOperator,
    /// A bare name that is not a whitelisted constant.
    UnknownIdentifier(String),
    /// A call target that is not a whitelisted function.
    UnknownFunction(String),
    /// Wrong argument count for a known function.
    ArityMismatch,
    /// A call with `name = value` arguments.
    KeywordArgumentsNotAllowed,
    /// Argument outside a function's domain.
    DomainError,
    /// Zero divisor or modulus.
    DivisionByZero,
    /// Inconsistent internal state; not reachable through the public API.
    Internal,
}

impl FailureKind {
    /// Returns `true` for the categories produced by the parser.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::SyntaxError | Self::LimitExceeded)
    }

    /// Returns `true` for the categories produced by the validator.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self,
                 Self::UnsupportedConstruct
                 | Self::UnsupportedOperator
                 | Self::UnsupportedUnaryOperator
                 | Self::UnknownIdentifier(_)
                 | Self::UnknownFunction(_)
                 | Self::ArityMismatch
                 | Self::KeywordArgumentsNotAllowed)
    }
}

impl EvalFailure {
    /// Returns the failure category.
    ///
    /// # Example
    /// ```
    /// use safecalc::{error::FailureKind, evaluate_expression};
    ///
    /// let failure = evaluate_expression("exec(1)").unwrap_err();
    /// assert_eq!(failure.kind(), FailureKind::UnknownFunction("exec".to_string()));
    /// ```
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Validation(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the generic message that hides the failure detail.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        PUBLIC_MESSAGE
    }
}

impl From<ParseError> for EvalFailure {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<ValidationError> for EvalFailure {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RuntimeError> for EvalFailure {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
