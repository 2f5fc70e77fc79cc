use crate::error::FailureKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while computing a validated tree.
pub enum RuntimeError {
    /// A divisor or modulus was zero, or zero was raised to a negative power.
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A function or operator was applied outside its mathematical domain.
    DomainError {
        /// The function name or operator symbol.
        operation: String,
        /// The offending argument (the base, for `^`).
        argument:  f64,
        /// Byte offset of the call or operator.
        position:  usize,
    },
    /// A built-in received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function name.
        function: String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// A name in a validated tree did not resolve in the whitelist it was
    /// validated against.
    UnresolvedSymbol {
        /// The name.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::DivisionByZero { .. } => FailureKind::DivisionByZero,
            Self::DomainError { .. } => FailureKind::DomainError,
            Self::ArgumentCountMismatch { .. } => FailureKind::ArityMismatch,
            Self::UnresolvedSymbol { .. } => FailureKind::Internal,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at {position}: Division by zero.")
            },
            Self::DomainError { operation,
                                argument,
                                position, } => write!(f,
                                                      "Error at {position}: Math domain error: {operation} is undefined for {argument}."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at {position}: '{function}' takes {expected} argument(s) but {found} were given."),
            Self::UnresolvedSymbol { name, position } => {
                write!(f, "Error at {position}: Symbol '{name}' did not resolve.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
