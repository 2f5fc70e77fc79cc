use crate::{
    ast::{BinaryOperator, NodeKind, UnaryOperator},
    error::FailureKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way a tree can fall outside the whitelist.
pub enum ValidationError {
    /// The node kind is not permitted.
    UnsupportedConstruct {
        /// The rejected kind.
        kind:     NodeKind,
        /// Byte offset of the node.
        position: usize,
    },
    /// The binary operator is not permitted.
    UnsupportedOperator {
        /// The rejected operator.
        op:       BinaryOperator,
        /// Byte offset of the operator.
        position: usize,
    },
    /// The unary operator is not permitted.
    UnsupportedUnaryOperator {
        /// The rejected operator.
        op:       UnaryOperator,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A bare name is not a known constant.
    UnknownIdentifier {
        /// The name.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// A call target is not a known function.
    UnknownFunction {
        /// The name.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// A known function received the wrong number of arguments.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// A call used a `name = value` argument.
    KeywordArgumentsNotAllowed {
        /// The function name.
        function: String,
        /// The first keyword used.
        keyword:  String,
        /// Byte offset of the keyword.
        position: usize,
    },
}

impl ValidationError {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnsupportedConstruct { .. } => FailureKind::UnsupportedConstruct,
            Self::UnsupportedOperator { .. } => FailureKind::UnsupportedOperator,
            Self::UnsupportedUnaryOperator { .. } => FailureKind::UnsupportedUnaryOperator,
            Self::UnknownIdentifier { name, .. } => FailureKind::UnknownIdentifier(name.clone()),
            Self::UnknownFunction { name, .. } => FailureKind::UnknownFunction(name.clone()),
            Self::ArityMismatch { .. } => FailureKind::ArityMismatch,
            Self::KeywordArgumentsNotAllowed { .. } => FailureKind::KeywordArgumentsNotAllowed,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedConstruct { kind, position } => {
                write!(f, "Error at {position}: Unsupported expression: {kind}.")
            },
            Self::UnsupportedOperator { op, position } => {
                write!(f, "Error at {position}: Unsupported operator '{op}'.")
            },
            Self::UnsupportedUnaryOperator { op, position } => {
                write!(f, "Error at {position}: Unsupported unary operator '{op}'.")
            },
            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at {position}: Unknown identifier '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at {position}: Unsupported function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error at {position}: '{name}' takes {expected} argument(s) but {found} were given."),
            Self::KeywordArgumentsNotAllowed { function,
                                               keyword,
                                               position, } => write!(f,
                                                                     "Error at {position}: Keyword arguments are not allowed ('{keyword}' in call to '{function}')."),
        }
    }
}

impl std::error::Error for ValidationError {}
