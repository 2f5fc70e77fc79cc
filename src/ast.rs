/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of five node kinds. The parser may build any of them
/// from any input, so holding an `Expr` says nothing about whether it is safe
/// to evaluate; that is decided by
/// [`validate`](crate::interpreter::validator::validate).
///
/// Every node records the byte offset of the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `2`, `.5` or `1.5e10`.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A bare name, expected to resolve to a constant (e.g. `pi`).
    Identifier {
        /// The name as written.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A prefix operation (`+x`, `-x`).
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (`a + b`, `a ^ b`, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:     String,
        /// Positional arguments, in source order.
        args:     Vec<Self>,
        /// `name = value` arguments. Never accepted by validation.
        keywords: Vec<KeywordArgument>,
        /// Byte offset of the function name.
        position: usize,
    },
}

/// A `name = value` argument inside a call's argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordArgument {
    /// The keyword.
    pub name:     String,
    /// The value expression.
    pub value:    Expr,
    /// Byte offset of the keyword.
    pub position: usize,
}

/// The kind of an [`Expr`] node, without its payload.
///
/// Used by the whitelist to describe which node kinds may appear in a tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Expr::Number`]
    Number,
    /// [`Expr::Identifier`]
    Identifier,
    /// [`Expr::UnaryOp`]
    UnaryOp,
    /// [`Expr::BinaryOp`]
    BinaryOp,
    /// [`Expr::Call`]
    Call,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Number,
                                Self::Identifier,
                                Self::UnaryOp,
                                Self::BinaryOp,
                                Self::Call];
}

impl Expr {
    /// Returns the byte offset of the token that introduced this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Identifier { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }

    /// Returns the number of edges on the longest path from this node to a
    /// leaf. A number or identifier has height 0.
    ///
    /// Walks the tree with an explicit stack, so any height can be measured.
    ///
    /// # Example
    /// ```
    /// use safecalc::{interpreter::parser::core::parse_source, limits::Limits};
    ///
    /// let expr = parse_source("1 + 2 * -3", &Limits::default()).unwrap();
    /// assert_eq!(expr.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 0)];
        while let Some((expr, level)) = pending.pop() {
            height = height.max(level);
            match expr {
                Self::Number { .. } | Self::Identifier { .. } => {},
                Self::UnaryOp { operand, .. } => pending.push((operand, level + 1)),
                Self::BinaryOp { left, right, .. } => {
                    pending.push((left, level + 1));
                    pending.push((right, level + 1));
                },
                Self::Call { args, keywords, .. } => {
                    pending.extend(args.iter().map(|arg| (arg, level + 1)));
                    pending.extend(keywords.iter().map(|keyword| (&keyword.value, level + 1)));
                },
            }
        }
        height
    }

    /// Returns the kind of this node.
    ///
    /// # Example
    /// ```
    /// use safecalc::ast::{Expr, NodeKind};
    ///
    /// let expr = Expr::Number { value:    1.0,
    ///                           position: 0, };
    /// assert_eq!(expr.kind(), NodeKind::Number);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Number { .. } => NodeKind::Number,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::UnaryOp { .. } => NodeKind::UnaryOp,
            Self::BinaryOp { .. } => NodeKind::BinaryOp,
            Self::Call { .. } => NodeKind::Call,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Every binary operator the parser can produce.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod, Self::Pow];
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl UnaryOperator {
    /// Every unary operator the parser can produce.
    pub const ALL: [Self; 2] = [Self::Plus, Self::Minus];
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::UnaryOp => "unary operation",
            Self::BinaryOp => "binary operation",
            Self::Call => "function call",
        };
        write!(f, "{kind}")
    }
}
