use std::sync::LazyLock;

use crate::{
    ast::{BinaryOperator, NodeKind, UnaryOperator},
    interpreter::symbols::{BUILTIN_TABLE, Builtin, CONSTANTS, Constant},
};

static STANDARD: LazyLock<Whitelist> = LazyLock::new(Whitelist::full);

/// The allow-list enforced by the validator.
///
/// A whitelist names the node kinds, operators, constants and functions an
/// expression may use. Anything it does not name is rejected. The full
/// whitelist permits everything in the symbol table; narrower ones are
/// derived from it with the `without_*` methods. There is no way to add a name
/// or operator that the symbol table does not define.
///
/// # Example
/// ```
/// use safecalc::{ast::BinaryOperator, interpreter::whitelist::Whitelist};
///
/// let whitelist = Whitelist::full().without_operator(BinaryOperator::Pow)
///                                  .without_name("tan");
///
/// assert!(!whitelist.allows_operator(BinaryOperator::Pow));
/// assert!(whitelist.function("tan").is_none());
/// assert!(whitelist.function("sin").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Whitelist {
    node_kinds:       Vec<NodeKind>,
    binary_operators: Vec<BinaryOperator>,
    unary_operators:  Vec<UnaryOperator>,
    constants:        Vec<&'static Constant>,
    functions:        Vec<&'static Builtin>,
}

impl Whitelist {
    /// Returns the process-wide full whitelist.
    ///
    /// Built on first use and never modified afterwards.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a whitelist permitting every node kind, operator, constant and
    /// function.
    #[must_use]
    pub fn full() -> Self {
        Self { node_kinds:       NodeKind::ALL.to_vec(),
               binary_operators: BinaryOperator::ALL.to_vec(),
               unary_operators:  UnaryOperator::ALL.to_vec(),
               constants:        CONSTANTS.iter().collect(),
               functions:        BUILTIN_TABLE.iter().collect(), }
    }

    /// Removes a node kind.
    #[must_use]
    pub fn without_node_kind(mut self, kind: NodeKind) -> Self {
        self.node_kinds.retain(|k| *k != kind);
        self
    }

    /// Removes a binary operator.
    #[must_use]
    pub fn without_operator(mut self, op: BinaryOperator) -> Self {
        self.binary_operators.retain(|o| *o != op);
        self
    }

    /// Removes a unary operator.
    #[must_use]
    pub fn without_unary_operator(mut self, op: UnaryOperator) -> Self {
        self.unary_operators.retain(|o| *o != op);
        self
    }

    /// Removes a constant. Unknown names are ignored.
    #[must_use]
    pub fn without_constant(mut self, name: &str) -> Self {
        self.constants.retain(|c| c.name != name);
        self
    }

    /// Removes a function. Unknown names are ignored.
    #[must_use]
    pub fn without_function(mut self, name: &str) -> Self {
        self.functions.retain(|f| f.name != name);
        self
    }

    /// Removes a name whether it is a constant or a function.
    #[must_use]
    pub fn without_name(self, name: &str) -> Self {
        self.without_constant(name).without_function(name)
    }

    /// Whether `kind` nodes may appear.
    #[must_use]
    pub fn allows_node_kind(&self, kind: NodeKind) -> bool {
        self.node_kinds.contains(&kind)
    }

    /// Whether the binary operator may appear.
    #[must_use]
    pub fn allows_operator(&self, op: BinaryOperator) -> bool {
        self.binary_operators.contains(&op)
    }

    /// Whether the unary operator may appear.
    #[must_use]
    pub fn allows_unary_operator(&self, op: UnaryOperator) -> bool {
        self.unary_operators.contains(&op)
    }

    /// Value of a permitted constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.iter().find(|c| c.name == name).map(|c| c.value)
    }

    /// A permitted function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'static Builtin> {
        self.functions.iter().find(|f| f.name == name).copied()
    }

    /// Names of the permitted constants.
    pub fn constant_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constants.iter().map(|c| c.name)
    }

    /// Names of the permitted functions.
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.name)
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::full()
    }
}
