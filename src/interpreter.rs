/// The evaluator module computes the value of a validated tree.
///
/// The evaluator traverses the tree bottom-up, applies operators and builtin
/// functions, and reports runtime errors such as division by zero or a domain
/// error. It only accepts trees that passed validation.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens (numbers,
/// identifiers, operators, parentheses, commas) with their byte offsets. Any
/// character outside that set is a lexical error.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// enforces the grammar and the nesting limit but not the whitelist.
pub mod parser;
/// The symbol table: builtin functions and constants.
pub mod symbols;
/// The validator module checks a tree against a whitelist.
///
/// This is the security boundary: every node kind, operator and name must be
/// explicitly permitted before anything is computed.
pub mod validator;
/// The allow-list of node kinds, operators and names.
pub mod whitelist;
