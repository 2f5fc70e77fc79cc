/// Default maximum input length, in bytes.
pub const DEFAULT_MAX_LENGTH: usize = 4096;
/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Caps applied to every expression before and during parsing.
///
/// `max_length` is checked on the raw text before lexing. `max_depth` bounds
/// the height of the parsed tree: every group, call, prefix operator and
/// binary operator on the path from the root to a leaf counts one level. This
/// in turn bounds the recursion of every later phase, so a flat `1+1+...`
/// chain is limited to `max_depth` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input length in bytes.
    pub max_length: usize,
    /// Maximum nesting depth.
    pub max_depth:  usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_length: DEFAULT_MAX_LENGTH,
               max_depth:  DEFAULT_MAX_DEPTH, }
    }
}

impl Limits {
    /// Returns a copy with a different maximum length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Returns a copy with a different maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
