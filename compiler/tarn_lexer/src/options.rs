//! Lexer configuration.

/// Tuning knobs for a [`Lexer`](crate::Lexer) and its output context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Tokens to reserve room for when a context is created.
    pub initial_token_capacity: usize,
    /// String-table bytes to reserve room for when a context is created.
    pub initial_string_capacity: usize,
    /// Deepest interpolation nesting that is tokenized. A region nested
    /// deeper is reported and kept as a single `Invalid` token.
    pub max_interpolation_depth: u32,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            initial_token_capacity: 1024,
            initial_string_capacity: 4096,
            max_interpolation_depth: 128,
        }
    }
}
