//! Lexer configuration.

use tern_ir::{ArenaConfig, InternMode, TokenBufferConfig};

/// Arena policy and buffer sizing for a [`Lexer`](crate::Lexer).
///
/// Plain data: nothing is read from files or the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    pub arena: ArenaConfig,
    pub buffer: TokenBufferConfig,
}

impl LexerConfig {
    #[must_use]
    pub fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    #[must_use]
    pub fn with_buffer(mut self, buffer: TokenBufferConfig) -> Self {
        self.buffer = buffer;
        self
    }

    #[must_use]
    pub fn with_intern_mode(mut self, mode: InternMode) -> Self {
        self.buffer.intern_mode = mode;
        self
    }

    /// Cap every arena at `limit` bytes; `None` removes the cap.
    #[must_use]
    pub fn with_max_bytes_per_arena(mut self, limit: Option<usize>) -> Self {
        self.arena.max_bytes_per_arena = limit;
        self
    }

    /// Initial token capacity, e.g. from a source-length estimate.
    #[must_use]
    pub fn with_token_capacity(mut self, capacity: usize) -> Self {
        self.buffer.token_capacity = capacity;
        self
    }
}
