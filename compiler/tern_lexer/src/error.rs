//! Failures that stop a lexing run.
//!
//! Malformed source never produces a `LexError`; it produces diagnostics in
//! the token buffer. These variants cover the conditions outside the lexical
//! grammar: memory exhaustion and input that cannot be read at all.

use tern_ir::ArenaError;
use tern_lexer_core::{SourceTooLarge, MAX_SOURCE_LEN};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("failed to read source")]
    Io(#[from] std::io::Error),

    #[error("source of {0} bytes exceeds the maximum of {max} bytes", max = MAX_SOURCE_LEN)]
    SourceTooLarge(usize),
}

impl From<SourceTooLarge> for LexError {
    fn from(err: SourceTooLarge) -> Self {
        Self::SourceTooLarge(err.0)
    }
}
