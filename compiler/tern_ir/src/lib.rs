//! Tern IR - token model and lexer output storage.
//!
//! This crate contains the data structures shared between the lexer and its
//! consumers:
//! - [`TokenKind`], [`TokenSpan`], [`TokenValue`] and [`StringHandle`]
//! - [`Diagnostic`] and the closed [`DiagnosticId`] set
//! - [`ArenaManager`] and [`Arena`]: growable regions with bulk reset
//! - [`TokenBuffer`]: the five parallel arenas one lexing run writes into
//!
//! # Design Philosophy
//!
//! - **Handles, not references**: interned text is addressed by
//!   `(offset, length)` into the buffer's byte heap.
//! - **Struct of arrays**: kinds, spans and values live in parallel arenas
//!   indexed by token position.
//! - **Reset, don't free**: buffers are truncated between runs and keep their
//!   capacity.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod diagnostic;
mod token;
mod token_buffer;

pub use arena::{Arena, ArenaConfig, ArenaError, ArenaManager, ArenaStats};
pub use diagnostic::{Diagnostic, DiagnosticId};
pub use token::{StringHandle, Token, TokenKind, TokenSpan, TokenValue};
pub use token_buffer::{InternMode, TokenBuffer, TokenBufferConfig};
