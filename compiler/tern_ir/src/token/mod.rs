//! Token types produced by the Tern lexer.
//!
//! A lexing run stores tokens as three index-aligned sequences (kind, span,
//! value) in a [`TokenBuffer`](crate::TokenBuffer). [`Token`] is the
//! assembled view of one position in those sequences.

mod kind;
mod span;
mod value;

pub use kind::TokenKind;
pub use span::TokenSpan;
pub use value::{StringHandle, TokenValue};

/// One token: kind, location and payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TokenSpan,
    pub value: TokenValue,
}

// Hot-path storage; keep these compact.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{StringHandle, TokenKind, TokenSpan, TokenValue};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenSpan, 16);
    crate::static_assert_size!(StringHandle, 8);
    crate::static_assert_size!(TokenValue, 16);
}
