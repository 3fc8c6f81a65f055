//! Low-level scanning primitives for the Tern lexer.
//!
//! This crate has no dependency on the token model. It provides:
//!
//! - [`ByteClass`] and [`classify`]: a 256-entry table mapping every raw byte
//!   to a coarse lexical class, plus finer [`is_digit`]/[`is_letter`]/[`is_hex`]
//!   predicates for number and identifier scanning.
//! - [`hash`]: incremental 32-bit FNV-1a, mixed one byte at a time while the
//!   scanner reads identifier and string bytes.
//! - [`SourceBuffer`]: a sentinel-terminated copy of the source bytes.
//! - [`Cursor`]: a `Copy` read position over a [`SourceBuffer`].
//!
//! ```text
//! bytes → SourceBuffer → Cursor → (tern_lexer scanner) → TokenBuffer
//! ```

mod class;
mod cursor;
pub mod hash;
mod source_buffer;

pub use class::{
    classify, decode_char, is_binary, is_digit, is_hex, is_ident_continue, is_letter, is_octal,
    utf8_sequence_len, ByteClass, ByteFlags,
};
pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, SourceTooLarge, MAX_SOURCE_LEN};
