//! The scanning loop.
//!
//! Reads one byte, classifies it, and hands off to a sub-scanner that
//! consumes one whole token and writes it to the [`TokenBuffer`]. Every
//! sub-scanner advances at least one byte, so the loop always terminates at
//! the sentinel.
//!
//! Sub-scanners live in sibling modules by token family:
//!
//! | Module    | Tokens                                  |
//! |-----------|-----------------------------------------|
//! | `number`  | `Integer`, `Float`                      |
//! | `text`    | `String`, `Char`                        |
//! | `comment` | `Comment`, `DocComment`, `/`, `/=`      |
//! | `punct`   | every other operator and delimiter      |
//!
//! Whitespace, newlines, identifiers and invalid bytes are handled here.

mod comment;
mod number;
mod punct;
mod text;

use tern_ir::{ArenaError, Diagnostic, DiagnosticId, TokenBuffer, TokenKind, TokenSpan, TokenValue};
use tern_lexer_core::{classify, decode_char, hash, is_ident_continue, utf8_sequence_len, ByteClass, Cursor};

/// State of one lexing run.
pub(crate) struct Scanner<'src, 'buf> {
    cursor: Cursor<'src>,
    out: &'buf mut TokenBuffer,
    /// 0-based line of the cursor.
    line: u32,
    /// Offset of the first byte of the current line.
    line_start: u32,
}

impl<'src, 'buf> Scanner<'src, 'buf> {
    pub(crate) fn new(cursor: Cursor<'src>, out: &'buf mut TokenBuffer) -> Self {
        Self {
            cursor,
            out,
            line: 0,
            line_start: 0,
        }
    }

    /// Scan to the end of the source, finishing with an `Eof` token.
    pub(crate) fn run(mut self) -> Result<(), ArenaError> {
        loop {
            let start = self.cursor.pos();
            match self.cursor.current_class() {
                ByteClass::Eof if self.cursor.is_eof() => {
                    return self.emit(start, TokenKind::Eof, TokenValue::None);
                }
                ByteClass::Space | ByteClass::Tab => self.whitespace(start)?,
                ByteClass::CarriageReturn | ByteClass::LineFeed => self.newline(start)?,
                ByteClass::Letter | ByteClass::Underscore => self.identifier(start)?,
                ByteClass::Digit => self.number(start)?,
                ByteClass::DoubleQuote => self.string(start)?,
                ByteClass::SingleQuote => self.char_literal(start)?,
                ByteClass::Slash => self.slash(start)?,
                ByteClass::Utf8Head2 | ByteClass::Utf8Head3 | ByteClass::Utf8Head4 => {
                    self.multi_byte(start)?;
                }
                ByteClass::Utf8Value => self.invalid_utf8(start, 1)?,
                // Interior NUL, C0 controls, DEL, and bytes that never occur
                // in UTF-8.
                ByteClass::Eof | ByteClass::Sof | ByteClass::Invalid => self.invalid_byte(start)?,
                class => self.punct(start, class)?,
            }
        }
    }

    // ─── Output ─────────────────────────────────────────────────────────

    /// Column of `offset`, which must be on the current line.
    #[inline]
    fn column(&self, offset: u32) -> u32 {
        offset - self.line_start
    }

    /// Emit a token covering `start..cursor`.
    #[inline]
    fn emit(&mut self, start: u32, kind: TokenKind, value: TokenValue) -> Result<(), ArenaError> {
        let span = TokenSpan::new(start, self.cursor.pos() - start, self.line, self.column(start));
        self.out.push_token(kind, span, value).map(|_| ())
    }

    /// Record a diagnostic for `offset..offset + length` on the current line.
    fn report(&mut self, id: DiagnosticId, offset: u32, length: u32) -> Result<(), ArenaError> {
        let span = TokenSpan::new(offset, length, self.line, self.column(offset));
        tracing::trace!(?id, offset, length, "lexical diagnostic");
        self.out.push_diagnostic(Diagnostic::new(id, span))
    }

    /// Length of the character at the cursor for diagnostic spans: zero at
    /// end of input, one for a byte that does not start a valid character.
    fn offending_len(&self) -> u32 {
        if self.cursor.is_eof() {
            return 0;
        }
        decode_char(self.cursor.rest()).map_or(1, |(_, width)| width)
    }

    // ─── Whitespace & Newlines ──────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> Result<(), ArenaError> {
        self.cursor.eat_whitespace();
        self.emit(start, TokenKind::WhiteSpace, TokenValue::None)
    }

    /// `\n`, `\r`, or `\r\n`: one token each, never coalesced.
    fn newline(&mut self, start: u32) -> Result<(), ArenaError> {
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
        self.emit(start, TokenKind::NewLine, TokenValue::None)?;
        self.line += 1;
        self.line_start = self.cursor.pos();
        Ok(())
    }

    /// Advance line tracking over line terminators inside `start..cursor`.
    ///
    /// Used after tokens that may span lines (block comments).
    fn track_lines(&mut self, start: u32) {
        let bytes = self.cursor.slice_from(start);
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => i += 1,
                b'\r' | b'\n' => {}
                _ => {
                    i += 1;
                    continue;
                }
            }
            i += 1;
            self.line += 1;
            self.line_start = start + offset_u32(i);
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    /// Letters, digits, `_` and valid multi-byte UTF-8 characters, hashed in
    /// the same pass that reads them.
    fn identifier(&mut self, start: u32) -> Result<(), ArenaError> {
        let mut state = hash::init();
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                hash::hash(b, &mut state);
                self.cursor.advance();
            } else if classify(b).is_utf8_head() {
                let Some((_, width)) = decode_char(self.cursor.rest()) else {
                    break;
                };
                for &byte in &self.cursor.rest()[..width as usize] {
                    hash::hash(byte, &mut state);
                }
                self.cursor.advance_n(width);
            } else {
                break;
            }
        }
        let handle = self.out.intern(self.cursor.slice_from(start), state)?;
        self.emit(start, TokenKind::Identifier, TokenValue::String(handle))
    }

    /// A multi-byte lead byte: identifier if the sequence is well formed.
    fn multi_byte(&mut self, start: u32) -> Result<(), ArenaError> {
        if decode_char(self.cursor.rest()).is_some() {
            return self.identifier(start);
        }
        // Consume the lead byte and whatever continuation bytes follow it,
        // up to the width the lead byte announces.
        let width = utf8_sequence_len(self.cursor.current());
        let mut len = 1;
        while len < width
            && self.cursor.pos() + len < self.cursor.source_len()
            && classify(self.cursor.rest()[len as usize]) == ByteClass::Utf8Value
        {
            len += 1;
        }
        self.invalid_utf8(start, len)
    }

    // ─── Invalid input ──────────────────────────────────────────────────

    fn invalid_utf8(&mut self, start: u32, len: u32) -> Result<(), ArenaError> {
        self.cursor.advance_n(len);
        self.report(DiagnosticId::InvalidUtf8Sequence, start, len)?;
        self.emit(start, TokenKind::Invalid, TokenValue::None)
    }

    fn invalid_byte(&mut self, start: u32) -> Result<(), ArenaError> {
        if self.cursor.current().is_ascii() {
            self.cursor.advance();
            self.report(DiagnosticId::InvalidCharacter, start, 1)?;
            self.emit(start, TokenKind::Invalid, TokenValue::None)
        } else {
            self.invalid_utf8(start, 1)
        }
    }
}

/// Offset within a token as `u32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets within a token are bounded by the source length, which fits in u32"
)]
#[inline]
fn offset_u32(offset: usize) -> u32 {
    offset as u32
}
