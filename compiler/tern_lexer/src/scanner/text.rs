//! String and char literals.
//!
//! Both are single-line. String contents are decoded (escapes resolved)
//! straight into the interned heap and hashed in the same pass; a char
//! literal's value is its code point.
//!
//! Escapes: `\n \r \t \0 \\ \" \'` and `\u{X}` with one to six hex digits
//! naming a Unicode scalar value.

use tern_ir::{ArenaError, DiagnosticId, TokenKind, TokenValue};
use tern_lexer_core::{classify, decode_char, hash, is_hex, ByteClass};

use super::number::digit_value;
use super::Scanner;

/// Longest `\u{...}` payload.
const MAX_UNICODE_DIGITS: u32 = 6;

/// What the body of a quoted literal yielded at the cursor.
enum Piece {
    /// A decoded character.
    Char(char),
    /// Bytes that could not be decoded; already reported.
    Bad,
}

impl Scanner<'_, '_> {
    /// `true` when the cursor cannot continue a single-line literal.
    #[inline]
    fn at_line_end(&self) -> bool {
        matches!(self.cursor.current(), b'\n' | b'\r') || self.cursor.is_eof()
    }

    /// Decode one character of a literal body, escape or raw. Control bytes
    /// are rejected here just as they are between tokens.
    fn piece(&mut self) -> Result<Piece, ArenaError> {
        if self.cursor.current() == b'\\' {
            return self.escape();
        }
        let pos = self.cursor.pos();
        let b = self.cursor.current();
        if b.is_ascii() && matches!(classify(b), ByteClass::Eof | ByteClass::Invalid) {
            self.cursor.advance();
            self.report(DiagnosticId::InvalidCharacter, pos, 1)?;
            return Ok(Piece::Bad);
        }
        if let Some((ch, width)) = decode_char(self.cursor.rest()) {
            self.cursor.advance_n(width);
            return Ok(Piece::Char(ch));
        }
        self.cursor.advance();
        self.report(DiagnosticId::InvalidUtf8Sequence, pos, 1)?;
        Ok(Piece::Bad)
    }

    /// Decode an escape sequence starting at `\`.
    fn escape(&mut self) -> Result<Piece, ArenaError> {
        let start = self.cursor.pos();
        self.cursor.advance();
        let simple = match self.cursor.current() {
            b'n' => Some('\n'),
            b'r' => Some('\r'),
            b't' => Some('\t'),
            b'0' => Some('\0'),
            b'\\' => Some('\\'),
            b'"' => Some('"'),
            b'\'' => Some('\''),
            _ => None,
        };
        if let Some(ch) = simple {
            self.cursor.advance();
            return Ok(Piece::Char(ch));
        }
        if self.cursor.current() == b'u' {
            self.cursor.advance();
            return self.unicode_escape(start);
        }

        // Unknown escape: the backslash plus the character after it, unless
        // that character ends the line.
        if !self.at_line_end() {
            let width = decode_char(self.cursor.rest()).map_or(1, |(_, w)| w);
            self.cursor.advance_n(width);
        }
        self.report(DiagnosticId::InvalidEscapeSequence, start, self.cursor.pos() - start)?;
        Ok(Piece::Bad)
    }

    /// `\u{X..XXXXXX}`, cursor just past the `u`.
    fn unicode_escape(&mut self, start: u32) -> Result<Piece, ArenaError> {
        let mut code = 0u64;
        let mut digits = 0u32;
        let mut valid = self.cursor.current() == b'{';
        if valid {
            self.cursor.advance();
            while is_hex(self.cursor.current()) {
                digits += 1;
                if digits <= MAX_UNICODE_DIGITS {
                    code = code * 16 + digit_value(self.cursor.current());
                }
                self.cursor.advance();
            }
            valid = self.cursor.current() == b'}';
            if valid {
                self.cursor.advance();
            }
        }
        let ch = if valid && (1..=MAX_UNICODE_DIGITS).contains(&digits) {
            u32::try_from(code).ok().and_then(char::from_u32)
        } else {
            None
        };
        if let Some(ch) = ch {
            return Ok(Piece::Char(ch));
        }
        self.report(DiagnosticId::InvalidEscapeSequence, start, self.cursor.pos() - start)?;
        Ok(Piece::Bad)
    }

    /// `"..."`, interned with escapes decoded.
    pub(super) fn string(&mut self, start: u32) -> Result<(), ArenaError> {
        self.cursor.advance();
        let mark = self.out.intern_begin();
        let mut state = hash::init();
        let mut utf8 = [0u8; 4];
        loop {
            if self.cursor.current() == b'"' {
                self.cursor.advance();
                break;
            }
            if self.at_line_end() {
                self.report(DiagnosticId::UnterminatedString, start, self.cursor.pos() - start)?;
                break;
            }
            if let Piece::Char(ch) = self.piece()? {
                let bytes = ch.encode_utf8(&mut utf8).as_bytes();
                for &b in bytes {
                    hash::hash(b, &mut state);
                }
                self.out.intern_extend(bytes)?;
            }
        }
        let handle = self.out.intern_finish(mark, state);
        self.emit(start, TokenKind::String, TokenValue::String(handle))
    }

    /// `'c'`, valued by code point.
    pub(super) fn char_literal(&mut self, start: u32) -> Result<(), ArenaError> {
        self.cursor.advance();
        let mut value = None;
        let mut count = 0u32;
        loop {
            if self.cursor.current() == b'\'' {
                self.cursor.advance();
                break;
            }
            if self.at_line_end() {
                self.report(DiagnosticId::UnterminatedChar, start, self.cursor.pos() - start)?;
                return self.emit(start, TokenKind::Char, char_value(value));
            }
            if let Piece::Char(ch) = self.piece()? {
                value.get_or_insert(ch);
            }
            count += 1;
        }

        let len = self.cursor.pos() - start;
        match count {
            0 => self.report(DiagnosticId::EmptyCharLiteral, start, len)?,
            1 => {}
            _ => self.report(DiagnosticId::TooManyCharactersInCharLiteral, start, len)?,
        }
        self.emit(start, TokenKind::Char, char_value(value))
    }
}

fn char_value(ch: Option<char>) -> TokenValue {
    TokenValue::Integer(ch.map_or(0, |c| u64::from(u32::from(c))))
}
