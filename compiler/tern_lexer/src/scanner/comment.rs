//! Comments, and the `/` operators that share their leading byte.
//!
//! `//` runs to the end of the line. `///` (but not `////`) is a doc
//! comment. `/* ... */` does not nest; `/** ... */` is a doc comment unless
//! it is `/**/` or opens with `/***`. Doc comments carry a handle to their
//! body text.

use tern_ir::{ArenaError, DiagnosticId, TokenKind, TokenValue};
use tern_lexer_core::hash;

use super::Scanner;

impl Scanner<'_, '_> {
    pub(super) fn slash(&mut self, start: u32) -> Result<(), ArenaError> {
        match self.cursor.peek() {
            b'/' => self.line_comment(start),
            b'*' => self.block_comment(start),
            b'=' => {
                self.cursor.advance_n(2);
                self.emit(start, TokenKind::SlashEq, TokenValue::None)
            }
            _ => {
                self.cursor.advance();
                self.emit(start, TokenKind::Slash, TokenValue::None)
            }
        }
    }

    fn line_comment(&mut self, start: u32) -> Result<(), ArenaError> {
        self.cursor.advance_n(2);
        let is_doc = self.cursor.current() == b'/' && self.cursor.peek() != b'/';
        if !is_doc {
            self.cursor.eat_until_line_end_or_eof();
            return self.emit(start, TokenKind::Comment, TokenValue::None);
        }
        self.cursor.advance();
        let body_start = self.cursor.pos();
        self.cursor.eat_until_line_end_or_eof();
        let body = self.cursor.slice_from(body_start);
        let handle = self.out.intern(body, hash::hash_bytes(body))?;
        self.emit(start, TokenKind::DocComment, TokenValue::String(handle))
    }

    fn block_comment(&mut self, start: u32) -> Result<(), ArenaError> {
        self.cursor.advance_n(2);
        let is_doc = self.cursor.current() == b'*' && !matches!(self.cursor.peek(), b'*' | b'/');
        if is_doc {
            self.cursor.advance();
        }
        let body_start = self.cursor.pos();
        let terminated = self.cursor.eat_through(b"*/");
        let body_end = if terminated { self.cursor.pos() - 2 } else { self.cursor.pos() };

        // The token starts on the current line; record everything anchored
        // there before moving line tracking past the body.
        if !terminated {
            self.report(DiagnosticId::UnterminatedComment, start, 2)?;
        }
        if is_doc {
            let body = self.cursor.slice(body_start, body_end);
            let handle = self.out.intern(body, hash::hash_bytes(body))?;
            self.emit(start, TokenKind::DocComment, TokenValue::String(handle))?;
        } else {
            self.emit(start, TokenKind::Comment, TokenValue::None)?;
        }
        self.track_lines(start);
        Ok(())
    }
}
