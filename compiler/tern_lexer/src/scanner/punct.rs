//! Operators and delimiters by maximal munch.
//!
//! Each leading byte checks its longest candidates first. Lookahead reads
//! past the end of the source land on sentinel padding, which matches no
//! operator byte.

use tern_ir::{ArenaError, TokenKind, TokenValue};
use tern_lexer_core::{is_digit, ByteClass};

use super::Scanner;

impl Scanner<'_, '_> {
    pub(super) fn punct(&mut self, start: u32, class: ByteClass) -> Result<(), ArenaError> {
        let next = self.cursor.peek();
        let third = self.cursor.peek2();
        let (kind, len) = match class {
            ByteClass::Bang => match next {
                b'=' => (TokenKind::BangEq, 2),
                _ => (TokenKind::Bang, 1),
            },
            ByteClass::Percent => match next {
                b'=' => (TokenKind::PercentEq, 2),
                _ => (TokenKind::Percent, 1),
            },
            ByteClass::Ampersand => match next {
                b'&' => (TokenKind::AmpAmp, 2),
                b'=' => (TokenKind::AmpEq, 2),
                _ => (TokenKind::Amp, 1),
            },
            ByteClass::Star => match next {
                b'=' => (TokenKind::StarEq, 2),
                _ => (TokenKind::Star, 1),
            },
            ByteClass::Plus => match next {
                b'+' => (TokenKind::PlusPlus, 2),
                b'=' => (TokenKind::PlusEq, 2),
                _ => (TokenKind::Plus, 1),
            },
            ByteClass::Minus => match next {
                b'-' => (TokenKind::MinusMinus, 2),
                b'=' => (TokenKind::MinusEq, 2),
                b'>' => (TokenKind::Arrow, 2),
                _ => (TokenKind::Minus, 1),
            },
            ByteClass::Dot => match (next, third) {
                (b'.', b'.') => (TokenKind::DotDotDot, 3),
                (b'.', _) => (TokenKind::DotDot, 2),
                _ => (TokenKind::Dot, 1),
            },
            ByteClass::Colon => match next {
                b':' => (TokenKind::ColonColon, 2),
                _ => (TokenKind::Colon, 1),
            },
            ByteClass::Less => match (next, third) {
                (b'<', b'=') => (TokenKind::ShlEq, 3),
                (b'<', _) => (TokenKind::Shl, 2),
                (b'=', _) => (TokenKind::LtEq, 2),
                _ => (TokenKind::Lt, 1),
            },
            ByteClass::Equal => match next {
                b'=' => (TokenKind::EqEq, 2),
                b'>' => (TokenKind::FatArrow, 2),
                _ => (TokenKind::Eq, 1),
            },
            ByteClass::Greater => match (next, third) {
                (b'>', b'=') => (TokenKind::ShrEq, 3),
                (b'>', _) => (TokenKind::Shr, 2),
                (b'=', _) => (TokenKind::GtEq, 2),
                _ => (TokenKind::Gt, 1),
            },
            ByteClass::Question => match (next, third) {
                (b'?', b'=') => (TokenKind::QuestionQuestionEq, 3),
                (b'?', _) => (TokenKind::QuestionQuestion, 2),
                // `a?.5:b` is a conditional, not optional chaining.
                (b'.', t) if !is_digit(t) => (TokenKind::QuestionDot, 2),
                _ => (TokenKind::Question, 1),
            },
            ByteClass::Caret => match next {
                b'=' => (TokenKind::CaretEq, 2),
                _ => (TokenKind::Caret, 1),
            },
            ByteClass::Pipe => match next {
                b'|' => (TokenKind::PipePipe, 2),
                b'=' => (TokenKind::PipeEq, 2),
                _ => (TokenKind::Pipe, 1),
            },
            ByteClass::Hash => (TokenKind::Hash, 1),
            ByteClass::Dollar => (TokenKind::Dollar, 1),
            ByteClass::LeftParen => (TokenKind::LParen, 1),
            ByteClass::RightParen => (TokenKind::RParen, 1),
            ByteClass::Comma => (TokenKind::Comma, 1),
            ByteClass::Semicolon => (TokenKind::Semicolon, 1),
            ByteClass::At => (TokenKind::At, 1),
            ByteClass::LeftBracket => (TokenKind::LBracket, 1),
            ByteClass::Backslash => (TokenKind::Backslash, 1),
            ByteClass::RightBracket => (TokenKind::RBracket, 1),
            ByteClass::Backtick => (TokenKind::Backtick, 1),
            ByteClass::LeftBrace => (TokenKind::LBrace, 1),
            ByteClass::RightBrace => (TokenKind::RBrace, 1),
            ByteClass::Tilde => (TokenKind::Tilde, 1),
            // Classes with their own sub-scanner never reach here.
            _ => return self.invalid_byte(start),
        };
        self.cursor.advance_n(len);
        self.emit(start, kind, TokenValue::None)
    }
}
