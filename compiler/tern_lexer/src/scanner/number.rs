//! Integer and float literals.
//!
//! Digits accumulate into a `u64` with checked arithmetic. On overflow the
//! scan keeps consuming the digit run but the value becomes the sentinel `0`
//! and `NumberOverflow` covers the run. Floats are parsed from the
//! separator-free digits, so out-of-range values saturate to infinity.

use smallvec::SmallVec;
use tern_ir::{ArenaError, DiagnosticId, TokenKind, TokenValue};
use tern_lexer_core::{is_binary, is_digit, is_hex, is_octal};

use super::Scanner;

/// A run of digits and `_` separators.
#[derive(Clone, Copy, Debug, Default)]
struct DigitRun {
    /// Accumulated value; `0` once `overflowed` is set.
    value: u64,
    overflowed: bool,
    /// Number of digits, separators excluded.
    digits: u32,
    /// `_` bytes at the end of the run.
    trailing_underscores: u32,
}

/// Numeric value of a digit byte already accepted by a base predicate.
#[inline]
pub(super) fn digit_value(b: u8) -> u64 {
    u64::from(match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    })
}

impl Scanner<'_, '_> {
    pub(super) fn number(&mut self, start: u32) -> Result<(), ArenaError> {
        if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => {
                    return self.prefixed(start, 16, is_hex, DiagnosticId::InvalidHexNumberExpectingDigit);
                }
                b'o' | b'O' => {
                    return self.prefixed(start, 8, is_octal, DiagnosticId::InvalidOctalNumberExpectingDigit);
                }
                b'b' | b'B' => {
                    return self.prefixed(start, 2, is_binary, DiagnosticId::InvalidBinaryNumberExpectingDigit);
                }
                _ => {}
            }
        }
        self.decimal(start)
    }

    /// Consume digits accepted by `accept` and `_` separators.
    fn eat_digits(&mut self, radix: u64, accept: fn(u8) -> bool) -> DigitRun {
        let mut run = DigitRun::default();
        loop {
            let b = self.cursor.current();
            if accept(b) {
                run.digits += 1;
                run.trailing_underscores = 0;
                if !run.overflowed {
                    match run
                        .value
                        .checked_mul(radix)
                        .and_then(|v| v.checked_add(digit_value(b)))
                    {
                        Some(v) => run.value = v,
                        None => {
                            run.overflowed = true;
                            run.value = 0;
                        }
                    }
                }
            } else if b == b'_' {
                run.trailing_underscores += 1;
            } else {
                return run;
            }
            self.cursor.advance();
        }
    }

    /// `0x`, `0o` or `0b` followed by digits of that base.
    fn prefixed(
        &mut self,
        start: u32,
        radix: u64,
        accept: fn(u8) -> bool,
        missing_digits: DiagnosticId,
    ) -> Result<(), ArenaError> {
        self.cursor.advance_n(2);
        let run_start = self.cursor.pos();
        let run = self.eat_digits(radix, accept);

        if run.digits == 0 {
            self.report(missing_digits, start, 2)?;
            return self.emit(start, TokenKind::Integer, TokenValue::Integer(0));
        }
        self.finish_integer(start, run_start, run)
    }

    fn finish_integer(&mut self, start: u32, run_start: u32, run: DigitRun) -> Result<(), ArenaError> {
        let end = self.cursor.pos();
        if run.overflowed {
            self.report(DiagnosticId::NumberOverflow, run_start, end - run_start)?;
        }
        self.report_underscores_at(end, run)?;
        self.emit(start, TokenKind::Integer, TokenValue::Integer(run.value))
    }

    /// Decimal integer, or float when a fraction or exponent follows.
    fn decimal(&mut self, start: u32) -> Result<(), ArenaError> {
        let int_run = self.eat_digits(10, is_digit);
        let int_end = self.cursor.pos();

        let has_fraction = self.cursor.current() == b'.' && is_digit(self.cursor.peek());
        if !has_fraction && !matches!(self.cursor.current(), b'e' | b'E') {
            return self.finish_integer(start, start, int_run);
        }

        let mut frac_run = None;
        let mut frac_end = int_end;
        if has_fraction {
            self.cursor.advance();
            frac_run = Some(self.eat_digits(10, is_digit));
            frac_end = self.cursor.pos();
        }

        // Exponent: marker, optional sign, mandatory digits. A malformed
        // exponent keeps the marker and sign in the token but not the value.
        let mut value_end = self.cursor.pos();
        let mut exponent = None;
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if is_digit(self.cursor.current()) {
                exponent = Some(Ok(self.eat_digits(10, is_digit)));
                value_end = self.cursor.pos();
            } else {
                exponent = Some(Err(self.cursor.pos()));
            }
        }

        // Diagnostics in source order.
        self.report_underscores_at(int_end, int_run)?;
        if let Some(run) = frac_run {
            self.report_underscores_at(frac_end, run)?;
        }
        match exponent {
            Some(Ok(run)) => self.report_underscores_at(value_end, run)?,
            Some(Err(offending)) => {
                let len = self.offending_len();
                self.report(DiagnosticId::UnexpectedCharacterForExponent, offending, len)?;
            }
            None => {}
        }

        let value = parse_float(self.cursor.slice(start, value_end));
        self.emit(start, TokenKind::Float, TokenValue::Float(value))
    }

    /// Report trailing separators of a run that ended at `end`.
    fn report_underscores_at(&mut self, end: u32, run: DigitRun) -> Result<(), ArenaError> {
        if run.trailing_underscores == 0 {
            return Ok(());
        }
        let offset = end - run.trailing_underscores;
        self.report(DiagnosticId::UnexpectedUnderscoreAfterDigit, offset, run.trailing_underscores)
    }
}

/// Parse float literal text, ignoring `_` separators.
fn parse_float(text: &[u8]) -> f64 {
    let digits: SmallVec<[u8; 32]> = text.iter().copied().filter(|&b| b != b'_').collect();
    // Only ASCII digits, `.`, `e`/`E` and signs reach here, which always parse.
    std::str::from_utf8(&digits)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::INFINITY)
}
