//! Byte classification tables.
//!
//! Two immutable 256-entry tables are built at compile time:
//!
//! - `CLASS_TABLE` maps each byte to a coarse [`ByteClass`]. The scanner's
//!   dispatch loop matches on this class, so every byte value has exactly one
//!   sub-scanner.
//! - `FLAG_TABLE` maps each byte to a set of [`ByteFlags`] for the finer
//!   questions number and identifier scanning ask ("is this a hex digit?").
//!
//! Both lookups are a single indexed read with no branching on the byte value.

/// Coarse lexical class of a single byte.
///
/// Every ASCII punctuation character has its own class. Multi-byte UTF-8
/// sequences are split into lead bytes ([`Utf8Head2`](Self::Utf8Head2),
/// [`Utf8Head3`](Self::Utf8Head3), [`Utf8Head4`](Self::Utf8Head4)) and
/// continuation bytes ([`Utf8Value`](Self::Utf8Value)).
///
/// [`Sof`](Self::Sof) and [`Eof`](Self::Eof) are sentinels standing for the
/// positions just before and just after the source. The table maps the `0x00`
/// sentinel byte to `Eof`; whether a `0x00` is really end of input or an
/// interior NUL is decided by [`Cursor::is_eof`](crate::Cursor::is_eof).
/// `Sof` never comes out of the table, and the scanner treats it like
/// `Invalid`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteClass {
    // Sentinels
    Eof,
    Sof,

    // Line structure
    CarriageReturn,
    LineFeed,
    Space,
    Tab,

    // Word characters
    Digit,
    Letter,

    // ASCII punctuation, one class per character
    Bang,
    DoubleQuote,
    Hash,
    Dollar,
    Percent,
    Ampersand,
    SingleQuote,
    LeftParen,
    RightParen,
    Star,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equal,
    Greater,
    Question,
    At,
    LeftBracket,
    Backslash,
    RightBracket,
    Caret,
    Underscore,
    Backtick,
    LeftBrace,
    Pipe,
    RightBrace,
    Tilde,

    // Everything else
    Invalid,
    Utf8Value,
    Utf8Head2,
    Utf8Head3,
    Utf8Head4,
}

impl ByteClass {
    /// Number of distinct classes.
    pub const COUNT: usize = ByteClass::Utf8Head4 as usize + 1;

    /// Returns `true` for the three multi-byte UTF-8 lead classes.
    #[inline]
    pub const fn is_utf8_head(self) -> bool {
        matches!(
            self,
            ByteClass::Utf8Head2 | ByteClass::Utf8Head3 | ByteClass::Utf8Head4
        )
    }
}

const fn class_of(b: u8) -> ByteClass {
    match b {
        0x00 => ByteClass::Eof,
        b'\r' => ByteClass::CarriageReturn,
        b'\n' => ByteClass::LineFeed,
        b' ' => ByteClass::Space,
        b'\t' => ByteClass::Tab,
        b'0'..=b'9' => ByteClass::Digit,
        b'a'..=b'z' | b'A'..=b'Z' => ByteClass::Letter,
        b'!' => ByteClass::Bang,
        b'"' => ByteClass::DoubleQuote,
        b'#' => ByteClass::Hash,
        b'$' => ByteClass::Dollar,
        b'%' => ByteClass::Percent,
        b'&' => ByteClass::Ampersand,
        b'\'' => ByteClass::SingleQuote,
        b'(' => ByteClass::LeftParen,
        b')' => ByteClass::RightParen,
        b'*' => ByteClass::Star,
        b'+' => ByteClass::Plus,
        b',' => ByteClass::Comma,
        b'-' => ByteClass::Minus,
        b'.' => ByteClass::Dot,
        b'/' => ByteClass::Slash,
        b':' => ByteClass::Colon,
        b';' => ByteClass::Semicolon,
        b'<' => ByteClass::Less,
        b'=' => ByteClass::Equal,
        b'>' => ByteClass::Greater,
        b'?' => ByteClass::Question,
        b'@' => ByteClass::At,
        b'[' => ByteClass::LeftBracket,
        b'\\' => ByteClass::Backslash,
        b']' => ByteClass::RightBracket,
        b'^' => ByteClass::Caret,
        b'_' => ByteClass::Underscore,
        b'`' => ByteClass::Backtick,
        b'{' => ByteClass::LeftBrace,
        b'|' => ByteClass::Pipe,
        b'}' => ByteClass::RightBrace,
        b'~' => ByteClass::Tilde,
        0x80..=0xBF => ByteClass::Utf8Value,
        // 0xC0 and 0xC1 can only start overlong encodings.
        0xC2..=0xDF => ByteClass::Utf8Head2,
        0xE0..=0xEF => ByteClass::Utf8Head3,
        0xF0..=0xF4 => ByteClass::Utf8Head4,
        // Remaining C0 controls, DEL, 0xC0, 0xC1, 0xF5..=0xFF.
        _ => ByteClass::Invalid,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [ByteClass; 256] = {
    let mut table = [ByteClass::Invalid; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = class_of(i as u8);
        i += 1;
    }
    table
};

/// Classify a raw byte.
#[inline]
pub fn classify(b: u8) -> ByteClass {
    CLASS_TABLE[b as usize]
}

bitflags::bitflags! {
    /// Fine-grained byte properties used by number and identifier scanning.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ByteFlags: u8 {
        /// `0-9`
        const DIGIT = 1 << 0;
        /// `a-z`, `A-Z`
        const LETTER = 1 << 1;
        /// `0-9`, `a-f`, `A-F`
        const HEX = 1 << 2;
        /// `0-7`
        const OCTAL = 1 << 3;
        /// `0`, `1`
        const BINARY = 1 << 4;
        /// `a-z`, `A-Z`, `0-9`, `_`
        const IDENT_CONTINUE = 1 << 5;
    }
}

const fn flags_of(b: u8) -> u8 {
    let mut bits = 0u8;
    if b.is_ascii_digit() {
        bits |= ByteFlags::DIGIT.bits() | ByteFlags::HEX.bits() | ByteFlags::IDENT_CONTINUE.bits();
    }
    if b.is_ascii_alphabetic() {
        bits |= ByteFlags::LETTER.bits() | ByteFlags::IDENT_CONTINUE.bits();
    }
    if matches!(b, b'a'..=b'f' | b'A'..=b'F') {
        bits |= ByteFlags::HEX.bits();
    }
    if matches!(b, b'0'..=b'7') {
        bits |= ByteFlags::OCTAL.bits();
    }
    if matches!(b, b'0' | b'1') {
        bits |= ByteFlags::BINARY.bits();
    }
    if b == b'_' {
        bits |= ByteFlags::IDENT_CONTINUE.bits();
    }
    bits
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static FLAG_TABLE: [ByteFlags; 256] = {
    let mut table = [ByteFlags::empty(); 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = ByteFlags::from_bits_retain(flags_of(i as u8));
        i += 1;
    }
    table
};

#[inline]
fn flags(b: u8) -> ByteFlags {
    FLAG_TABLE[b as usize]
}

/// `0-9`
#[inline]
pub fn is_digit(b: u8) -> bool {
    flags(b).contains(ByteFlags::DIGIT)
}

/// ASCII letter.
#[inline]
pub fn is_letter(b: u8) -> bool {
    flags(b).contains(ByteFlags::LETTER)
}

/// Hexadecimal digit in either case.
#[inline]
pub fn is_hex(b: u8) -> bool {
    flags(b).contains(ByteFlags::HEX)
}

/// `0-7`
#[inline]
pub fn is_octal(b: u8) -> bool {
    flags(b).contains(ByteFlags::OCTAL)
}

/// `0` or `1`
#[inline]
pub fn is_binary(b: u8) -> bool {
    flags(b).contains(ByteFlags::BINARY)
}

/// ASCII byte that may continue an identifier. The sentinel maps to `false`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    flags(b).contains(ByteFlags::IDENT_CONTINUE)
}

/// Expected length of the UTF-8 sequence introduced by `lead`.
///
/// Returns 1 for ASCII and for bytes that cannot start a sequence.
#[inline]
pub fn utf8_sequence_len(lead: u8) -> u32 {
    match classify(lead) {
        ByteClass::Utf8Head2 => 2,
        ByteClass::Utf8Head3 => 3,
        ByteClass::Utf8Head4 => 4,
        _ => 1,
    }
}

/// Decode one UTF-8 scalar value starting at `bytes[0]`.
///
/// Returns the character and its encoded length, or `None` when the bytes do
/// not start with a well-formed sequence (stray continuation byte, truncated
/// sequence, overlong or surrogate encoding).
pub fn decode_char(bytes: &[u8]) -> Option<(char, u32)> {
    let lead = *bytes.first()?;
    let width = utf8_sequence_len(lead);
    if width == 1 && !lead.is_ascii() {
        return None;
    }
    let seq = bytes.get(..width as usize)?;
    let ch = std::str::from_utf8(seq).ok()?.chars().next()?;
    Some((ch, width))
}
