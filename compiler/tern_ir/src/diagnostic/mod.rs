//! Lexical diagnostics.
//!
//! A diagnostic is an opaque `(DiagnosticId, span)` pair. Message text is
//! rendered elsewhere from a table keyed on the id; this crate only exposes a
//! stable [`DiagnosticId::code`] for that lookup.

use crate::TokenSpan;

/// Closed set of lexical problems the scanner can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DiagnosticId {
    // Numbers
    InvalidHexNumberExpectingDigit,
    InvalidOctalNumberExpectingDigit,
    InvalidBinaryNumberExpectingDigit,
    UnexpectedUnderscoreAfterDigit,
    NumberOverflow,
    UnexpectedCharacterForExponent,

    // Bytes
    InvalidCharacter,
    InvalidUtf8Sequence,

    // Strings and chars
    UnterminatedString,
    InvalidEscapeSequence,
    UnterminatedChar,
    EmptyCharLiteral,
    TooManyCharactersInCharLiteral,

    // Comments
    UnterminatedComment,
}

impl DiagnosticId {
    /// Stable code used to key external message tables (`L0001`...).
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidHexNumberExpectingDigit => "L0001",
            Self::InvalidOctalNumberExpectingDigit => "L0002",
            Self::InvalidBinaryNumberExpectingDigit => "L0003",
            Self::UnexpectedUnderscoreAfterDigit => "L0004",
            Self::NumberOverflow => "L0005",
            Self::UnexpectedCharacterForExponent => "L0006",
            Self::InvalidCharacter => "L0007",
            Self::InvalidUtf8Sequence => "L0008",
            Self::UnterminatedString => "L0009",
            Self::InvalidEscapeSequence => "L0010",
            Self::UnterminatedChar => "L0011",
            Self::EmptyCharLiteral => "L0012",
            Self::TooManyCharactersInCharLiteral => "L0013",
            Self::UnterminatedComment => "L0014",
        }
    }
}

/// A lexical problem and the exact sub-construct it concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub id: DiagnosticId,
    pub span: TokenSpan,
}

impl Diagnostic {
    #[inline]
    pub const fn new(id: DiagnosticId, span: TokenSpan) -> Self {
        Self { id, span }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.id.code(), self.id, self.span)
    }
}
