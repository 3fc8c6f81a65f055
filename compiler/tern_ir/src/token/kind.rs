//! Token kind enumeration.

/// Lexical category of a token.
///
/// Discriminants are grouped in contiguous ranges so the category helpers
/// compile to range checks:
///
/// | Range  | Category    |
/// |--------|-------------|
/// | 0-3    | Trivia      |
/// | 4-8    | Literals    |
/// | 9-65   | Punctuation |
/// | 254    | Invalid     |
/// | 255    | Eof         |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Trivia ===
    WhiteSpace = 0,
    NewLine = 1,
    Comment = 2,
    DocComment = 3,

    // === Literals ===
    Identifier = 4,
    Integer = 5,
    Float = 6,
    String = 7,
    Char = 8,

    // === Punctuation, in ASCII order of the leading byte ===
    Bang = 9,
    BangEq = 10,
    Hash = 11,
    Dollar = 12,
    Percent = 13,
    PercentEq = 14,
    Amp = 15,
    AmpAmp = 16,
    AmpEq = 17,
    LParen = 18,
    RParen = 19,
    Star = 20,
    StarEq = 21,
    Plus = 22,
    PlusPlus = 23,
    PlusEq = 24,
    Comma = 25,
    Minus = 26,
    MinusMinus = 27,
    MinusEq = 28,
    Arrow = 29,
    Dot = 30,
    DotDot = 31,
    DotDotDot = 32,
    Slash = 33,
    SlashEq = 34,
    Colon = 35,
    ColonColon = 36,
    Semicolon = 37,
    Lt = 38,
    LtEq = 39,
    Shl = 40,
    ShlEq = 41,
    Eq = 42,
    EqEq = 43,
    FatArrow = 44,
    Gt = 45,
    GtEq = 46,
    Shr = 47,
    ShrEq = 48,
    Question = 49,
    QuestionQuestion = 50,
    QuestionQuestionEq = 51,
    QuestionDot = 52,
    At = 53,
    LBracket = 54,
    Backslash = 55,
    RBracket = 56,
    Caret = 57,
    CaretEq = 58,
    Backtick = 59,
    LBrace = 60,
    Pipe = 61,
    PipePipe = 62,
    PipeEq = 63,
    RBrace = 64,
    Tilde = 65,

    // === Special ===
    Invalid = 254,
    Eof = 255,
}

impl TokenKind {
    /// Whitespace, newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        (self as u8) <= Self::DocComment as u8
    }

    /// Identifiers and literal values.
    #[inline]
    pub const fn is_literal(self) -> bool {
        let d = self as u8;
        d >= Self::Identifier as u8 && d <= Self::Char as u8
    }

    /// Operators and delimiters.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        let d = self as u8;
        d >= Self::Bang as u8 && d <= Self::Tilde as u8
    }

    /// Fixed source text of a punctuation token.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::Bang => "!",
            Self::BangEq => "!=",
            Self::Hash => "#",
            Self::Dollar => "$",
            Self::Percent => "%",
            Self::PercentEq => "%=",
            Self::Amp => "&",
            Self::AmpAmp => "&&",
            Self::AmpEq => "&=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Star => "*",
            Self::StarEq => "*=",
            Self::Plus => "+",
            Self::PlusPlus => "++",
            Self::PlusEq => "+=",
            Self::Comma => ",",
            Self::Minus => "-",
            Self::MinusMinus => "--",
            Self::MinusEq => "-=",
            Self::Arrow => "->",
            Self::Dot => ".",
            Self::DotDot => "..",
            Self::DotDotDot => "...",
            Self::Slash => "/",
            Self::SlashEq => "/=",
            Self::Colon => ":",
            Self::ColonColon => "::",
            Self::Semicolon => ";",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Shl => "<<",
            Self::ShlEq => "<<=",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::FatArrow => "=>",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Shr => ">>",
            Self::ShrEq => ">>=",
            Self::Question => "?",
            Self::QuestionQuestion => "??",
            Self::QuestionQuestionEq => "??=",
            Self::QuestionDot => "?.",
            Self::At => "@",
            Self::LBracket => "[",
            Self::Backslash => "\\",
            Self::RBracket => "]",
            Self::Caret => "^",
            Self::CaretEq => "^=",
            Self::Backtick => "`",
            Self::LBrace => "{",
            Self::Pipe => "|",
            Self::PipePipe => "||",
            Self::PipeEq => "|=",
            Self::RBrace => "}",
            Self::Tilde => "~",
            Self::WhiteSpace
            | Self::NewLine
            | Self::Comment
            | Self::DocComment
            | Self::Identifier
            | Self::Integer
            | Self::Float
            | Self::String
            | Self::Char
            | Self::Invalid
            | Self::Eof => return None,
        })
    }

    /// Human-readable name for debugging and tooling output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WhiteSpace => "whitespace",
            Self::NewLine => "newline",
            Self::Comment => "comment",
            Self::DocComment => "doc comment",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Char => "char",
            Self::Invalid => "invalid",
            Self::Eof => "end of file",
            _ => match self.lexeme() {
                Some(text) => text,
                None => "?",
            },
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
