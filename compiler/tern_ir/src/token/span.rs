//! Source location of a token.

/// Location of a token or diagnostic in the source.
///
/// `line` and `column` are 0-based and describe where the span starts;
/// `column` counts bytes from the start of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSpan {
    /// Byte offset of the first byte.
    pub offset: u32,
    /// Length in bytes.
    pub length: u32,
    pub line: u32,
    pub column: u32,
}

impl TokenSpan {
    #[inline]
    pub const fn new(offset: u32, length: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            length,
            line,
            column,
        }
    }

    /// Byte offset one past the last byte.
    #[inline]
    pub const fn end(self) -> u32 {
        self.offset + self.length
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Byte range covered by this span, for slicing the source.
    #[inline]
    pub const fn range(self) -> std::ops::Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} [{}..{}]",
            self.line + 1,
            self.column + 1,
            self.offset,
            self.end()
        )
    }
}
