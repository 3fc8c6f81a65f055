//! Read position over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Every byte read goes through the padded buffer, so reading one or two
//! bytes past the last source byte yields `0x00` instead of panicking. End
//! of input is `pos >= source_len`, where `current()` reads `0x00`; a `0x00`
//! before `source_len` is an ordinary, if invalid, source byte.

use crate::class::{classify, ByteClass};

/// A `Copy` position in a padded source buffer.
///
/// Sub-scanners take a copy to look ahead and simply drop it if the
/// lookahead does not pan out.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by at least one `0x00`.
    bytes: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            bytes.len() >= source_len as usize + 3,
            "buffer needs room for two lookahead bytes"
        );
        debug_assert!(bytes[source_len as usize..].iter().all(|&b| b == 0));
        Self {
            bytes,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn at(&self, offset: u32) -> u8 {
        self.bytes[offset as usize]
    }

    /// Byte under the cursor; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.at(self.pos)
    }

    #[inline]
    pub fn current_class(&self) -> ByteClass {
        classify(self.current())
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.at(self.pos + 1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.at(self.pos + 2)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`, where `end <= source_len`.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(end <= self.source_len, "slice end {end} is past the source");
        &self.bytes[start as usize..end as usize]
    }

    /// Bytes from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Unconsumed source bytes, without padding.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let from = self.pos.min(self.source_len) as usize;
        &self.bytes[from..self.source_len as usize]
    }

    /// Skip spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Stop on the next `\n` or `\r`, or at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the offset is within rest(), which is shorter than source_len"
    )]
    pub fn eat_until_line_end_or_eof(&mut self) {
        self.pos = match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos + offset as u32,
            None => self.source_len,
        };
    }

    /// Move just past the next `needle`, returning whether it was found.
    /// When it is not, the cursor ends up at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the match ends within rest(), which is shorter than source_len"
    )]
    pub fn eat_through(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
