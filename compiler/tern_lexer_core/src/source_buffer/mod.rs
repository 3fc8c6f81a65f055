//! Owned, zero-padded copy of the source.
//!
//! Bytes are kept exactly as given: no UTF-8 validation, no BOM handling.
//! Behind them sits a run of `0x00` bytes, at least three long and rounded
//! up to a multiple of 64, so a [`Cursor`] can read the current byte and
//! two bytes of lookahead anywhere in `0..=len` without a bounds branch.

use std::io::{self, Read};

use crate::Cursor;

/// Padding granularity; also the minimum distance between `len` and `u32::MAX`.
const PAD_TO: usize = 64;

/// Minimum zero bytes after the source: the sentinel plus two lookahead bytes.
const MIN_TAIL: usize = 3;

/// Largest accepted source. Offsets, lengths and lookahead all stay in `u32`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - PAD_TO;

/// The source is longer than [`MAX_SOURCE_LEN`]; carries the actual length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("source of {0} bytes exceeds the maximum of {max} bytes", max = MAX_SOURCE_LEN)]
pub struct SourceTooLarge(pub usize);

/// Source bytes followed by zero padding.
///
/// ```text
/// [ s0 s1 ... s(len-1) | 00 00 00 ... 00 ]
///                        ^ len           ^ multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    pub fn new(source: &[u8]) -> Result<Self, SourceTooLarge> {
        let len = match u32::try_from(source.len()) {
            Ok(len) if source.len() <= MAX_SOURCE_LEN => len,
            _ => return Err(SourceTooLarge(source.len())),
        };
        let mut bytes = vec![0; (source.len() + MIN_TAIL).next_multiple_of(PAD_TO)];
        bytes[..source.len()].copy_from_slice(source);
        Ok(Self { bytes, len })
    }

    /// Read `reader` to the end and buffer the result.
    ///
    /// Oversized input surfaces as [`io::ErrorKind::InvalidData`] wrapping
    /// [`SourceTooLarge`].
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut source = Vec::new();
        reader.read_to_end(&mut source)?;
        Self::new(&source).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The source bytes, padding excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl TryFrom<&str> for SourceBuffer {
    type Error = SourceTooLarge;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Self::new(source.as_bytes())
    }
}
