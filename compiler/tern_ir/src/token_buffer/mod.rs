//! Output storage for one lexing run.
//!
//! A [`TokenBuffer`] owns five arenas:
//!
//! | Arena         | Contents                                   |
//! |---------------|--------------------------------------------|
//! | `kinds`       | [`TokenKind`] per token                    |
//! | `spans`       | [`TokenSpan`] per token                    |
//! | `values`      | [`TokenValue`] per token                   |
//! | `diagnostics` | [`Diagnostic`]s in encounter order         |
//! | `heap`        | interned bytes addressed by [`StringHandle`] |
//!
//! The first three are index-aligned: position `i` in each describes token
//! `i`. [`TokenBuffer::reset`] truncates all five while keeping their
//! capacity, and must run between lexing runs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    Arena, ArenaError, ArenaManager, Diagnostic, StringHandle, Token, TokenKind, TokenSpan,
    TokenValue,
};

/// How interned bytes are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InternMode {
    /// Every occurrence appends to the heap.
    #[default]
    Append,
    /// Byte-identical content shares the first handle written this run.
    Deduplicate,
}

/// Initial arena sizes and interning policy for a [`TokenBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenBufferConfig {
    /// Initial capacity of the kind, span and value arenas.
    pub token_capacity: usize,
    pub diagnostic_capacity: usize,
    /// Initial capacity of the interned-byte heap.
    pub heap_capacity: usize,
    pub intern_mode: InternMode,
}

impl Default for TokenBufferConfig {
    fn default() -> Self {
        Self {
            token_capacity: 1024,
            diagnostic_capacity: 16,
            heap_capacity: 4096,
            intern_mode: InternMode::Append,
        }
    }
}

/// Index-aligned token sequences, diagnostics and the interned-byte heap.
pub struct TokenBuffer {
    kinds: Arena<TokenKind>,
    spans: Arena<TokenSpan>,
    values: Arena<TokenValue>,
    diagnostics: Arena<Diagnostic>,
    heap: Arena<u8>,
    intern_mode: InternMode,
    /// Content hash → handles with that hash. Only used in `Deduplicate` mode.
    dedup: FxHashMap<u32, SmallVec<[StringHandle; 2]>>,
}

impl TokenBuffer {
    /// Create a buffer whose arenas come from `manager`.
    pub fn new(manager: &ArenaManager, config: TokenBufferConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            kinds: manager.create("token kinds", config.token_capacity)?,
            spans: manager.create("token spans", config.token_capacity)?,
            values: manager.create("token values", config.token_capacity)?,
            diagnostics: manager.create("diagnostics", config.diagnostic_capacity)?,
            heap: manager.create("string heap", config.heap_capacity)?,
            intern_mode: config.intern_mode,
            dedup: FxHashMap::default(),
        })
    }

    pub fn intern_mode(&self) -> InternMode {
        self.intern_mode
    }

    /// Truncate every arena, keeping capacity.
    ///
    /// Invalidates all spans and handles handed out since the last reset.
    pub fn reset(&mut self) {
        tracing::debug!(
            tokens = self.kinds.len(),
            diagnostics = self.diagnostics.len(),
            heap_bytes = self.heap.len(),
            "token buffer reset"
        );
        self.kinds.reset();
        self.spans.reset();
        self.values.reset();
        self.diagnostics.reset();
        self.heap.reset();
        self.dedup.clear();
    }

    // --- Writing ---

    /// Append one token to the three aligned sequences.
    ///
    /// All three arenas reserve before any is written, so a failed growth
    /// leaves the counts equal.
    pub fn push_token(
        &mut self,
        kind: TokenKind,
        span: TokenSpan,
        value: TokenValue,
    ) -> Result<u32, ArenaError> {
        self.kinds.reserve(1)?;
        self.spans.reserve(1)?;
        self.values.reserve(1)?;
        let index = self.kinds.push(kind)?;
        self.spans.push(span)?;
        self.values.push(value)?;
        Ok(index)
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) -> Result<(), ArenaError> {
        self.diagnostics.push(diagnostic).map(|_| ())
    }

    /// Intern `bytes` whose FNV-1a hash is `hash`.
    pub fn intern(&mut self, bytes: &[u8], hash: u32) -> Result<StringHandle, ArenaError> {
        let start = self.intern_begin();
        self.heap.extend_from_slice(bytes)?;
        Ok(self.intern_finish(start, hash))
    }

    /// Start an incremental intern; returns the heap mark to pass to
    /// [`intern_finish`](Self::intern_finish).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "heap holds at most one copy of each source byte, and sources fit in u32"
    )]
    #[inline]
    pub fn intern_begin(&self) -> u32 {
        self.heap.len() as u32
    }

    /// Append several bytes to the string currently being interned.
    #[inline]
    pub fn intern_extend(&mut self, bytes: &[u8]) -> Result<(), ArenaError> {
        self.heap.extend_from_slice(bytes).map(|_| ())
    }

    /// Close the string started at `start` and return its handle.
    ///
    /// In [`InternMode::Deduplicate`] an earlier byte-identical string with
    /// the same hash is returned instead, and the bytes just written are
    /// dropped from the heap.
    pub fn intern_finish(&mut self, start: u32, hash: u32) -> StringHandle {
        let end = self.intern_begin();
        let handle = StringHandle::new(start, end - start);
        if self.intern_mode == InternMode::Append {
            return handle;
        }

        let heap = self.heap.as_slice();
        let bytes = &heap[start as usize..end as usize];
        let bucket = self.dedup.entry(hash).or_default();
        if let Some(&earlier) = bucket.iter().find(|h| {
            let range = h.offset as usize..(h.offset + h.length) as usize;
            &heap[range] == bytes
        }) {
            self.heap.truncate(start as usize);
            return earlier;
        }
        bucket.push(handle);
        handle
    }

    // --- Reading ---

    /// Bytes behind `handle`.
    ///
    /// # Panics
    /// If `handle` was not produced by this buffer since the last reset.
    #[inline]
    pub fn get_string(&self, handle: StringHandle) -> &[u8] {
        let start = handle.offset as usize;
        &self.heap.as_slice()[start..start + handle.length as usize]
    }

    /// Content equality of two handles, short-circuiting on identity.
    pub fn strings_equal(&self, a: StringHandle, b: StringHandle) -> bool {
        a == b || (a.length == b.length && self.get_string(a) == self.get_string(b))
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn kinds(&self) -> &[TokenKind] {
        self.kinds.as_slice()
    }

    #[inline]
    pub fn spans(&self) -> &[TokenSpan] {
        self.spans.as_slice()
    }

    #[inline]
    pub fn values(&self) -> &[TokenValue] {
        self.values.as_slice()
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Bytes currently stored in the interned heap.
    #[inline]
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Assembled view of token `index`.
    pub fn token(&self, index: usize) -> Option<Token> {
        Some(Token {
            kind: *self.kinds.get(index)?,
            span: *self.spans.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    /// All tokens in emission order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Token> + '_ {
        self.kinds
            .as_slice()
            .iter()
            .zip(self.spans.as_slice())
            .zip(self.values.as_slice())
            .map(|((&kind, &span), &value)| Token { kind, span, value })
    }
}

impl std::fmt::Debug for TokenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBuffer")
            .field("tokens", &self.kinds.len())
            .field("diagnostics", &self.diagnostics.len())
            .field("heap_bytes", &self.heap.len())
            .field("intern_mode", &self.intern_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
