//! Parallel lexing of many sources.
//!
//! Each source is lexed by one rayon task into a [`TokenBuffer`] drawn from
//! a [`BufferPool`]. Buffers are reset and returned to the pool after the
//! caller's visitor has read them, so a batch over many files allocates
//! roughly one buffer per worker thread rather than one per file.

use parking_lot::Mutex;
use rayon::prelude::*;
use tern_ir::{ArenaError, ArenaManager, TokenBuffer, TokenBufferConfig};
use tern_lexer_core::SourceBuffer;

use crate::Lexer;

/// Reusable token buffers shared across threads.
pub struct BufferPool {
    arenas: ArenaManager,
    config: TokenBufferConfig,
    idle: Mutex<Vec<TokenBuffer>>,
}

impl BufferPool {
    pub fn new(arenas: ArenaManager, config: TokenBufferConfig) -> Self {
        Self {
            arenas,
            config,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// An empty buffer: a pooled one if available, otherwise a new one.
    pub fn acquire(&self) -> Result<TokenBuffer, ArenaError> {
        let pooled = self.idle.lock().pop();
        match pooled {
            Some(buffer) => Ok(buffer),
            None => TokenBuffer::new(&self.arenas, self.config),
        }
    }

    /// Reset `buffer` and make it available to later [`acquire`](Self::acquire) calls.
    pub fn release(&self, mut buffer: TokenBuffer) {
        buffer.reset();
        self.idle.lock().push(buffer);
    }

    /// Number of buffers waiting to be reused.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("idle", &self.idle_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Lexer {
    /// A pool producing buffers with this lexer's configuration.
    pub fn buffer_pool(&self) -> BufferPool {
        BufferPool::new(self.arenas.clone(), self.config.buffer)
    }

    /// Lex every source in parallel and map each result through `visit`.
    ///
    /// `visit` receives the source's index and its filled buffer; the buffer
    /// goes back to `pool` once `visit` returns. Results keep source order.
    #[tracing::instrument(level = "debug", skip_all, fields(sources = sources.len()))]
    pub fn lex_batch<R, F>(
        &self,
        sources: &[SourceBuffer],
        pool: &BufferPool,
        visit: F,
    ) -> Result<Vec<R>, ArenaError>
    where
        R: Send,
        F: Fn(usize, &TokenBuffer) -> R + Sync,
    {
        sources
            .par_iter()
            .enumerate()
            .map(|(index, source)| {
                let mut buffer = pool.acquire()?;
                let result = self.lex(source, &mut buffer).map(|_| visit(index, &buffer));
                pool.release(buffer);
                result
            })
            .collect()
    }
}
