//! Lexer for Tern.
//!
//! Turns source bytes into a position-accurate token stream plus diagnostics,
//! written into a [`TokenBuffer`]:
//!
//! ```text
//! SourceBuffer ──► Lexer::lex ──► TokenBuffer { kinds, spans, values, diagnostics, heap }
//! ```
//!
//! The lexer never aborts on malformed input. Every byte of the source is
//! covered by exactly one token, problems are recorded as [`Diagnostic`]s,
//! and the stream always ends with a zero-length [`TokenKind::Eof`]. Only
//! arena exhaustion stops a run.
//!
//! # Example
//!
//! ```
//! use tern_ir::{TokenKind, TokenValue};
//!
//! let tokens = tern_lexer::lex(b"x += 0x1F").unwrap();
//! let kinds: Vec<_> = tokens.kinds().iter().copied().filter(|k| !k.is_trivia()).collect();
//! assert_eq!(kinds, [TokenKind::Identifier, TokenKind::PlusEq, TokenKind::Integer, TokenKind::Eof]);
//! assert_eq!(tokens.values()[4], TokenValue::Integer(0x1F));
//! ```

mod batch;
mod config;
mod error;
mod scanner;

use std::io::Read;

use tern_ir::ArenaManager;

pub use batch::BufferPool;
pub use config::LexerConfig;
pub use error::LexError;
pub use tern_ir::{
    ArenaConfig, ArenaError, Diagnostic, DiagnosticId, InternMode, StringHandle, Token,
    TokenBuffer, TokenBufferConfig, TokenKind, TokenSpan, TokenValue,
};
pub use tern_lexer_core::SourceBuffer;

/// Counts from one lexing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexStats {
    pub tokens: usize,
    pub diagnostics: usize,
    pub heap_bytes: usize,
}

/// The lexer engine.
///
/// Holds only configuration and the shared [`ArenaManager`]; all per-run
/// state lives in the [`TokenBuffer`] passed to [`lex`](Self::lex). One
/// `Lexer` can drive any number of buffers, on any number of threads.
#[derive(Clone, Debug)]
pub struct Lexer {
    config: LexerConfig,
    arenas: ArenaManager,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        Self {
            config,
            arenas: ArenaManager::new(config.arena),
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Manager that backs every buffer this lexer creates.
    pub fn arena_manager(&self) -> &ArenaManager {
        &self.arenas
    }

    /// A fresh token buffer sized by this lexer's configuration.
    pub fn new_buffer(&self) -> Result<TokenBuffer, ArenaError> {
        TokenBuffer::new(&self.arenas, self.config.buffer)
    }

    /// Lex `source` into `buffer`.
    ///
    /// `buffer` must be empty: fresh, or [`reset`](TokenBuffer::reset)
    /// since its last run. Lexing into a non-empty buffer appends a second
    /// stream after the first.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn lex(&self, source: &SourceBuffer, buffer: &mut TokenBuffer) -> Result<LexStats, ArenaError> {
        debug_assert!(buffer.is_empty(), "token buffer must be reset between runs");
        scanner::Scanner::new(source.cursor(), buffer).run()?;
        let stats = LexStats {
            tokens: buffer.len(),
            diagnostics: buffer.diagnostics().len(),
            heap_bytes: buffer.heap_len(),
        };
        tracing::debug!(
            tokens = stats.tokens,
            diagnostics = stats.diagnostics,
            heap_bytes = stats.heap_bytes,
            "lexed"
        );
        Ok(stats)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(LexerConfig::default())
    }
}

/// Lex a byte slice with the default configuration.
pub fn lex(source: &[u8]) -> Result<TokenBuffer, LexError> {
    let source = SourceBuffer::new(source)?;
    let lexer = Lexer::default();
    let mut buffer = lexer.new_buffer()?;
    lexer.lex(&source, &mut buffer)?;
    Ok(buffer)
}

/// Read a whole stream and lex it with the default configuration.
///
/// Returns the source alongside the tokens, since spans refer to it.
pub fn lex_reader(reader: impl Read) -> Result<(SourceBuffer, TokenBuffer), LexError> {
    let source = SourceBuffer::from_reader(reader)?;
    let lexer = Lexer::default();
    let mut buffer = lexer.new_buffer()?;
    lexer.lex(&source, &mut buffer)?;
    Ok((source, buffer))
}
