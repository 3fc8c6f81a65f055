#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use pretty_assertions::assert_eq;

use super::{InternMode, TokenBuffer, TokenBufferConfig};
use crate::{
    ArenaConfig, ArenaManager, Diagnostic, DiagnosticId, StringHandle, Token, TokenKind,
    TokenSpan, TokenValue,
};

fn buffer(mode: InternMode) -> TokenBuffer {
    TokenBuffer::new(
        &ArenaManager::default(),
        TokenBufferConfig {
            intern_mode: mode,
            ..TokenBufferConfig::default()
        },
    )
    .unwrap()
}

/// Stand-in content hash: the tests only need equal bytes to hash equally.
fn weak_hash(bytes: &[u8]) -> u32 {
    bytes.iter().map(|&b| u32::from(b)).sum()
}

// === Token sequences ===

#[test]
fn push_token_keeps_sequences_aligned() {
    let mut buf = buffer(InternMode::Append);
    assert!(buf.is_empty());
    buf.push_token(TokenKind::Integer, TokenSpan::new(0, 1, 0, 0), TokenValue::Integer(1))
        .unwrap();
    let index = buf
        .push_token(TokenKind::Plus, TokenSpan::new(1, 1, 0, 1), TokenValue::None)
        .unwrap();
    assert_eq!(index, 1);
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.kinds().len(), buf.spans().len());
    assert_eq!(buf.spans().len(), buf.values().len());
    assert_eq!(
        buf.token(1),
        Some(Token {
            kind: TokenKind::Plus,
            span: TokenSpan::new(1, 1, 0, 1),
            value: TokenValue::None,
        })
    );
    assert_eq!(buf.token(2), None);
    assert_eq!(
        buf.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Integer, TokenKind::Plus]
    );
}

#[test]
fn aligned_after_capacity_failure() {
    let manager = ArenaManager::new(ArenaConfig {
        min_capacity: 1,
        max_bytes_per_arena: Some(32),
    });
    let mut buf = TokenBuffer::new(
        &manager,
        TokenBufferConfig {
            token_capacity: 0,
            diagnostic_capacity: 0,
            heap_capacity: 0,
            intern_mode: InternMode::Append,
        },
    )
    .unwrap();
    // Spans are 16 bytes, so the third push exceeds the limit.
    let span = TokenSpan::default();
    buf.push_token(TokenKind::Dot, span, TokenValue::None).unwrap();
    buf.push_token(TokenKind::Dot, span, TokenValue::None).unwrap();
    assert!(buf.push_token(TokenKind::Dot, span, TokenValue::None).is_err());
    assert_eq!(buf.kinds().len(), 2);
    assert_eq!(buf.spans().len(), 2);
    assert_eq!(buf.values().len(), 2);
}

#[test]
fn diagnostics_keep_encounter_order() {
    let mut buf = buffer(InternMode::Append);
    let first = Diagnostic::new(DiagnosticId::NumberOverflow, TokenSpan::new(1, 26, 0, 1));
    let second = Diagnostic::new(
        DiagnosticId::UnexpectedUnderscoreAfterDigit,
        TokenSpan::new(26, 1, 0, 26),
    );
    buf.push_diagnostic(first).unwrap();
    buf.push_diagnostic(second).unwrap();
    assert_eq!(buf.diagnostics(), &[first, second]);
}

// === Interning ===

#[test]
fn append_mode_duplicates_content() {
    let mut buf = buffer(InternMode::Append);
    let a = buf.intern(b"foo", weak_hash(b"foo")).unwrap();
    let b = buf.intern(b"foo", weak_hash(b"foo")).unwrap();
    assert_eq!(a, StringHandle::new(0, 3));
    assert_eq!(b, StringHandle::new(3, 3));
    assert_eq!(buf.heap_len(), 6);
    assert!(buf.strings_equal(a, b));
}

#[test]
fn dedup_mode_shares_handles() {
    let mut buf = buffer(InternMode::Deduplicate);
    let a = buf.intern(b"foo", weak_hash(b"foo")).unwrap();
    let c = buf.intern(b"bar", weak_hash(b"bar")).unwrap();
    let b = buf.intern(b"foo", weak_hash(b"foo")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(buf.heap_len(), 6);
    assert_eq!(buf.get_string(c), b"bar");
}

#[test]
fn dedup_mode_compares_bytes_on_hash_collision() {
    let mut buf = buffer(InternMode::Deduplicate);
    // "ab" and "ba" collide under the weak hash.
    let ab = buf.intern(b"ab", weak_hash(b"ab")).unwrap();
    let ba = buf.intern(b"ba", weak_hash(b"ba")).unwrap();
    assert_ne!(ab, ba);
    assert_eq!(buf.get_string(ab), b"ab");
    assert_eq!(buf.get_string(ba), b"ba");
    assert_eq!(buf.intern(b"ba", weak_hash(b"ba")).unwrap(), ba);
}

#[test]
fn incremental_intern() {
    let mut buf = buffer(InternMode::Deduplicate);
    let start = buf.intern_begin();
    buf.intern_extend(b"h").unwrap();
    buf.intern_extend(b"ey").unwrap();
    let hey = buf.intern_finish(start, weak_hash(b"hey"));
    assert_eq!(buf.get_string(hey), b"hey");

    let start = buf.intern_begin();
    buf.intern_extend(b"hey").unwrap();
    assert_eq!(buf.intern_finish(start, weak_hash(b"hey")), hey);
    assert_eq!(buf.intern_begin(), 3);
}

#[test]
fn empty_string_interns() {
    let mut buf = buffer(InternMode::Append);
    let empty = buf.intern(b"", 0).unwrap();
    assert!(empty.is_empty());
    assert_eq!(buf.get_string(empty), b"");
}

#[test]
fn strings_equal_by_content() {
    let mut buf = buffer(InternMode::Append);
    let a = buf.intern(b"abc", 1).unwrap();
    let b = buf.intern(b"abd", 2).unwrap();
    let c = buf.intern(b"ab", 3).unwrap();
    assert!(buf.strings_equal(a, a));
    assert!(!buf.strings_equal(a, b));
    assert!(!buf.strings_equal(a, c));
}

// === Reset ===

#[test]
fn reset_clears_everything() {
    let mut buf = buffer(InternMode::Deduplicate);
    buf.push_token(TokenKind::Eof, TokenSpan::default(), TokenValue::None)
        .unwrap();
    buf.push_diagnostic(Diagnostic::new(
        DiagnosticId::InvalidCharacter,
        TokenSpan::default(),
    ))
    .unwrap();
    buf.intern(b"x", weak_hash(b"x")).unwrap();

    buf.reset();
    assert!(buf.is_empty());
    assert!(buf.diagnostics().is_empty());
    assert_eq!(buf.heap_len(), 0);

    // The dedup index is cleared too: "x" is written afresh at offset 0.
    let x = buf.intern(b"x", weak_hash(b"x")).unwrap();
    assert_eq!(x, StringHandle::new(0, 1));
    assert_eq!(buf.heap_len(), 1);
}

#[test]
fn buffers_share_manager_accounting() {
    let manager = ArenaManager::default();
    let a = TokenBuffer::new(&manager, TokenBufferConfig::default()).unwrap();
    let b = TokenBuffer::new(&manager, TokenBufferConfig::default()).unwrap();
    assert_eq!(manager.stats().arenas_created, 10);
    drop((a, b));
    assert_eq!(manager.stats().reserved_bytes, 0);
}
