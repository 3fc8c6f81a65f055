#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use crate::{ByteClass, SourceBuffer};

fn buffer(source: &str) -> SourceBuffer {
    SourceBuffer::new(source.as_bytes()).unwrap()
}

// === Basic movement ===

#[test]
fn current_and_advance() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn peek_past_end_reads_padding() {
    let buf = buffer("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = buffer("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn copy_snapshot_is_independent() {
    let buf = buffer("xyz");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 1);
}

// === Classes ===

#[test]
fn current_class_at_eof() {
    let buf = buffer("");
    assert_eq!(buf.cursor().current_class(), ByteClass::Eof);
}

// === Slicing ===

#[test]
fn slice_and_rest() {
    let buf = buffer("hello world");
    let mut cursor = buf.cursor();
    cursor.advance_n(6);
    assert_eq!(cursor.slice(0, 5), b"hello");
    assert_eq!(cursor.slice_from(0), b"hello ");
    assert_eq!(cursor.rest(), b"world");
}

// === Scanning helpers ===

#[test]
fn eat_whitespace_mixed_spaces_and_tabs() {
    let buf = buffer(" \t  \tx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_line_end_stops_at_lf_or_cr() {
    let buf = buffer("// note\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 7);

    let buf = buffer("// note\r\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_line_end_without_terminator_reaches_eof() {
    let buf = buffer("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 11);
}

#[test]
fn eat_through_consumes_needle() {
    let buf = buffer("/* a */ b");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_through(b"*/"));
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn eat_through_missing_needle_reaches_eof() {
    let buf = buffer("/* open");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_through(b"*/"));
    assert!(cursor.is_eof());
}
