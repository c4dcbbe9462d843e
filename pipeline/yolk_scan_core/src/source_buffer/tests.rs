use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_input() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes(), b"");
}

#[test]
fn len_counts_bytes_not_chars() {
    let buf = SourceBuffer::new("héllo");
    assert_eq!(buf.len(), 6); // 'é' is 2 bytes
    assert_eq!(buf.as_bytes(), "héllo".as_bytes());
}

#[test]
fn sentinel_byte_follows_content() {
    let buf = SourceBuffer::new("abc");
    let full = buf.as_sentinel_bytes();
    assert_eq!(full[3], 0);
}

#[test]
fn padding_is_zero_filled() {
    let buf = SourceBuffer::new("xy");
    let full = buf.as_sentinel_bytes();
    assert!(full[2..].iter().all(|&b| b == 0));
}

#[test]
fn buffer_rounded_to_cache_line() {
    // 2 content bytes + sentinel rounds up to one cache line.
    let buf = SourceBuffer::new("xy");
    assert_eq!(buf.as_sentinel_bytes().len(), 64);

    // 63 content bytes + sentinel exactly fills one cache line.
    let buf = SourceBuffer::new(&"a".repeat(63));
    assert_eq!(buf.as_sentinel_bytes().len(), 64);

    // 64 content bytes + sentinel spills into a second cache line.
    let buf = SourceBuffer::new(&"a".repeat(64));
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.source_len(), 3);
}

#[test]
fn interior_null_preserved_as_content() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
}
