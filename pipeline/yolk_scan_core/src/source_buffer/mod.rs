//! Sentinel-terminated input buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the input content,
//! allowing the scanner to detect end of input without explicit bounds
//! checking. The total allocation is rounded up to the next 64-byte
//! boundary, which also provides safe zero padding for [`Cursor::peek`]
//! near the end of the buffer.
//!
//! Interior null bytes in the input are legal: the scanner treats them as
//! scalar content. The cursor distinguishes them from the sentinel by
//! comparing its position against the input length.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated input buffer.
///
/// # Layout
///
/// ```text
/// [input_bytes..., 0x00, padding_zeros...]
///  ^               ^     ^
///  0               |     rounded up to 64-byte boundary
///            source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent
/// bytes (cache-line padding) are also `0x00`, ensuring safe reads for
/// lookahead near the end of the buffer.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[input_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual input content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from input text.
    ///
    /// Copies the input bytes into a cache-line-padded buffer with a
    /// `0x00` sentinel byte appended.
    ///
    /// # Input Size
    ///
    /// Inputs larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates at `u32::MAX`; callers that care must check
    /// input size upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: input + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy input bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the input bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`);
    /// subsequent bytes are zero-filled padding up to the next 64-byte
    /// boundary.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the input content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the input content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: `SourceBuffer` should stay pointer-sized plus length.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32 on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

#[cfg(test)]
mod tests;
