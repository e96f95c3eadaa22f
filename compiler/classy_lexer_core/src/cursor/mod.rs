//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null (the scanner reports it
//! as an unrecognized character); a null at `pos >= source_len` is the
//! sentinel (EOF).

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap snapshots for speculative
/// lookahead.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after `source_len` are `0x00`.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Source text, used for slicing lexemes.
    text: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: two fat pointers and two `u32`s.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            text,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at EOF (the sentinel byte). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position before the sentinel, since the sentinel
    /// itself is always in bounds.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the full character at the current position, if any.
    ///
    /// Used for diagnostics on non-ASCII input where a single byte would
    /// not name the offending character.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.text
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns an empty string if `start..end` does not fall on character
    /// boundaries within the source. Scanner token boundaries always do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }
}
