//! Position-tracked view over the bytes being prescanned.
//!
//! Every stage of the scan threads the same cursor: the tag scanner moves
//! it between tags, the attribute parser moves it through one attribute.
//! The content sub-parser gets a fresh cursor over the attribute value.
//!
//! The position never moves backwards and never passes the end of the
//! slice, so any loop that advances at least one byte per turn terminates.

use memchr::{memchr, memmem};

/// ASCII whitespace as the HTML prescan defines it: TAB, LF, FF, CR, SPACE.
pub const SPACES: &[u8] = b"\t\n\x0c\r ";

/// Is `b` one of the prescan whitespace bytes?
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0c | b'\r' | b' ')
}

/// A forward-only cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The whole underlying slice.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// Up to `n` bytes starting at the current position, without advancing.
    ///
    /// Shorter than `n` near the end, empty at the end.
    #[inline]
    pub fn get(&self, n: usize) -> &'a [u8] {
        let end = self.pos.saturating_add(n).min(self.buf.len());
        &self.buf[self.pos..end]
    }

    /// The byte at the current position.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// The byte `offset` positions ahead of the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos.saturating_add(offset)).copied()
    }

    /// Move forward by `n` bytes, stopping at the end.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.buf.len());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Does the input at the current position start with `pattern`?
    #[inline]
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.get(pattern.len()) == pattern
    }

    /// ASCII case-insensitive `starts_with`.
    #[inline]
    pub fn starts_with_ignore_case(&self, pattern: &[u8]) -> bool {
        self.get(pattern.len()).eq_ignore_ascii_case(pattern)
    }

    /// Skip whitespace.
    #[inline]
    pub fn skip_spaces(&mut self) -> Option<u8> {
        self.skip_while(is_space)
    }

    /// Skip bytes matching `pred`, returning the first byte that doesn't.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<u8> {
        while let Some(b) = self.peek() {
            if !pred(b) {
                return Some(b);
            }
            self.pos += 1;
        }
        None
    }

    /// Advance until the current byte satisfies `pred`, or to the end.
    pub fn skip_until(&mut self, pred: impl Fn(u8) -> bool) {
        self.skip_while(|b| !pred(b));
    }

    /// Jump to the next occurrence of `byte`.
    ///
    /// Returns `false` and leaves the position alone if there is none.
    pub fn seek(&mut self, byte: u8) -> bool {
        match memchr(byte, self.get(usize::MAX)) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => false,
        }
    }

    /// Jump to the next occurrence of `needle`, or to the end if there is none.
    pub fn seek_seq(&mut self, needle: &[u8]) -> bool {
        match memmem::find(self.get(usize::MAX), needle) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Bytes between two positions, clamped to the slice.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.buf.len());
        &self.buf[start.min(end)..end]
    }
}
