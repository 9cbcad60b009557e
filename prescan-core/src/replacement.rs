//! The `replacement` pseudo-encoding.
//!
//! Labels like `iso-2022-kr` resolve to `replacement`, which has no real
//! decoder: any non-empty input decodes to a single U+FFFD and nothing can
//! be encoded.
//!
//! ```
//! use prescan_core::replacement::{IncrementalDecoder, ReplacementCodec};
//!
//! assert_eq!(ReplacementCodec.decode(b""), ("", 0));
//! assert_eq!(ReplacementCodec.decode(b"abcde"), ("\u{FFFD}", 5));
//!
//! let mut decoder = IncrementalDecoder::new();
//! let out: Vec<&str> = b"abc".chunks(1).map(|b| decoder.decode(b, false)).collect();
//! assert_eq!(out, ["\u{FFFD}", "", ""]);
//! decoder.reset();
//! assert_eq!(decoder.decode(b"x", true), "\u{FFFD}");
//! ```

use std::io::{self, Read};

use crate::error::{PrescanError, Result};

/// What every non-empty input decodes to.
pub const REPLACEMENT_STR: &str = "\u{FFFD}";

/// Stateless codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplacementCodec;

impl ReplacementCodec {
    /// Decode `input`, returning the text and the number of bytes consumed.
    pub fn decode(&self, input: &[u8]) -> (&'static str, usize) {
        if input.is_empty() {
            ("", 0)
        } else {
            (REPLACEMENT_STR, input.len())
        }
    }

    /// Always fails.
    pub fn encode(&self, _input: &str) -> Result<Vec<u8>> {
        Err(PrescanError::EncodeUnsupported)
    }
}

/// Decoder that emits one U+FFFD for the first non-empty chunk since
/// construction or the last [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct IncrementalDecoder {
    emitted: bool,
}

impl IncrementalDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk. `last` is accepted for symmetry with other decoders.
    pub fn decode(&mut self, input: &[u8], _last: bool) -> &'static str {
        if input.is_empty() || self.emitted {
            return "";
        }
        self.emitted = true;
        REPLACEMENT_STR
    }

    pub fn reset(&mut self) {
        self.emitted = false;
    }

    /// Whether the replacement character has been emitted.
    pub fn state(&self) -> bool {
        self.emitted
    }

    pub fn set_state(&mut self, emitted: bool) {
        self.emitted = emitted;
    }
}

/// Encoder half; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalEncoder;

impl IncrementalEncoder {
    pub fn encode(&mut self, _input: &str, _last: bool) -> Result<Vec<u8>> {
        Err(PrescanError::EncodeUnsupported)
    }
}

/// Reads a whole stream as the replacement encoding.
///
/// The first non-empty read yields U+FFFD, every later read yields nothing,
/// even if more bytes arrive.
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    emitted: bool,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            emitted: false,
        }
    }

    /// Drain the underlying reader and decode what was read.
    pub fn read(&mut self) -> io::Result<&'static str> {
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf)?;
        if buf.is_empty() || self.emitted {
            return Ok("");
        }
        self.emitted = true;
        Ok(REPLACEMENT_STR)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
