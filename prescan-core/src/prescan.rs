//! Scan orchestration: BOM check, tag scan, canonicalization, result.

use std::fmt::{self, Write as _};
use std::ops::Range;

use encoding_rs::{DecoderResult, Encoding};
use log::debug;

use crate::bom::Bom;
use crate::error::Result;
use crate::label::decoder_name;
use crate::scanner::scan_tags;
use crate::table::EncodingTable;

/// Bytes examined by default, not counting the one extra byte the window
/// always includes.
pub const DEFAULT_LIMIT: usize = 1024;

/// Outcome of a prescan.
///
/// `label` and `name` are either both set or both `None`. After a BOM
/// match all three names are the BOM's encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    /// Encoding label as found in the document.
    pub label: Option<String>,
    /// Canonical encoding name.
    pub name: Option<String>,
    /// `encoding_rs` label for decoding, `None` for the replacement encoding.
    pub decoder_name: Option<String>,
    /// Start of the matched bytes.
    pub start: usize,
    /// End of the matched bytes; for a BOM, the index of its last byte.
    pub end: usize,
    /// The matched `<meta ...>` text, or the BOM in hex.
    pub matched: String,
}

impl ScanResult {
    /// Did the scan find an encoding?
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    fn from_bom(bom: Bom) -> Self {
        let name = bom.encoding_name();
        Self {
            label: Some(name.to_owned()),
            name: Some(name.to_owned()),
            decoder_name: Some(name.to_owned()),
            start: 0,
            end: bom.byte_len() - 1,
            matched: bom.hint().to_owned(),
        }
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_none(field: &Option<String>) -> &str {
            field.as_deref().unwrap_or("None")
        }
        write!(
            f,
            "label={} name={} decoder={} start={} end={} match={:?}",
            or_none(&self.label),
            or_none(&self.name),
            or_none(&self.decoder_name),
            self.start,
            self.end,
            self.matched,
        )
    }
}

/// A configured prescan: which table to resolve labels in, how far to look.
#[derive(Debug, Clone, Copy)]
pub struct Prescanner<'t> {
    table: &'t EncodingTable,
    limit: usize,
}

impl Prescanner<'static> {
    /// Prescanner over the built-in WHATWG table.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(EncodingTable::builtin()?))
    }
}

impl<'t> Prescanner<'t> {
    pub fn new(table: &'t EncodingTable) -> Self {
        Self {
            table,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Scan at most `limit + 1` bytes.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn table(&self) -> &'t EncodingTable {
        self.table
    }

    /// Determine the encoding of `input`.
    ///
    /// Returns the result and the input with any BOM removed.
    pub fn scan<'a>(&self, input: &'a [u8]) -> (ScanResult, &'a [u8]) {
        if let Some(bom) = Bom::detect(input) {
            debug!("prescan: {} byte-order mark", bom.encoding_name());
            return (ScanResult::from_bom(bom), bom.strip(input));
        }

        let window = &input[..input.len().min(self.limit.saturating_add(1))];
        let Some(found) = scan_tags(window, self.table) else {
            debug!("prescan: no encoding declared in {} bytes", window.len());
            return (ScanResult::default(), input);
        };

        let name = canonicalize(&found.name);
        let decoder = decoder_name(name);
        let matched = render(&input[found.start..found.end], decoder);
        debug!(
            "prescan: {:?} -> {} at {}..{}",
            found.label, name, found.start, found.end
        );
        let result = ScanResult {
            label: Some(found.label),
            name: Some(name.to_owned()),
            decoder_name: decoder.map(str::to_owned),
            start: found.start,
            end: found.end,
            matched,
        };
        (result, input)
    }
}

/// Prescan `input` with the built-in table and the default limit.
pub fn scan(input: &[u8]) -> Result<(ScanResult, &[u8])> {
    Ok(Prescanner::builtin()?.scan(input))
}

/// A document that declares UTF-16 in markup is ASCII-compatible, so it is
/// really UTF-8; x-user-defined is read as windows-1252.
fn canonicalize(name: &str) -> &str {
    match name {
        "UTF-16LE" | "UTF-16BE" => "UTF-8",
        "x-user-defined" => "windows-1252",
        other => other,
    }
}

/// Decode the matched bytes for display. Undecodable bytes become `\xNN`.
fn render(bytes: &[u8], decoder: Option<&str>) -> String {
    match decoder.and_then(|name| Encoding::for_label(name.as_bytes())) {
        Some(encoding) => decode_escaped(encoding, bytes),
        None => ascii_escaped(bytes),
    }
}

fn decode_escaped(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut out = String::new();
    let mut consumed = 0;
    loop {
        let src = &bytes[consumed..];
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(src.len())
            .unwrap_or(src.len() * 4)
            .max(16);
        out.reserve(needed);
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return out,
            DecoderResult::OutputFull => {}
            DecoderResult::Malformed(bad, after) => {
                let bad_end = consumed - usize::from(after);
                let bad_start = bad_end.saturating_sub(usize::from(bad));
                for b in &bytes[bad_start..bad_end] {
                    let _ = write!(out, "\\x{b:02x}");
                }
            }
        }
    }
}

fn ascii_escaped(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b.is_ascii() {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "\\x{b:02x}");
        }
    }
    out
}
