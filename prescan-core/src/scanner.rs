//! Tag scanner: the state machine that walks the prescan window looking
//! for a `<meta>` tag that declares a charset.
//!
//! # States
//!
//! ```text
//!               ┌──────────── '<!--' ──────────▶ InComment ─────────┐
//!               ├──── '<meta' + space or '/' ──▶ InMetaAttributes ─┤──▶ Found
//!  Scanning ────┼── '<' or '</' + letter ──────▶ InOtherTagName    │
//!     ▲         │                                  └▶ InOtherTagAttributes
//!     │         └──── '<!' '</' '<?' ──────────▶ InBogusComment ────┤
//!     └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Comments, bogus comments and unrecognized `<` finish with a one-byte
//! step past where they stopped. Tags resume scanning right where their
//! attribute list ended.

use log::trace;

use crate::attribute::{next_attribute, AttributeToken};
use crate::content::charset_from_content;
use crate::cursor::{is_space, ByteCursor};
use crate::label::{resolve_label, ResolvedLabel};
use crate::table::EncodingTable;

/// Canonical name that the prescan never accepts from a meta tag.
const REPLACEMENT: &str = "replacement";

/// Tag scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the next `<`.
    Scanning,
    /// After `<!--`.
    InComment,
    /// After `<meta` and one space or `/`; `start` is the position of `<`.
    InMetaAttributes { start: usize },
    /// After `<x` or `</x`, inside the tag name.
    InOtherTagName,
    /// After the tag name of a non-meta tag.
    InOtherTagAttributes,
    /// After `<!`, `</` or `<?`.
    InBogusComment,
}

/// A meta tag that declared a usable charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaMatch {
    /// Normalized label as written in the tag.
    pub label: String,
    /// Canonical encoding name, before UTF-16 and x-user-defined substitution.
    pub name: String,
    /// Position of the tag's `<`.
    pub start: usize,
    /// Position just past the tag's `>`.
    pub end: usize,
}

/// Charset found so far in one meta tag.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CharsetState {
    Unset,
    /// A `charset` attribute with an unknown label.
    NoCharset,
    Charset { resolved: ResolvedLabel, need_pragma: bool },
}

/// Drives the scan over one window of input.
pub struct TagScanner<'a, 't> {
    cur: ByteCursor<'a>,
    table: &'t EncodingTable,
    state: ScanState,
}

impl<'a, 't> TagScanner<'a, 't> {
    /// Scanner over `window`, which the caller has already cut to the limit.
    pub fn new(window: &'a [u8], table: &'t EncodingTable) -> Self {
        Self {
            cur: ByteCursor::new(window),
            table,
            state: ScanState::Scanning,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Run until a meta charset is found or the window is exhausted.
    pub fn run(mut self) -> Option<MetaMatch> {
        loop {
            self.state = match self.state {
                ScanState::Scanning => self.find_tag()?,
                ScanState::InComment => {
                    self.skip_comment();
                    self.cur.advance(1);
                    ScanState::Scanning
                }
                ScanState::InMetaAttributes { start } => {
                    if let Some(found) = self.meta_attributes(start) {
                        return Some(found);
                    }
                    ScanState::Scanning
                }
                ScanState::InOtherTagName => {
                    self.cur.skip_until(|b| is_space(b) || b == b'>');
                    ScanState::InOtherTagAttributes
                }
                ScanState::InOtherTagAttributes => {
                    while let AttributeToken::Attribute(_) = next_attribute(&mut self.cur) {}
                    ScanState::Scanning
                }
                ScanState::InBogusComment => {
                    self.cur.skip_until(|b| b == b'>');
                    self.cur.advance(1);
                    ScanState::Scanning
                }
            };
        }
    }

    /// `Scanning`: move to the next `<` and decide what it opens.
    ///
    /// `None` when there is no `<` left.
    fn find_tag(&mut self) -> Option<ScanState> {
        if self.cur.is_eof() || !self.cur.seek(b'<') {
            return None;
        }
        let cur = &mut self.cur;
        let next = if cur.starts_with(b"<!--") {
            cur.advance(4);
            ScanState::InComment
        } else if cur.starts_with_ignore_case(b"<meta") {
            let start = cur.pos();
            cur.advance(5);
            match cur.peek() {
                Some(b) if is_space(b) || b == b'/' => {
                    cur.advance(1);
                    ScanState::InMetaAttributes { start }
                }
                _ => {
                    cur.advance(1);
                    ScanState::Scanning
                }
            }
        } else if cur.peek_at(1).is_some_and(|b| b.is_ascii_alphabetic()) {
            cur.advance(2);
            ScanState::InOtherTagName
        } else if cur.starts_with(b"</") && cur.peek_at(2).is_some_and(|b| b.is_ascii_alphabetic()) {
            cur.advance(3);
            ScanState::InOtherTagName
        } else if matches!(cur.get(2), b"<!" | b"</" | b"<?") {
            cur.advance(2);
            ScanState::InBogusComment
        } else {
            cur.advance(1);
            ScanState::Scanning
        };
        trace!("prescan: {:?} at {}", next, self.cur.pos());
        Some(next)
    }

    /// `InComment`: stop on the last byte of the comment's end.
    ///
    /// `<!-->` and `<!--->` count as complete comments.
    fn skip_comment(&mut self) {
        if self.cur.peek() == Some(b'>') {
            return;
        }
        if self.cur.starts_with(b"->") {
            self.cur.advance(1);
        } else if self.cur.seek_seq(b"-->") {
            self.cur.advance(2);
        }
    }

    /// `InMetaAttributes`: read the whole attribute list and decide.
    fn meta_attributes(&mut self, start: usize) -> Option<MetaMatch> {
        let mut seen: Vec<Vec<u8>> = Vec::new();
        let mut got_pragma = false;
        let mut charset = CharsetState::Unset;

        let closed = loop {
            let attribute = match next_attribute(&mut self.cur) {
                AttributeToken::Attribute(attribute) => attribute,
                AttributeToken::TagEnd => break true,
                AttributeToken::EndOfInput => break false,
            };
            if seen.contains(&attribute.name) {
                continue;
            }
            match attribute.name.as_slice() {
                b"http-equiv" => {
                    if attribute.value == b"content-type" {
                        got_pragma = true;
                    }
                }
                b"content" => {
                    if let Some(resolved) = charset_from_content(&attribute.value, self.table) {
                        if charset == CharsetState::Unset {
                            charset = CharsetState::Charset {
                                resolved,
                                need_pragma: true,
                            };
                        }
                    }
                }
                b"charset" => {
                    charset = match resolve_label(&attribute.value, self.table) {
                        Some(resolved) => CharsetState::Charset {
                            resolved,
                            need_pragma: false,
                        },
                        None => CharsetState::NoCharset,
                    };
                }
                _ => {}
            }
            seen.push(attribute.name);
        };

        if !closed {
            trace!("prescan: meta at {} cut off by end of input", start);
            return None;
        }
        match charset {
            CharsetState::Charset { need_pragma: true, .. } if !got_pragma => {
                trace!("prescan: meta at {} has content charset but no pragma", start);
                None
            }
            CharsetState::Charset { resolved, .. } if resolved.name != REPLACEMENT => Some(MetaMatch {
                label: resolved.label,
                name: resolved.name,
                start,
                end: self.cur.pos(),
            }),
            _ => None,
        }
    }
}

/// Scan `window` for a meta charset.
pub fn scan_tags(window: &[u8], table: &EncodingTable) -> Option<MetaMatch> {
    TagScanner::new(window, table).run()
}
