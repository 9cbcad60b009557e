//! Attribute micro-grammar for the prescan.
//!
//! This is the "get an attribute" step of the HTML prescan, not a full
//! tokenizer: names and values are ASCII-lowercased, character references
//! are not decoded, and anything cut off by the end of input is dropped.

use crate::cursor::{is_space, ByteCursor};

/// One name/value pair, both ASCII-lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
}

impl Attribute {
    fn new(name: Vec<u8>, value: Vec<u8>) -> Self {
        Self { name, value }
    }
}

/// What the attribute parser found at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeToken {
    Attribute(Attribute),
    /// The tag's `>` was reached and consumed.
    TagEnd,
    /// Input ran out before the tag closed.
    EndOfInput,
}

/// Parse the next attribute of the current tag.
///
/// The cursor must sit after the tag name or after a previous attribute.
pub fn next_attribute(cur: &mut ByteCursor<'_>) -> AttributeToken {
    cur.skip_while(|b| is_space(b) || b == b'/');
    if cur.peek() == Some(b'>') {
        cur.advance(1);
        return AttributeToken::TagEnd;
    }

    let mut name = Vec::new();
    loop {
        let Some(c) = cur.peek() else {
            return AttributeToken::EndOfInput;
        };
        match c {
            b'=' if !name.is_empty() => {
                cur.advance(1);
                if cur.is_eof() {
                    return bare(name);
                }
                break;
            }
            c if is_space(c) => {
                cur.advance(1);
                if cur.skip_spaces() != Some(b'=') {
                    return bare(name);
                }
                cur.advance(1);
                break;
            }
            b'/' | b'>' => return bare(name),
            c => name.push(c.to_ascii_lowercase()),
        }
        cur.advance(1);
    }
    if cur.is_eof() {
        return AttributeToken::EndOfInput;
    }

    let mut value = Vec::new();
    match cur.skip_spaces() {
        Some(quote @ (b'"' | b'\'')) => {
            cur.advance(1);
            while let Some(b) = cur.peek() {
                cur.advance(1);
                if b == quote {
                    return AttributeToken::Attribute(Attribute::new(name, value));
                }
                value.push(b.to_ascii_lowercase());
            }
            return bare(name);
        }
        Some(b'>') => return bare(name),
        Some(b) => {
            value.push(b.to_ascii_lowercase());
            cur.advance(1);
        }
        None => {}
    }
    while let Some(b) = cur.peek() {
        if is_space(b) || b == b'>' {
            return AttributeToken::Attribute(Attribute::new(name, value));
        }
        value.push(b.to_ascii_lowercase());
        cur.advance(1);
    }
    // Unquoted value cut off by the end of input.
    bare(name)
}

#[inline]
fn bare(name: Vec<u8>) -> AttributeToken {
    AttributeToken::Attribute(Attribute::new(name, Vec::new()))
}
