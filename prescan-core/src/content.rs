//! Extracting a charset from a meta `content` attribute value,
//! e.g. `text/html; charset=utf-8`.

use crate::cursor::{is_space, ByteCursor};
use crate::label::{resolve_label, ResolvedLabel};
use crate::table::EncodingTable;

/// Find `charset=<label>` in `value` and resolve the label.
///
/// A `charset` not followed by `=` is skipped and the search continues.
/// An unterminated quoted label yields nothing.
pub fn charset_from_content(value: &[u8], table: &EncodingTable) -> Option<ResolvedLabel> {
    let mut cur = ByteCursor::new(value);
    loop {
        if cur.is_eof() {
            return None;
        }
        if cur.starts_with_ignore_case(b"charset") {
            cur.advance(7);
            if cur.skip_spaces() == Some(b'=') {
                cur.advance(1);
                break;
            }
            continue;
        }
        cur.advance(1);
    }
    if cur.is_eof() {
        return None;
    }

    let first = cur.skip_spaces();
    let start = cur.pos();
    match first {
        Some(quote @ (b'"' | b'\'')) => {
            cur.advance(1);
            if !cur.seek(quote) {
                return None;
            }
            resolve_label(cur.slice(start + 1, cur.pos()), table)
        }
        _ => {
            cur.skip_until(|b| is_space(b) || b == b';');
            resolve_label(cur.slice(start, cur.pos()), table)
        }
    }
}
