//! Encoding label resolution.
//!
//! Turns a free-form label as found in markup (`" Greek "`) into a
//! normalized label and canonical encoding name (`greek`, `ISO-8859-7`).
//! Unknown labels resolve to nothing; that is never an error.

use phf::phf_map;

use crate::cursor::SPACES;
use crate::table::EncodingTable;

/// Canonical names whose host decoder differs from the name itself.
///
/// Every other canonical name is also a valid `encoding_rs` label.
static DECODER_NAMES: phf::Map<&'static str, Option<&'static str>> = phf_map! {
    "replacement" => None,
    "x-user-defined" => Some("windows-1252"),
};

/// A label that resolved against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    /// The label trimmed and lowercased, non-ASCII bytes dropped.
    pub label: String,
    /// Canonical encoding name.
    pub name: String,
}

/// Normalize `raw` and look it up in `table`.
pub fn resolve_label(raw: &[u8], table: &EncodingTable) -> Option<ResolvedLabel> {
    let label = normalize(raw);
    let name = table.get(&label)?;
    Some(ResolvedLabel {
        name: name.to_owned(),
        label,
    })
}

/// Host decoder name for a canonical encoding name.
///
/// `None` means there is no real decoder (the `replacement` pseudo-encoding);
/// use [`crate::replacement`] for it.
pub fn decoder_name(name: &str) -> Option<&str> {
    match DECODER_NAMES.get(name) {
        Some(mapped) => *mapped,
        None => Some(name),
    }
}

fn normalize(raw: &[u8]) -> String {
    let start = raw.iter().position(|b| !SPACES.contains(b)).unwrap_or(raw.len());
    let end = raw.iter().rposition(|b| !SPACES.contains(b)).map_or(start, |i| i + 1);
    raw[start..end]
        .iter()
        .filter(|b| b.is_ascii())
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect()
}
