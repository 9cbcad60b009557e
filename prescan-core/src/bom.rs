//! Byte-order mark detection.

/// A recognized byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    Utf8,
    Utf16Be,
    Utf16Le,
}

impl Bom {
    /// Detect a BOM at the start of `input`.
    pub fn detect(input: &[u8]) -> Option<Bom> {
        match input {
            [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
            [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
            [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
            _ => None,
        }
    }

    /// Canonical encoding name.
    pub fn encoding_name(self) -> &'static str {
        match self {
            Bom::Utf8 => "UTF-8",
            Bom::Utf16Be => "UTF-16BE",
            Bom::Utf16Le => "UTF-16LE",
        }
    }

    /// Number of BOM bytes.
    pub fn byte_len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Be | Bom::Utf16Le => 2,
        }
    }

    /// Hex spelling of the BOM bytes, used as the match text.
    pub fn hint(self) -> &'static str {
        match self {
            Bom::Utf8 => "EFBBBF",
            Bom::Utf16Be => "FEFF",
            Bom::Utf16Le => "FFFE",
        }
    }

    /// `input` without its leading BOM.
    pub fn strip(self, input: &[u8]) -> &[u8] {
        &input[self.byte_len()..]
    }
}
