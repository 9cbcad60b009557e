//! HTML5 Prescan Core
//!
//! Determines a document's character encoding from its first bytes, before
//! any decoding: a byte-order mark, or a `<meta>` tag declaring a charset,
//! resolved to a canonical WHATWG encoding name.
//!
//! # Architecture
//!
//! - **prescan.rs** - Orchestration: BOM, tag scan, canonicalization, `ScanResult`
//! - **scanner.rs** - Tag scanner state machine
//! - **attribute.rs** - Attribute micro-grammar
//! - **content.rs** - `charset=` extraction from `content` values
//! - **label.rs** - Label normalization and lookup, host decoder names
//! - **table.rs** - Label table loading and caching
//! - **cursor.rs** - Byte cursor shared by all stages
//! - **bom.rs** - Byte-order marks
//! - **replacement.rs** - The `replacement` pseudo-encoding
//!
//! # Example
//!
//! ```
//! let (result, rest) = prescan_core::scan(b"<meta charset=greek>").unwrap();
//! assert_eq!(result.label.as_deref(), Some("greek"));
//! assert_eq!(result.name.as_deref(), Some("ISO-8859-7"));
//! assert_eq!(result.span(), 0..20);
//! assert_eq!(rest, b"<meta charset=greek>");
//! ```

pub mod attribute;
pub mod bom;
pub mod content;
pub mod cursor;
pub mod error;
pub mod label;
pub mod prescan;
pub mod replacement;
pub mod scanner;
pub mod table;

pub use bom::Bom;
pub use error::{PrescanError, Result};
pub use label::{decoder_name, resolve_label, ResolvedLabel};
pub use prescan::{scan, Prescanner, ScanResult, DEFAULT_LIMIT};
pub use scanner::{MetaMatch, ScanState, TagScanner};
pub use table::{EncodingTable, TableCache};
