//! Encoding label table: label → canonical encoding name.
//!
//! The source format is the WHATWG `encodings.json`: a list of categories,
//! each with a list of encodings, each with a canonical `name` and its
//! `labels`. The table flattens that into one lookup map.
//!
//! A copy of the WHATWG file is compiled in and parsed once per process
//! (see [`EncodingTable::builtin`]). Alternate sources are loaded into
//! separate tables and never touch the built-in one. [`TableCache`]
//! memoizes file-backed tables so each path is read once.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use log::debug;
use serde::Deserialize;

use crate::error::{PrescanError, Result};

const BUILTIN_JSON: &str = include_str!("../data/encodings.json");

static BUILTIN: OnceLock<std::result::Result<EncodingTable, String>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct Category {
    encodings: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    name: String,
    labels: Vec<String>,
}

/// Immutable label → canonical name map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodingTable {
    labels: HashMap<String, String>,
}

impl EncodingTable {
    /// The compiled-in WHATWG table, parsed on first use.
    pub fn builtin() -> Result<&'static EncodingTable> {
        BUILTIN
            .get_or_init(|| {
                let table = Self::from_json(BUILTIN_JSON).map_err(|e| e.to_string())?;
                debug!("loaded built-in encoding table ({} labels)", table.len());
                Ok(table)
            })
            .as_ref()
            .map_err(|msg| PrescanError::TableFormat(msg.clone()))
    }

    /// Parse a table from `encodings.json` text.
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<Category> =
            serde_json::from_str(json).map_err(|e| PrescanError::TableFormat(e.to_string()))?;
        Ok(Self::from_categories(categories))
    }

    /// Parse a table from a reader yielding `encodings.json` content.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_reader(reader)
            .map_err(|e| PrescanError::TableFormat(e.to_string()))?;
        Ok(Self::from_categories(categories))
    }

    /// Load a table from an `encodings.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PrescanError::TableIo {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!("loaded encoding table {:?} ({} labels)", path, table.len());
        Ok(table)
    }

    fn from_categories(categories: Vec<Category>) -> Self {
        // Labels are stored lowercased; the resolver lowercases its input.
        let labels = categories
            .into_iter()
            .flat_map(|category| category.encodings)
            .flat_map(|entry| {
                let name = entry.name;
                entry
                    .labels
                    .into_iter()
                    .map(move |label| (label.to_ascii_lowercase(), name.clone()))
            })
            .collect();
        Self { labels }
    }

    /// Canonical name for an already-normalized (trimmed, lowercase) label.
    #[inline]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(label, name)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(l, n)| (l.as_str(), n.as_str()))
    }
}

/// Memoizes file-backed tables by path.
///
/// Safe to share between threads. A path is read at most once; later loads
/// return the same `Arc`.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: Mutex<HashMap<PathBuf, Arc<EncodingTable>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the table for `path`, reading the file on the first request only.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<EncodingTable>> {
        let path = path.as_ref();
        // A poisoned lock only means another loader panicked; the map is still valid.
        let mut tables = self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(table) = tables.get(path) {
            debug!("encoding table cache hit for {:?}", path);
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(EncodingTable::from_path(path)?);
        tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
