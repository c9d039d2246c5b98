//! Reader for line-delimited key-value export files.
//!
//! Each line is one JSON object wrapping an `Item` envelope of named,
//! type-tagged attribute values. Only string leaves are meaningful to the
//! reconciliation jobs; everything else flattens to an empty field.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{IngestError, Result};

/// Attribute holding the record's primary key.
pub const PRIMARY_KEY_ATTR: &str = "PK";

/// A typed attribute value as serialized by the export format.
///
/// Every leaf is a single-key wrapper naming its type, so the externally
/// tagged representation matches the wire format directly.
#[derive(Debug, Clone, Deserialize)]
pub enum AttrValue {
    #[serde(rename = "S")]
    String(String),
    #[serde(rename = "N")]
    Number(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "M")]
    Map(BTreeMap<String, AttrValue>),
    #[serde(rename = "L")]
    List(Vec<AttrValue>),
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
}

impl AttrValue {
    /// Payload of an `S` leaf; other types have no string form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Member lookup inside an `M` group.
    pub fn get(&self, field: &str) -> Option<&AttrValue> {
        match self {
            AttrValue::Map(map) => map.get(field),
            _ => None,
        }
    }

    /// String leaf inside an `M` group, `None` when missing or non-string.
    pub fn string_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(AttrValue::as_str)
    }
}

/// One exported item record.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "Item", default)]
    pub item: BTreeMap<String, AttrValue>,
}

impl ExportRecord {
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.item.get(name)
    }

    /// The primary key string, when present and string-typed.
    pub fn primary_key(&self) -> Option<&str> {
        self.item.get(PRIMARY_KEY_ATTR).and_then(AttrValue::as_str)
    }
}

/// Outcome of scanning one export file.
#[derive(Debug, Default)]
pub struct ExportScan {
    pub records: Vec<ExportRecord>,
    pub lines_read: usize,
    pub parse_failures: usize,
}

/// Reads every record of an export file.
///
/// Unparsable lines are warned about and skipped; the scan never aborts for
/// a bad line. An unreadable file is an error left to the caller.
pub fn read_export_file(path: &Path) -> Result<ExportScan> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let reader = BufReader::new(file);
    let mut scan = ExportScan::default();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IngestError::io(path, source))?;
        scan.lines_read += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<ExportRecord>(trimmed) {
            Ok(record) => scan.records.push(record),
            Err(error) => {
                scan.parse_failures += 1;
                warn!(
                    path = %path.display(),
                    line = number + 1,
                    %error,
                    "skipping unparsable export line"
                );
            }
        }
    }
    Ok(scan)
}
