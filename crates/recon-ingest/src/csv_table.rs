//! CSV table reading and atomic writing.

use std::path::Path;

use csv::{ReaderBuilder, Writer};
use tempfile::NamedTempFile;

use recon_model::ReportTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a headered CSV into a [`ReportTable`].
///
/// Header names are trimmed and BOM-stripped. Entirely empty rows are
/// dropped; short rows are padded and long rows truncated so every row
/// matches the header arity. Cell values are kept verbatim; identifier
/// trimming happens at join points, not here.
pub fn read_csv_table(path: &Path) -> Result<ReportTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = ReportTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for index in 0..table.headers.len() {
            row.push(record.get(index).unwrap_or("").to_string());
        }
        table.rows.push(row);
    }
    Ok(table)
}

/// Writes a [`ReportTable`] to `path` atomically.
///
/// The table lands in a temporary file in the destination directory first
/// and is persisted over the destination in one step. A failed run leaves
/// either the previous content or the complete new content, never a
/// truncated file.
pub fn write_csv_table(path: &Path, table: &ReportTable) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp =
        NamedTempFile::new_in(parent).map_err(|source| IngestError::io(path, source))?;
    {
        let mut writer = Writer::from_writer(&mut temp);
        writer
            .write_record(&table.headers)
            .map_err(|source| IngestError::csv(path, source))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|source| IngestError::csv(path, source))?;
        }
        writer
            .flush()
            .map_err(|source| IngestError::io(path, source))?;
    }
    temp.persist(path)
        .map_err(|error| IngestError::io(path, error.error))?;
    Ok(())
}
