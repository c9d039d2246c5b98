//! Export flattening: nested item records to one row per unique identifier.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use recon_ingest::export::ExportRecord;
use recon_ingest::read_export_file;
use recon_model::{
    ExtractStats, FieldSource, PROFILE_FIELDS, RecordSet, ReportTable, USER_KEY_PREFIX, UserId,
    profile_header,
};

/// Flattened profile table plus run counters.
#[derive(Debug)]
pub struct ExtractOutcome {
    pub table: ReportTable,
    pub stats: ExtractStats,
}

enum Flattened {
    Row { id: UserId, row: Vec<String> },
    NotUser,
    EmptyId,
}

/// Flattens export item records into one row per unique identifier.
///
/// Input files are read in order; records outside the user namespace are
/// skipped, and a repeated identifier keeps the values of its last occurrence
/// in file-then-line order while holding its first-seen position. An
/// unreadable input file is logged and skipped; the remaining files are
/// still processed.
pub fn run_extract(inputs: &[PathBuf]) -> Result<ExtractOutcome> {
    let mut records = RecordSet::new();
    let mut stats = ExtractStats::default();
    for path in inputs {
        info!(path = %path.display(), "reading export file");
        let scan = match read_export_file(path) {
            Ok(scan) => scan,
            Err(error) => {
                stats.files_missing += 1;
                warn!(path = %path.display(), %error, "skipping unreadable export file");
                continue;
            }
        };
        stats.files_read += 1;
        stats.lines_read += scan.lines_read;
        stats.parse_failures += scan.parse_failures;
        for record in &scan.records {
            match flatten_record(record) {
                Flattened::Row { id, row } => {
                    records.upsert(id, row);
                }
                Flattened::NotUser => stats.skipped_non_user += 1,
                Flattened::EmptyId => stats.skipped_empty_id += 1,
            }
        }
    }
    stats.unique_rows = records.len();
    info!(
        lines = stats.lines_read,
        unique = stats.unique_rows,
        skipped = stats.skipped_total(),
        "extract complete"
    );
    let mut table = ReportTable::new(profile_header());
    for row in records.into_rows() {
        table.push_row(row)?;
    }
    Ok(ExtractOutcome { table, stats })
}

/// Applies the field-mapping table to one record.
///
/// Missing groups, missing fields, and non-string leaves all flatten to an
/// empty string rather than failing the row.
fn flatten_record(record: &ExportRecord) -> Flattened {
    let Some(primary_key) = record.primary_key() else {
        return Flattened::NotUser;
    };
    let Some(raw_id) = primary_key.strip_prefix(USER_KEY_PREFIX) else {
        return Flattened::NotUser;
    };
    let Ok(id) = UserId::new(raw_id) else {
        return Flattened::EmptyId;
    };
    let row = PROFILE_FIELDS
        .iter()
        .map(|mapping| match mapping.source {
            FieldSource::PrimaryKey => id.as_str().to_string(),
            FieldSource::Group { group, field } => record
                .attribute(group)
                .and_then(|value| value.string_field(field))
                .map(str::to_string)
                .unwrap_or_default(),
        })
        .collect();
    Flattened::Row { id, row }
}
