//! Snapshot diff: rows added since an older snapshot of the same report.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::info;

use recon_model::{DiffStats, ReportTable, USER_ID_COLUMN};

/// Additive-diff table plus run counters.
#[derive(Debug)]
pub struct DiffOutcome {
    pub table: ReportTable,
    pub stats: DiffStats,
}

/// Rows of the current snapshot whose identifier is absent from the old one.
///
/// Strictly additive: removed and modified rows are out of scope. Output
/// order follows the current snapshot.
pub fn run_diff(current: &ReportTable, old: &ReportTable) -> Result<DiffOutcome> {
    let current_id = current.require_column(USER_ID_COLUMN)?;
    let old_id = old.require_column(USER_ID_COLUMN)?;
    let known: BTreeSet<&str> = old.rows.iter().map(|row| row[old_id].trim()).collect();
    let mut table = ReportTable::new(current.headers.clone());
    for row in &current.rows {
        if known.contains(row[current_id].trim()) {
            continue;
        }
        table.push_row(row.clone())?;
    }
    let stats = DiffStats {
        current_rows: current.len(),
        old_rows: old.len(),
        new_rows: table.len(),
    };
    info!(
        current = stats.current_rows,
        old = stats.old_rows,
        new = stats.new_rows,
        "diff complete"
    );
    Ok(DiffOutcome { table, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> ReportTable {
        let mut table = ReportTable::new(headers.iter().map(|h| (*h).to_string()).collect());
        for row in rows {
            table
                .push_row(row.iter().map(|cell| (*cell).to_string()).collect())
                .expect("row arity");
        }
        table
    }

    #[test]
    fn reports_exactly_the_added_identifiers() {
        let current = table(
            &["Email", "userId"],
            &[&["a@x.com", "u1"], &["b@x.com", "u2"], &["c@x.com", "u3"]],
        );
        let old = table(&["Email", "userId"], &[&["a@x.com", "u1"], &["c@x.com", "u3"]]);
        let outcome = run_diff(&current, &old).expect("diff");
        assert_eq!(outcome.table.rows, vec![vec!["b@x.com", "u2"]]);
        assert_eq!(outcome.stats.new_rows, 1);
    }

    #[test]
    fn identifier_comparison_trims_whitespace() {
        let current = table(&["userId"], &[&[" u1 "], &["u2"]]);
        let old = table(&["userId"], &[&["u1"]]);
        let outcome = run_diff(&current, &old).expect("diff");
        assert_eq!(outcome.table.rows, vec![vec!["u2"]]);
    }

    #[test]
    fn missing_identifier_column_in_either_snapshot_fails() {
        let with = table(&["userId"], &[]);
        let without = table(&["name"], &[]);
        assert!(run_diff(&with, &without).is_err());
        assert!(run_diff(&without, &with).is_err());
    }
}
