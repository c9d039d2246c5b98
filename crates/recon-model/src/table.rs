//! In-memory report tables and the ordered dedup store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::ModelError;
use crate::ids::UserId;

/// An ordered header plus rows, the unit every job reads and writes.
///
/// Invariant: every row pushed through [`ReportTable::push_row`] has exactly
/// as many fields as the header.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Position of a column, or [`ModelError::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<usize, ModelError> {
        self.column_index(name)
            .ok_or_else(|| ModelError::MissingColumn(name.to_string()))
    }

    /// Appends a row, rejecting arity mismatches against the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), ModelError> {
        if row.len() != self.headers.len() {
            return Err(ModelError::RowArity {
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Insertion-order-preserving dedup store keyed by identifier.
///
/// Re-upserting an identifier replaces the stored row in place without
/// moving it, so output order is first-seen order while field values are
/// last-write-wins. This replaces the unordered-map iteration the export
/// tooling historically relied on.
#[derive(Debug, Default)]
pub struct RecordSet {
    rows: Vec<Vec<String>>,
    index: BTreeMap<UserId, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the row for `id`. Returns true when `id` was new.
    pub fn upsert(&mut self, id: UserId, row: Vec<String>) -> bool {
        match self.index.entry(id) {
            Entry::Occupied(slot) => {
                self.rows[*slot.get()] = row;
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(self.rows.len());
                self.rows.push(row);
                true
            }
        }
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consumes the set, yielding rows in first-seen order.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> UserId {
        UserId::new(value).expect("valid id")
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn push_row_rejects_arity_mismatch() {
        let mut table = ReportTable::new(vec!["a".to_string(), "b".to_string()]);
        assert!(table.push_row(row(&["1", "2"])).is_ok());
        let error = table.push_row(row(&["1"])).unwrap_err();
        assert!(matches!(
            error,
            ModelError::RowArity {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn require_column_reports_missing_name() {
        let table = ReportTable::new(vec!["userId".to_string()]);
        assert_eq!(table.require_column("userId").expect("present"), 0);
        assert!(table.require_column("Email").is_err());
    }

    #[test]
    fn upsert_keeps_first_seen_position_with_latest_values() {
        let mut set = RecordSet::new();
        assert!(set.upsert(id("u1"), row(&["u1", "old"])));
        assert!(set.upsert(id("u2"), row(&["u2", "x"])));
        assert!(!set.upsert(id("u1"), row(&["u1", "new"])));
        assert_eq!(set.len(), 2);
        let rows = set.into_rows();
        assert_eq!(rows[0], row(&["u1", "new"]));
        assert_eq!(rows[1], row(&["u2", "x"]));
    }
}
