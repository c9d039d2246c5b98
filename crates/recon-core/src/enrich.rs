//! Email enrichment: left-join of profile rows against the email map.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use recon_model::{EMAIL_COLUMN, EMAIL_NOT_FOUND, EnrichStats, ReportTable, USER_ID_COLUMN};

/// Enriched table plus run counters.
#[derive(Debug)]
pub struct EnrichOutcome {
    pub table: ReportTable,
    pub stats: EnrichStats,
}

/// Prepends an `Email` column to every profile row.
///
/// Emails are looked up by identifier and default to the not-found sentinel
/// when the map has no entry, so no output row is ever missing the email
/// field. Input row order is preserved.
pub fn run_enrich(
    profiles: &ReportTable,
    emails: &BTreeMap<String, String>,
) -> Result<EnrichOutcome> {
    let user_id_index = profiles.require_column(USER_ID_COLUMN)?;
    let mut headers = Vec::with_capacity(profiles.headers.len() + 1);
    headers.push(EMAIL_COLUMN.to_string());
    headers.extend(profiles.headers.iter().cloned());
    let mut table = ReportTable::new(headers);
    let mut stats = EnrichStats {
        mappings: emails.len(),
        ..EnrichStats::default()
    };
    for row in &profiles.rows {
        let user_id = row[user_id_index].trim();
        let email = match emails.get(user_id) {
            Some(email) => {
                stats.matched += 1;
                email.clone()
            }
            None => {
                stats.defaulted += 1;
                EMAIL_NOT_FOUND.to_string()
            }
        };
        let mut enriched = Vec::with_capacity(row.len() + 1);
        enriched.push(email);
        enriched.extend(row.iter().cloned());
        table.push_row(enriched)?;
    }
    stats.rows_written = table.len();
    info!(
        rows = stats.rows_written,
        matched = stats.matched,
        defaulted = stats.defaulted,
        "enrich complete"
    );
    Ok(EnrichOutcome { table, stats })
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
    fn missing_identifier_column_is_an_error() {
        let profiles = table(&["name"], &[&["Alice"]]);
        assert!(run_enrich(&profiles, &BTreeMap::new()).is_err());
    }

    #[test]
    fn email_becomes_the_first_column() {
        let profiles = table(&["userId", "name"], &[&["u1", "Alice"]]);
        let mut emails = BTreeMap::new();
        emails.insert("u1".to_string(), "alice@example.com".to_string());
        let outcome = run_enrich(&profiles, &emails).expect("enrich");
        assert_eq!(outcome.table.headers, vec!["Email", "userId", "name"]);
        assert_eq!(
            outcome.table.rows[0],
            vec!["alice@example.com", "u1", "Alice"]
        );
    }
}
