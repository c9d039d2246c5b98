//! Leaderboard merge: scores joined onto the enriched report, sorted.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use tracing::{info, warn};

use recon_model::{
    EMAIL_COLUMN, EMAIL_FROM_LEADERBOARD_ONLY, LeaderboardStats, ReportTable, SCORE_COLUMN,
    USER_ID_COLUMN,
};

/// Merged report plus run counters.
#[derive(Debug)]
pub struct LeaderboardOutcome {
    pub table: ReportTable,
    pub stats: LeaderboardStats,
}

/// Appends leaderboard scores to the enriched report.
///
/// Rows without a score are dropped. Identifiers that exist only in the
/// score map become sparse rows carrying the marker email, the identifier,
/// and the score at their header positions. Rows are sorted by integer
/// score, highest first; when any score fails to parse the merged rows are
/// written in merge order instead.
pub fn run_leaderboard(
    report: &ReportTable,
    scores: &BTreeMap<String, String>,
) -> Result<LeaderboardOutcome> {
    let user_id_index = report.require_column(USER_ID_COLUMN)?;
    let mut headers = report.headers.clone();
    headers.push(SCORE_COLUMN.to_string());
    let score_index = headers.len() - 1;
    let mut table = ReportTable::new(headers);
    let mut stats = LeaderboardStats {
        scores: scores.len(),
        ..LeaderboardStats::default()
    };

    let mut matched: BTreeSet<&str> = BTreeSet::new();
    for row in &report.rows {
        let user_id = row[user_id_index].trim();
        let Some(score) = scores.get(user_id) else {
            continue;
        };
        let mut merged = row.clone();
        merged.push(score.clone());
        table.push_row(merged)?;
        matched.insert(user_id);
    }
    stats.matched = table.len();

    let unmatched: Vec<(&String, &String)> = scores
        .iter()
        .filter(|(user_id, _)| !matched.contains(user_id.as_str()))
        .collect();
    if !unmatched.is_empty() {
        let email_index = table.require_column(EMAIL_COLUMN)?;
        for (user_id, score) in unmatched {
            warn!(
                user_id = %user_id,
                score = %score,
                "score has no matching profile row; emitting sparse row"
            );
            let mut sparse = vec![String::new(); table.headers.len()];
            sparse[email_index] = EMAIL_FROM_LEADERBOARD_ONLY.to_string();
            sparse[user_id_index] = user_id.clone();
            sparse[score_index] = score.clone();
            table.push_row(sparse)?;
            stats.synthesized += 1;
        }
    }

    stats.sorted = sort_by_score_desc(&mut table.rows, score_index);
    stats.rows_written = table.len();
    info!(
        matched = stats.matched,
        synthesized = stats.synthesized,
        rows = stats.rows_written,
        sorted = stats.sorted,
        "leaderboard merge complete"
    );
    Ok(LeaderboardOutcome { table, stats })
}

/// Sorts rows descending by integer score.
///
/// Scores are compared as integers, not text, so "1000" outranks "900".
/// Returns false and leaves the order untouched when any score fails to
/// parse. Ties keep their merge order.
fn sort_by_score_desc(rows: &mut Vec<Vec<String>>, score_index: usize) -> bool {
    let mut keys: Vec<i64> = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        let raw = row[score_index].trim();
        match raw.parse::<i64>() {
            Ok(value) => keys.push(value),
            Err(error) => {
                warn!(score = raw, %error, "score is not an integer; writing report unsorted");
                return false;
            }
        }
    }
    let mut keyed: Vec<(i64, Vec<String>)> = keys.into_iter().zip(rows.drain(..)).collect();
    keyed.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
    rows.extend(keyed.into_iter().map(|(_, row)| row));
    true
}
