//! Merge and ordering tests for the leaderboard job.

use std::collections::BTreeMap;

use proptest::prelude::*;

use recon_core::run_leaderboard;
use recon_model::{EMAIL_FROM_LEADERBOARD_ONLY, ReportTable};

fn enriched(rows: &[&[&str]]) -> ReportTable {
    let mut table = ReportTable::new(vec![
        "Email".to_string(),
        "userId".to_string(),
        "firstname".to_string(),
    ]);
    for row in rows {
        table
            .push_row(row.iter().map(|cell| (*cell).to_string()).collect())
            .expect("row arity");
    }
    table
}

fn scores(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(id, score)| ((*id).to_string(), (*score).to_string()))
        .collect()
}

#[test]
fn orders_by_integer_score_descending() {
    let report = enriched(&[
        &["a@x.com", "u1", "One"],
        &["b@x.com", "u2", "Two"],
    ]);
    let outcome =
        run_leaderboard(&report, &scores(&[("u1", "500"), ("u2", "900")])).expect("merge");

    assert_eq!(outcome.table.headers, vec!["Email", "userId", "firstname", "Score"]);
    assert_eq!(outcome.table.rows[0][1], "u2");
    assert_eq!(outcome.table.rows[0][3], "900");
    assert_eq!(outcome.table.rows[1][1], "u1");
    assert!(outcome.stats.sorted);
}

#[test]
fn drops_rows_without_a_score() {
    let report = enriched(&[
        &["a@x.com", "u1", "One"],
        &["b@x.com", "u2", "Two"],
    ]);
    let outcome = run_leaderboard(&report, &scores(&[("u2", "10")])).expect("merge");
    assert_eq!(outcome.table.rows.len(), 1);
    assert_eq!(outcome.table.rows[0][1], "u2");
}

#[test]
fn synthesizes_sparse_rows_for_score_only_identifiers() {
    let report = enriched(&[&["a@x.com", "u1", "One"]]);
    let outcome =
        run_leaderboard(&report, &scores(&[("u1", "100"), ("ghost", "700")])).expect("merge");

    assert_eq!(outcome.table.rows.len(), 2);
    let sparse = &outcome.table.rows[0]; // 700 sorts above 100
    assert_eq!(sparse[0], EMAIL_FROM_LEADERBOARD_ONLY);
    assert_eq!(sparse[1], "ghost");
    assert_eq!(sparse[2], "");
    assert_eq!(sparse[3], "700");
    assert_eq!(outcome.stats.synthesized, 1);
    assert_eq!(outcome.stats.rows_written, outcome.stats.scores);
}

#[test]
fn non_integer_score_keeps_merge_order_but_still_completes() {
    let report = enriched(&[
        &["a@x.com", "u1", "One"],
        &["b@x.com", "u2", "Two"],
    ]);
    let outcome =
        run_leaderboard(&report, &scores(&[("u1", "12"), ("u2", "n/a")])).expect("merge");

    assert!(!outcome.stats.sorted);
    assert_eq!(outcome.table.rows.len(), 2);
    // merge order: input row order, untouched
    assert_eq!(outcome.table.rows[0][1], "u1");
    assert_eq!(outcome.table.rows[1][1], "u2");
}

#[test]
fn missing_email_column_only_matters_when_synthesizing() {
    let mut no_email = ReportTable::new(vec!["userId".to_string()]);
    no_email.push_row(vec!["u1".to_string()]).expect("row arity");

    // every score matches: no sparse rows needed, job completes
    let ok = run_leaderboard(&no_email, &scores(&[("u1", "5")]));
    assert!(ok.is_ok());

    // an unmatched score forces a sparse row, which needs the email column
    let err = run_leaderboard(&no_email, &scores(&[("u1", "5"), ("ghost", "9")]));
    assert!(err.is_err());
}

proptest! {
    /// Output row count always equals the score-map size, and adjacent rows
    /// are in non-increasing integer score order.
    #[test]
    fn row_count_matches_scores_and_order_is_descending(
        score_values in proptest::collection::btree_map("[a-z][a-z0-9]{0,6}", 0i64..1_000_000, 0..20),
        profiled in proptest::collection::vec(any::<bool>(), 20),
    ) {
        let pairs: Vec<(String, String)> = score_values
            .iter()
            .map(|(id, score)| (id.clone(), score.to_string()))
            .collect();
        let score_map: BTreeMap<String, String> = pairs.iter().cloned().collect();

        // profile rows exist for an arbitrary subset of scored identifiers
        let mut report = ReportTable::new(vec!["Email".to_string(), "userId".to_string()]);
        for (pair, has_profile) in pairs.iter().zip(profiled.iter()) {
            if *has_profile {
                report
                    .push_row(vec![format!("{}@example.com", pair.0), pair.0.clone()])
                    .expect("row arity");
            }
        }

        let outcome = run_leaderboard(&report, &score_map).expect("merge");
        prop_assert_eq!(outcome.table.rows.len(), score_map.len());
        prop_assert!(outcome.stats.sorted || score_map.is_empty());
        let score_index = outcome.table.headers.len() - 1;
        for pair in outcome.table.rows.windows(2) {
            let first: i64 = pair[0][score_index].parse().expect("integer score");
            let second: i64 = pair[1][score_index].parse().expect("integer score");
            prop_assert!(first >= second);
        }
    }
}
