//! Job commands wiring the ingest, merge, and output stages.
//!
//! Each command is one complete batch run: load every input fully, merge in
//! memory, write the output atomically. Fatal errors (missing required
//! input, unparsable required document, missing required column) surface
//! before any output is written; degraded completions still write and carry
//! a warning into the run summary.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use recon_core::{run_diff, run_enrich, run_extract, run_leaderboard};
use recon_ingest::{load_email_map, load_score_map, read_csv_table, write_csv_table};

use crate::cli::{DiffArgs, EnrichArgs, ExtractArgs, LeaderboardArgs};
use crate::types::JobReport;

pub fn extract(args: &ExtractArgs) -> Result<JobReport> {
    let span = info_span!("extract");
    let _guard = span.enter();
    let outcome = run_extract(&args.inputs)?;
    write_csv_table(&args.output, &outcome.table)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        rows = outcome.table.len(),
        "profile table written"
    );
    let stats = outcome.stats;
    let mut report = JobReport::new("extract", &args.output)
        .counter("input files read", stats.files_read)
        .counter("lines read", stats.lines_read)
        .counter("parse failures", stats.parse_failures)
        .counter("non-user records skipped", stats.skipped_non_user)
        .counter("empty identifiers skipped", stats.skipped_empty_id)
        .counter("unique rows kept", stats.unique_rows);
    if stats.files_missing > 0 {
        report = report.warning(format!(
            "{} input file(s) could not be read",
            stats.files_missing
        ));
    }
    Ok(report)
}

pub fn enrich(args: &EnrichArgs) -> Result<JobReport> {
    let span = info_span!("enrich");
    let _guard = span.enter();
    let emails = load_email_map(&args.emails)
        .with_context(|| format!("load email map {}", args.emails.display()))?;
    info!(mappings = emails.len(), "email map loaded");
    let profiles = read_csv_table(&args.profiles)
        .with_context(|| format!("read profiles {}", args.profiles.display()))?;
    let outcome = run_enrich(&profiles, &emails)?;
    write_csv_table(&args.output, &outcome.table)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        rows = outcome.table.len(),
        "enriched report written"
    );
    let stats = outcome.stats;
    Ok(JobReport::new("enrich", &args.output)
        .counter("email mappings", stats.mappings)
        .counter("rows written", stats.rows_written)
        .counter("emails matched", stats.matched)
        .counter("emails defaulted", stats.defaulted))
}

pub fn leaderboard(args: &LeaderboardArgs) -> Result<JobReport> {
    let span = info_span!("leaderboard");
    let _guard = span.enter();
    let scores = load_score_map(&args.leaderboard)
        .with_context(|| format!("load leaderboard {}", args.leaderboard.display()))?;
    info!(scores = scores.len(), "leaderboard scores loaded");
    let enriched = read_csv_table(&args.report)
        .with_context(|| format!("read report {}", args.report.display()))?;
    let outcome = run_leaderboard(&enriched, &scores)?;
    write_csv_table(&args.output, &outcome.table)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        rows = outcome.table.len(),
        "leaderboard report written"
    );
    let stats = outcome.stats;
    let mut report = JobReport::new("leaderboard", &args.output)
        .counter("scores loaded", stats.scores)
        .counter("profile rows matched", stats.matched)
        .counter("sparse rows synthesized", stats.synthesized)
        .counter("rows written", stats.rows_written);
    if !stats.sorted {
        report = report.warning("a score failed integer parsing; output left in merge order");
    }
    if stats.rows_written != stats.scores {
        warn!(
            expected = stats.scores,
            actual = stats.rows_written,
            "report row count diverges from score map size"
        );
        report = report.warning(format!(
            "row count {} does not match score map size {}",
            stats.rows_written, stats.scores
        ));
    }
    Ok(report)
}

pub fn diff(args: &DiffArgs) -> Result<JobReport> {
    let span = info_span!("diff");
    let _guard = span.enter();
    let current = read_csv_table(&args.current)
        .with_context(|| format!("read current snapshot {}", args.current.display()))?;
    let old = read_csv_table(&args.old)
        .with_context(|| format!("read old snapshot {}", args.old.display()))?;
    let outcome = run_diff(&current, &old)?;
    write_csv_table(&args.output, &outcome.table)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        rows = outcome.table.len(),
        "new-user report written"
    );
    let stats = outcome.stats;
    Ok(JobReport::new("diff", &args.output)
        .counter("current rows", stats.current_rows)
        .counter("old rows", stats.old_rows)
        .counter("new rows", stats.new_rows))
}
