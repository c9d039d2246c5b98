//! Per-job run counters surfaced in the CLI summary.

/// Counters for the export-flattening job.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractStats {
    pub files_read: usize,
    pub files_missing: usize,
    pub lines_read: usize,
    pub parse_failures: usize,
    pub skipped_non_user: usize,
    pub skipped_empty_id: usize,
    pub unique_rows: usize,
}

impl ExtractStats {
    /// Records discarded for any reason, duplicates excluded.
    pub fn skipped_total(&self) -> usize {
        self.parse_failures + self.skipped_non_user + self.skipped_empty_id
    }
}

/// Counters for the email-enrichment job.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnrichStats {
    pub mappings: usize,
    pub rows_written: usize,
    pub matched: usize,
    pub defaulted: usize,
}

/// Counters for the leaderboard-merge job.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeaderboardStats {
    pub scores: usize,
    pub matched: usize,
    pub synthesized: usize,
    pub rows_written: usize,
    /// False when a non-integer score forced the unsorted fallback.
    pub sorted: bool,
}

/// Counters for the snapshot-diff job.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffStats {
    pub current_rows: usize,
    pub old_rows: usize,
    pub new_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_total_sums_discards() {
        let stats = ExtractStats {
            parse_failures: 1,
            skipped_non_user: 2,
            skipped_empty_id: 3,
            ..ExtractStats::default()
        };
        assert_eq!(stats.skipped_total(), 6);
    }
}
