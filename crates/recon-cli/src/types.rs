use std::path::{Path, PathBuf};

/// Outcome of one CLI job, rendered by the run summary.
#[derive(Debug)]
pub struct JobReport {
    pub job: &'static str,
    pub output: PathBuf,
    pub counters: Vec<Counter>,
    pub warnings: Vec<String>,
}

/// One labeled count in the run summary.
#[derive(Debug)]
pub struct Counter {
    pub label: &'static str,
    pub value: usize,
}

impl JobReport {
    pub fn new(job: &'static str, output: &Path) -> Self {
        Self {
            job,
            output: output.to_path_buf(),
            counters: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn counter(mut self, label: &'static str, value: usize) -> Self {
        self.counters.push(Counter { label, value });
        self
    }

    #[must_use]
    pub fn warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }
}
