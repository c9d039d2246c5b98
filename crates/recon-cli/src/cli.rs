//! CLI argument definitions for the reconciliation toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "userrecon",
    version,
    about = "Reconcile user-profile exports with identity and scoring data",
    long_about = "Merge user-profile records exported from the key-value store with the\n\
                  email dump and leaderboard scores, producing CSV reports.\n\n\
                  Jobs form a pipeline: extract -> enrich -> leaderboard, with diff\n\
                  comparing two snapshots of the enriched report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten key-value export files into a deduplicated profile CSV.
    Extract(ExtractArgs),

    /// Prepend emails from the identity dump to the profile CSV.
    Enrich(EnrichArgs),

    /// Merge leaderboard scores into the enriched report, sorted by score.
    Leaderboard(LeaderboardArgs),

    /// Report rows added since an older snapshot of the enriched report.
    Diff(DiffArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Export files to read, in snapshot order (later files win duplicates).
    #[arg(
        value_name = "EXPORT",
        num_args = 1..,
        default_values = ["1.json", "2.json", "3.json", "4.json"]
    )]
    pub inputs: Vec<PathBuf>,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH", default_value = "users_data.csv")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct EnrichArgs {
    /// Profile CSV produced by `extract`.
    #[arg(
        long = "profiles",
        value_name = "PATH",
        default_value = "users_data.csv"
    )]
    pub profiles: PathBuf,

    /// Identity dump: one "email identifier" pair per line.
    #[arg(
        long = "emails",
        value_name = "PATH",
        default_value = "user_emails.txt"
    )]
    pub emails: PathBuf,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH", default_value = "user_report.csv")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct LeaderboardArgs {
    /// Leaderboard JSON document.
    #[arg(long = "leaderboard", value_name = "PATH", default_value = "lb1.txt")]
    pub leaderboard: PathBuf,

    /// Enriched report produced by `enrich`.
    #[arg(long = "report", value_name = "PATH", default_value = "user_report.csv")]
    pub report: PathBuf,

    /// Output CSV path.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "leaderboard_user_report.csv"
    )]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// Current enriched report.
    #[arg(
        long = "current",
        value_name = "PATH",
        default_value = "user_report.csv"
    )]
    pub current: PathBuf,

    /// Previous snapshot of the same report.
    #[arg(
        long = "old",
        value_name = "PATH",
        default_value = "user_report_old.csv"
    )]
    pub old: PathBuf,

    /// Output CSV path.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "user_report_new.csv"
    )]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
