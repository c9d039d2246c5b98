pub mod csv_table;
pub mod email_map;
pub mod error;
pub mod export;
pub mod leaderboard;

pub use csv_table::{read_csv_table, write_csv_table};
pub use email_map::load_email_map;
pub use error::{IngestError, Result};
pub use export::{AttrValue, ExportRecord, ExportScan, PRIMARY_KEY_ATTR, read_export_file};
pub use leaderboard::{LEADERBOARD_KEY, load_score_map};
