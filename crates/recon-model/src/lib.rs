pub mod error;
pub mod ids;
pub mod mapping;
pub mod stats;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::UserId;
pub use mapping::{
    EMAIL_COLUMN, EMAIL_FROM_LEADERBOARD_ONLY, EMAIL_NOT_FOUND, FieldMapping, FieldSource,
    PROFILE_FIELDS, SCORE_COLUMN, USER_ID_COLUMN, USER_KEY_PREFIX, profile_header,
};
pub use stats::{DiffStats, EnrichStats, ExtractStats, LeaderboardStats};
pub use table::{RecordSet, ReportTable};
