//! Loader for the leaderboard score document.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::{IngestError, Result};

/// JSON key holding the flat alternating identifier/score array.
pub const LEADERBOARD_KEY: &str = "leaderBoard";

/// Loads identifier→score from the leaderboard document.
///
/// The array alternates identifier and score entries; a trailing identifier
/// with no score is dropped. Scores may be JSON strings or numbers and are
/// kept as strings either way. A missing or non-array `leaderBoard` key
/// yields an empty map with a warning; an unreadable or unparsable document
/// is an error.
pub fn load_score_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let document: Value = serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let mut scores = BTreeMap::new();
    let Some(entries) = document.get(LEADERBOARD_KEY).and_then(Value::as_array) else {
        warn!(
            path = %path.display(),
            "leaderboard document has no {LEADERBOARD_KEY:?} array"
        );
        return Ok(scores);
    };
    for pair in entries.chunks(2) {
        let [user_id, score] = pair else {
            // odd trailing identifier without a score
            break;
        };
        scores.insert(scalar_string(user_id), scalar_string(score));
    }
    Ok(scores)
}

/// JSON strings without quotes, everything else via its JSON rendering.
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_string_unquotes_strings_and_renders_numbers() {
        assert_eq!(scalar_string(&Value::String("u1".to_string())), "u1");
        assert_eq!(scalar_string(&serde_json::json!(900)), "900");
    }
}
