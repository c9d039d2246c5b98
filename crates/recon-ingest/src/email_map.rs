//! Loader for the identifier→email mapping dump.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Loads the identifier→email map from a whitespace-delimited dump.
///
/// The first token of each line is the email, the second the identifier;
/// lines with fewer than two tokens are skipped. A repeated identifier keeps
/// the last email seen. An unreadable file or an empty resulting map is an
/// error: the enrich job is fail-fast on its map.
pub fn load_email_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let mut map = BTreeMap::new();
    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(email), Some(user_id)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        map.insert(user_id.to_string(), email.to_string());
    }
    if map.is_empty() {
        return Err(IngestError::EmptyEmailMap {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), mappings = map.len(), "loaded email map");
    Ok(map)
}
