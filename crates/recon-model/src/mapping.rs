//! Declarative field-mapping table for the profile export.
//!
//! Adding an output column is a data change: append a [`FieldMapping`] entry
//! and the extract job picks it up uniformly, defaulting to an empty string
//! when the source attribute is missing or not a string leaf.

/// Namespace prefix of user records in the shared key-value store.
///
/// Records under other prefixes (sessions, states) share the storage and are
/// skipped by the extract job.
pub const USER_KEY_PREFIX: &str = "USER#";

/// Identifier column name, present in every report.
pub const USER_ID_COLUMN: &str = "userId";

/// Email column name added by the enrich job.
pub const EMAIL_COLUMN: &str = "Email";

/// Score column name added by the leaderboard job.
pub const SCORE_COLUMN: &str = "Score";

/// Email placeholder for identifiers absent from the email map.
pub const EMAIL_NOT_FOUND: &str = "EMAIL_NOT_FOUND";

/// Email marker for rows synthesized from the leaderboard alone.
pub const EMAIL_FROM_LEADERBOARD_ONLY: &str = "EMAIL_FROM_LB_ONLY";

/// Where a flat-row field comes from in an export record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The record's primary key with the namespace prefix stripped.
    PrimaryKey,
    /// A string leaf inside a named nested attribute group.
    Group {
        group: &'static str,
        field: &'static str,
    },
}

/// One entry of the mapping table: a source and its output column.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub source: FieldSource,
    pub column: &'static str,
}

/// Field mappings applied to every user record, in output column order.
pub const PROFILE_FIELDS: &[FieldMapping] = &[
    FieldMapping {
        source: FieldSource::PrimaryKey,
        column: USER_ID_COLUMN,
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserDetails",
            field: "preferred_username",
        },
        column: "preferred_username",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserDetails",
            field: "picture",
        },
        column: "picture",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "firstname",
        },
        column: "firstname",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "lastname",
        },
        column: "lastname",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "mobile",
        },
        column: "mobile",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "nic",
        },
        column: "nic",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "district",
        },
        column: "district",
    },
    FieldMapping {
        source: FieldSource::Group {
            group: "UserInsights",
            field: "nearest_branch",
        },
        column: "nearest_branch",
    },
];

/// Header of the flat profile table, derived from the mapping table.
pub fn profile_header() -> Vec<String> {
    PROFILE_FIELDS
        .iter()
        .map(|mapping| mapping.column.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_starts_with_identifier() {
        let header = profile_header();
        assert_eq!(header.len(), PROFILE_FIELDS.len());
        assert_eq!(header[0], USER_ID_COLUMN);
    }
}
