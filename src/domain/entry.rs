use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single changelog entry as written to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub tags: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ChangelogEntry {
    /// Create an entry stamped with the current time
    pub fn new(tags: Vec<String>, description: impl Into<String>) -> Self {
        ChangelogEntry {
            tags,
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
