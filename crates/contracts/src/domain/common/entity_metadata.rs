use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every aggregate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic-locking version, bumped by the backend on every write.
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
