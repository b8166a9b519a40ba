use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use uuid::Uuid;

use super::summarize;

/// A comment on a post. Cascades away with its post or its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            post_id: row.get("post_id"),
            author_id: row.get("author_id"),
            author_username: row.get("author_username"),
            text: row.get("text"),
            created: row.get("created"),
        }
    }

    pub fn summary(&self) -> String {
        summarize(&self.text)
    }
}
