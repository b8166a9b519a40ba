use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use uuid::Uuid;

/// A directed "follower watches author" edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: i64,
    pub follower_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            follower_id: row.get("follower_id"),
            author_id: row.get("author_id"),
            created_at: row.get("created_at"),
        }
    }
}
