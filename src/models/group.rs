use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A named topic bucket for posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl Group {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            title: row.get("title"),
            slug: row.get("slug"),
            description: row.get("description"),
        }
    }

    /// Display form of a group is its title.
    pub fn summary(&self) -> String {
        self.title.clone()
    }
}
