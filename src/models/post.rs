use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use uuid::Uuid;

use super::summarize;

/// A `posts` row joined with its author's username and, when grouped, the
/// group's slug and title. `pub_date` is assigned by the database at insert
/// and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_username: String,
    pub group_id: Option<i64>,
    pub group_slug: Option<String>,
    pub group_title: Option<String>,
    pub image: Option<String>,
}

impl Post {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            text: row.get("text"),
            pub_date: row.get("pub_date"),
            author_id: row.get("author_id"),
            author_username: row.get("author_username"),
            group_id: row.get("group_id"),
            group_slug: row.get("group_slug"),
            group_title: row.get("group_title"),
            image: row.get("image"),
        }
    }

    pub fn summary(&self) -> String {
        summarize(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_text(text: &str) -> Post {
        Post {
            id: 1,
            text: text.to_string(),
            pub_date: Utc::now(),
            author_id: Uuid::new_v4(),
            author_username: "tester".to_string(),
            group_id: None,
            group_slug: None,
            group_title: None,
            image: None,
        }
    }

    #[test]
    fn summary_is_first_fifteen_chars() {
        let post = post_with_text("a body comfortably longer than fifteen characters");
        assert_eq!(post.summary(), "a body comforta");
        assert_eq!(post.summary().chars().count(), 15);
    }

    #[test]
    fn short_text_summarizes_whole() {
        assert_eq!(post_with_text("short").summary(), "short");
    }

    #[test]
    fn summary_respects_char_boundaries() {
        let post = post_with_text("тестовый текст для проверки");
        assert_eq!(post.summary(), "тестовый текст ");
    }
}
