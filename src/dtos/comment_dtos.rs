use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Comment;

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentOut {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Uuid,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentOut {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            author: comment.author_username,
            text: comment.text,
            created: comment.created,
        }
    }
}
