use serde::Serialize;

use crate::dtos::comment_dtos::CommentOut;
use crate::dtos::post_dtos::PostOut;
use crate::pagination::Page;

/// Per-author aggregates, computed at read time.
#[derive(Debug, Serialize)]
pub struct ProfileOut {
    pub username: String,
    pub post_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
    /// Whether the requesting viewer already follows this author. Always
    /// false for anonymous viewers.
    pub following: bool,
}

/// Author profile listing: aggregates plus one page of the author's posts.
#[derive(Debug, Serialize)]
pub struct ProfilePageOut {
    pub profile: ProfileOut,
    pub page: Page<PostOut>,
}

/// Post detail: the post, its author's aggregates, and all comments
/// newest-first.
#[derive(Debug, Serialize)]
pub struct PostDetailOut {
    pub post: PostOut,
    pub profile: ProfileOut,
    pub comments: Vec<CommentOut>,
}
