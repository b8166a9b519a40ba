use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Group, Post};
use crate::pagination::Page;

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupRefOut {
    pub id: i64,
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostOut {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub author: String,
    pub group: Option<GroupRefOut>,
    pub image: Option<String>,
}

impl From<Post> for PostOut {
    fn from(post: Post) -> Self {
        let group = match (post.group_id, post.group_slug, post.group_title) {
            (Some(id), Some(slug), Some(title)) => Some(GroupRefOut { id, slug, title }),
            _ => None,
        };
        Self {
            id: post.id,
            text: post.text,
            pub_date: post.pub_date,
            author_id: post.author_id,
            author: post.author_username,
            group,
            image: post.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupOut {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupOut {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
        }
    }
}

/// Group listing: the group header plus one page of its posts.
#[derive(Debug, Serialize)]
pub struct GroupPageOut {
    pub group: GroupOut,
    pub page: Page<PostOut>,
}
