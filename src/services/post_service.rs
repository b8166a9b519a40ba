use deadpool_postgres::Pool;
use log::info;
use uuid::Uuid;

use crate::config;
use crate::dtos::post_dtos::{GroupPageOut, PostOut};
use crate::dtos::profile_dtos::{PostDetailOut, ProfileOut, ProfilePageOut};
use crate::errors::ApiError;
use crate::forms::ValidatedPost;
use crate::models::Post;
use crate::pagination::{self, Page};
use crate::repositories::comment_repository::CommentRepository;
use crate::repositories::follow_repository::FollowRepository;
use crate::repositories::group_repository::GroupRepository;
use crate::repositories::post_repository::PostRepository;
use crate::repositories::user_repository::UserRepository;

/// Result of an edit attempt. A foreign edit is not an error: the handler
/// answers it with a redirect to the post's detail view.
pub enum EditOutcome {
    Updated(PostOut),
    NotOwner,
}

fn to_page(posts: Vec<Post>, number: i64, total: i64, per_page: i64) -> Page<PostOut> {
    Page::new(posts.into_iter().map(PostOut::from).collect(), number, total, per_page)
}

/// Newest-first posts across all authors and groups.
pub async fn list_all_posts(pool: &Pool, page: Option<i64>) -> Result<Page<PostOut>, ApiError> {
    let db = pool.get().await?;
    let per_page = config::page_size();
    let total = PostRepository::count_all(&db).await?;
    let number = pagination::clamp_page(page, total, per_page);
    let posts =
        PostRepository::page_all(&db, per_page, pagination::offset(number, per_page)).await?;
    Ok(to_page(posts, number, total, per_page))
}

pub async fn list_group_posts(
    pool: &Pool,
    slug: &str,
    page: Option<i64>,
) -> Result<GroupPageOut, ApiError> {
    let db = pool.get().await?;
    let group = GroupRepository::get_by_slug(&db, slug)
        .await?
        .ok_or(ApiError::NotFound("group"))?;
    let per_page = config::page_size();
    let total = PostRepository::count_by_group(&db, group.id).await?;
    let number = pagination::clamp_page(page, total, per_page);
    let posts = PostRepository::page_by_group(
        &db,
        group.id,
        per_page,
        pagination::offset(number, per_page),
    )
    .await?;
    Ok(GroupPageOut {
        group: group.into(),
        page: to_page(posts, number, total, per_page),
    })
}

async fn author_profile(
    db: &deadpool_postgres::Client,
    username: &str,
    author_id: Uuid,
    viewer: Option<Uuid>,
) -> Result<ProfileOut, ApiError> {
    let post_count = PostRepository::count_by_author(db, author_id).await?;
    let follower_count = FollowRepository::follower_count(db, author_id).await?;
    let following_count = FollowRepository::following_count(db, author_id).await?;
    let following = match viewer {
        Some(viewer_id) => FollowRepository::exists(db, viewer_id, author_id).await?,
        None => false,
    };
    Ok(ProfileOut {
        username: username.to_string(),
        post_count,
        follower_count,
        following_count,
        following,
    })
}

pub async fn list_author_posts(
    pool: &Pool,
    username: &str,
    viewer: Option<Uuid>,
    page: Option<i64>,
) -> Result<ProfilePageOut, ApiError> {
    let db = pool.get().await?;
    let user = UserRepository::get_by_username(&db, username)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    let profile = author_profile(&db, username, user.id, viewer).await?;
    let per_page = config::page_size();
    let number = pagination::clamp_page(page, profile.post_count, per_page);
    let posts = PostRepository::page_by_author(
        &db,
        user.id,
        per_page,
        pagination::offset(number, per_page),
    )
    .await?;
    let page = to_page(posts, number, profile.post_count, per_page);
    Ok(ProfilePageOut { profile, page })
}

/// Posts authored by anyone the viewer follows. Following no one is an
/// empty page, not an error.
pub async fn list_followed_posts(
    pool: &Pool,
    viewer: Uuid,
    page: Option<i64>,
) -> Result<Page<PostOut>, ApiError> {
    let db = pool.get().await?;
    let per_page = config::page_size();
    let total = PostRepository::count_feed(&db, viewer).await?;
    let number = pagination::clamp_page(page, total, per_page);
    let posts =
        PostRepository::page_feed(&db, viewer, per_page, pagination::offset(number, per_page))
            .await?;
    Ok(to_page(posts, number, total, per_page))
}

pub async fn get_post(
    pool: &Pool,
    username: &str,
    post_id: i64,
    viewer: Option<Uuid>,
) -> Result<PostDetailOut, ApiError> {
    let db = pool.get().await?;
    let post = PostRepository::get_by_author_and_id(&db, username, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    let profile = author_profile(&db, username, post.author_id, viewer).await?;
    let comments = CommentRepository::list_for_post(&db, post.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(PostDetailOut {
        post: post.into(),
        profile,
        comments,
    })
}

/// Persists a new post for the caller; `pub_date` is assigned by storage.
pub async fn create_post(
    pool: &Pool,
    author: Uuid,
    data: ValidatedPost,
) -> Result<PostOut, ApiError> {
    let db = pool.get().await?;
    let group_id = data.group.as_ref().map(|g| g.id);
    let post_id =
        PostRepository::insert(&db, author, &data.text, group_id, data.image.as_deref()).await?;
    let post = PostRepository::get_by_id(&db, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    info!("user {} created post {} ({})", author, post_id, post.summary());
    Ok(post.into())
}

/// Updates text/group/image in place and re-asserts the author. The
/// publication date is never altered. A non-author gets `NotOwner`.
pub async fn edit_post(
    pool: &Pool,
    requesting_user: Uuid,
    username: &str,
    post_id: i64,
    data: ValidatedPost,
) -> Result<EditOutcome, ApiError> {
    let db = pool.get().await?;
    let post = PostRepository::get_by_author_and_id(&db, username, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    if post.author_id != requesting_user {
        return Ok(EditOutcome::NotOwner);
    }
    let group_id = data.group.as_ref().map(|g| g.id);
    PostRepository::update(
        &db,
        post.id,
        requesting_user,
        &data.text,
        group_id,
        data.image.as_deref(),
    )
    .await?;
    let updated = PostRepository::get_by_id(&db, post.id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    info!("user {} edited post {}", requesting_user, post_id);
    Ok(EditOutcome::Updated(updated.into()))
}
