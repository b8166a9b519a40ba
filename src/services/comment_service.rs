use deadpool_postgres::Pool;
use log::info;
use uuid::Uuid;

use crate::dtos::comment_dtos::CommentOut;
use crate::errors::ApiError;
use crate::forms::ValidatedComment;
use crate::repositories::comment_repository::CommentRepository;
use crate::repositories::post_repository::PostRepository;

/// Attaches a comment to the post; `created` is assigned by storage.
pub async fn add_comment(
    pool: &Pool,
    author: Uuid,
    username: &str,
    post_id: i64,
    data: ValidatedComment,
) -> Result<CommentOut, ApiError> {
    let db = pool.get().await?;
    let post = PostRepository::get_by_author_and_id(&db, username, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    let comment_id = CommentRepository::insert(&db, post.id, author, &data.text).await?;
    let comment = CommentRepository::get_by_id(&db, comment_id)
        .await?
        .ok_or(ApiError::NotFound("comment"))?;
    info!("user {} commented on post {} ({})", author, post.id, comment.summary());
    Ok(comment.into())
}
