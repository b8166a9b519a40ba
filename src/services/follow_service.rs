use deadpool_postgres::Pool;
use log::{debug, info};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::repositories::follow_repository::FollowRepository;
use crate::repositories::user_repository::UserRepository;

/// Start following the author. Following yourself is silently ignored, and
/// following someone twice leaves a single edge.
pub async fn follow(pool: &Pool, follower: Uuid, author_username: &str) -> Result<(), ApiError> {
    let db = pool.get().await?;
    let author = UserRepository::get_by_username(&db, author_username)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    if author.id == follower {
        debug!("user {} tried to follow themselves", follower);
        return Ok(());
    }
    if let Some(edge) = FollowRepository::insert_if_absent(&db, follower, author.id).await? {
        info!("user {} now follows {} (edge {})", follower, author_username, edge.id);
    }
    Ok(())
}

/// Stop following the author. Removing an edge that never existed is a
/// no-op, not an error.
pub async fn unfollow(pool: &Pool, follower: Uuid, author_username: &str) -> Result<(), ApiError> {
    let db = pool.get().await?;
    let author = UserRepository::get_by_username(&db, author_username)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    if FollowRepository::delete(&db, follower, author.id).await? {
        info!("user {} unfollowed {}", follower, author_username);
    }
    Ok(())
}
