use tokio_postgres::Client;
use uuid::Uuid;

use crate::models::Follow;

pub struct FollowRepository;

impl FollowRepository {
    /// Idempotent create; returns the edge if a new one was inserted. The
    /// unique (follower, author) pair makes concurrent calls collapse into
    /// one row.
    pub async fn insert_if_absent(
        db: &Client,
        follower_id: Uuid,
        author_id: Uuid,
    ) -> Result<Option<Follow>, tokio_postgres::Error> {
        let inserted = db
            .query_opt(
                "INSERT INTO follows (follower_id, author_id) VALUES ($1, $2)
                 ON CONFLICT (follower_id, author_id) DO NOTHING
                 RETURNING id, follower_id, author_id, created_at",
                &[&follower_id, &author_id],
            )
            .await?;
        Ok(inserted.as_ref().map(Follow::from_row))
    }

    /// Tolerant delete; returns true if an edge was removed.
    pub async fn delete(
        db: &Client,
        follower_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, tokio_postgres::Error> {
        let affected = db
            .execute(
                "DELETE FROM follows WHERE follower_id = $1 AND author_id = $2",
                &[&follower_id, &author_id],
            )
            .await?;
        Ok(affected > 0)
    }

    pub async fn exists(
        db: &Client,
        follower_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, tokio_postgres::Error> {
        let row = db
            .query_one(
                "SELECT EXISTS (
                     SELECT 1 FROM follows WHERE follower_id = $1 AND author_id = $2
                 )",
                &[&follower_id, &author_id],
            )
            .await?;
        Ok(row.get(0))
    }

    /// How many users follow this author.
    pub async fn follower_count(
        db: &Client,
        author_id: Uuid,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one("SELECT count(*) FROM follows WHERE author_id = $1", &[&author_id])
            .await?;
        Ok(row.get(0))
    }

    /// How many authors this user follows.
    pub async fn following_count(
        db: &Client,
        user_id: Uuid,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one("SELECT count(*) FROM follows WHERE follower_id = $1", &[&user_id])
            .await?;
        Ok(row.get(0))
    }
}
