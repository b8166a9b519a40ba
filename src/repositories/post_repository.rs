use tokio_postgres::Client;
use uuid::Uuid;

use crate::models::Post;

/// Shared join: every post row leaves the repository with its author's
/// username and its group's slug/title attached.
const SELECT_POST: &str = "
    SELECT p.id, p.text, p.pub_date, p.author_id, u.username AS author_username,
           p.group_id, g.slug AS group_slug, g.title AS group_title, p.image
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN groups g ON g.id = p.group_id";

/// Newest first; id breaks ties between posts sharing a timestamp so pages
/// never overlap.
const ORDER_NEWEST: &str = " ORDER BY p.pub_date DESC, p.id DESC";

pub struct PostRepository;

impl PostRepository {
    pub async fn count_all(db: &Client) -> Result<i64, tokio_postgres::Error> {
        let row = db.query_one("SELECT count(*) FROM posts", &[]).await?;
        Ok(row.get(0))
    }

    pub async fn page_all(
        db: &Client,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, tokio_postgres::Error> {
        let query = format!("{SELECT_POST}{ORDER_NEWEST} LIMIT $1 OFFSET $2");
        let rows = db.query(&query, &[&limit, &offset]).await?;
        Ok(rows.iter().map(Post::from_row).collect())
    }

    pub async fn count_by_group(
        db: &Client,
        group_id: i64,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one("SELECT count(*) FROM posts WHERE group_id = $1", &[&group_id])
            .await?;
        Ok(row.get(0))
    }

    pub async fn page_by_group(
        db: &Client,
        group_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, tokio_postgres::Error> {
        let query = format!("{SELECT_POST} WHERE p.group_id = $1{ORDER_NEWEST} LIMIT $2 OFFSET $3");
        let rows = db.query(&query, &[&group_id, &limit, &offset]).await?;
        Ok(rows.iter().map(Post::from_row).collect())
    }

    pub async fn count_by_author(
        db: &Client,
        author_id: Uuid,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one("SELECT count(*) FROM posts WHERE author_id = $1", &[&author_id])
            .await?;
        Ok(row.get(0))
    }

    pub async fn page_by_author(
        db: &Client,
        author_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, tokio_postgres::Error> {
        let query =
            format!("{SELECT_POST} WHERE p.author_id = $1{ORDER_NEWEST} LIMIT $2 OFFSET $3");
        let rows = db.query(&query, &[&author_id, &limit, &offset]).await?;
        Ok(rows.iter().map(Post::from_row).collect())
    }

    /// Posts authored by anyone the viewer follows.
    pub async fn count_feed(db: &Client, viewer: Uuid) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one(
                "SELECT count(*) FROM posts p
                 JOIN follows f ON f.author_id = p.author_id
                 WHERE f.follower_id = $1",
                &[&viewer],
            )
            .await?;
        Ok(row.get(0))
    }

    pub async fn page_feed(
        db: &Client,
        viewer: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, tokio_postgres::Error> {
        let query = format!(
            "{SELECT_POST}
             JOIN follows f ON f.author_id = p.author_id
             WHERE f.follower_id = $1{ORDER_NEWEST} LIMIT $2 OFFSET $3"
        );
        let rows = db.query(&query, &[&viewer, &limit, &offset]).await?;
        Ok(rows.iter().map(Post::from_row).collect())
    }

    pub async fn get_by_id(
        db: &Client,
        post_id: i64,
    ) -> Result<Option<Post>, tokio_postgres::Error> {
        let query = format!("{SELECT_POST} WHERE p.id = $1");
        let row = db.query_opt(&query, &[&post_id]).await?;
        Ok(row.as_ref().map(Post::from_row))
    }

    /// Detail lookup: the id must belong to that author's post.
    pub async fn get_by_author_and_id(
        db: &Client,
        username: &str,
        post_id: i64,
    ) -> Result<Option<Post>, tokio_postgres::Error> {
        let query = format!("{SELECT_POST} WHERE p.id = $1 AND u.username = $2");
        let row = db.query_opt(&query, &[&post_id, &username]).await?;
        Ok(row.as_ref().map(Post::from_row))
    }

    /// `pub_date` comes from the database default and is never written again.
    pub async fn insert(
        db: &Client,
        author_id: Uuid,
        text: &str,
        group_id: Option<i64>,
        image: Option<&str>,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one(
                "INSERT INTO posts (text, author_id, group_id, image)
                 VALUES ($1, $2, $3, $4) RETURNING id",
                &[&text, &author_id, &group_id, &image],
            )
            .await?;
        Ok(row.get(0))
    }

    /// Rewrites the editable fields and re-asserts the author; `pub_date`
    /// stays untouched.
    pub async fn update(
        db: &Client,
        post_id: i64,
        author_id: Uuid,
        text: &str,
        group_id: Option<i64>,
        image: Option<&str>,
    ) -> Result<u64, tokio_postgres::Error> {
        db.execute(
            "UPDATE posts SET text = $2, group_id = $3, image = $4, author_id = $5
             WHERE id = $1",
            &[&post_id, &text, &group_id, &image, &author_id],
        )
        .await
    }
}
