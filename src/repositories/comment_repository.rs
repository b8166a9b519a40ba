use tokio_postgres::Client;
use uuid::Uuid;

use crate::models::Comment;

const SELECT_COMMENT: &str = "
    SELECT c.id, c.post_id, c.author_id, u.username AS author_username,
           c.text, c.created
    FROM comments c
    JOIN users u ON u.id = c.author_id";

pub struct CommentRepository;

impl CommentRepository {
    pub async fn list_for_post(
        db: &Client,
        post_id: i64,
    ) -> Result<Vec<Comment>, tokio_postgres::Error> {
        let query = format!("{SELECT_COMMENT} WHERE c.post_id = $1 ORDER BY c.created DESC, c.id DESC");
        let rows = db.query(&query, &[&post_id]).await?;
        Ok(rows.iter().map(Comment::from_row).collect())
    }

    pub async fn get_by_id(
        db: &Client,
        comment_id: i64,
    ) -> Result<Option<Comment>, tokio_postgres::Error> {
        let query = format!("{SELECT_COMMENT} WHERE c.id = $1");
        let row = db.query_opt(&query, &[&comment_id]).await?;
        Ok(row.as_ref().map(Comment::from_row))
    }

    pub async fn insert(
        db: &Client,
        post_id: i64,
        author_id: Uuid,
        text: &str,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = db
            .query_one(
                "INSERT INTO comments (post_id, author_id, text)
                 VALUES ($1, $2, $3) RETURNING id",
                &[&post_id, &author_id, &text],
            )
            .await?;
        Ok(row.get(0))
    }
}
