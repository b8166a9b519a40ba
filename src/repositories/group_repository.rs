use tokio_postgres::Client;

use crate::models::Group;

pub struct GroupRepository;

impl GroupRepository {
    pub async fn get_by_slug(
        db: &Client,
        slug: &str,
    ) -> Result<Option<Group>, tokio_postgres::Error> {
        let row = db
            .query_opt(
                "SELECT id, title, slug, description FROM groups WHERE slug = $1",
                &[&slug],
            )
            .await?;
        Ok(row.as_ref().map(Group::from_row))
    }

    pub async fn get_by_id(
        db: &Client,
        id: i64,
    ) -> Result<Option<Group>, tokio_postgres::Error> {
        let row = db
            .query_opt(
                "SELECT id, title, slug, description FROM groups WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(row.as_ref().map(Group::from_row))
    }

    /// Choices for the post form's group field.
    pub async fn list(db: &Client) -> Result<Vec<Group>, tokio_postgres::Error> {
        let rows = db
            .query(
                "SELECT id, title, slug, description FROM groups ORDER BY title",
                &[],
            )
            .await?;
        Ok(rows.iter().map(Group::from_row).collect())
    }

    /// Groups are curated outside the request path; this is the seam the
    /// curation tooling and the test fixtures share.
    pub async fn create(
        db: &Client,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Group, tokio_postgres::Error> {
        let row = db
            .query_one(
                "INSERT INTO groups (title, slug, description) VALUES ($1, $2, $3)
                 RETURNING id, title, slug, description",
                &[&title, &slug, &description],
            )
            .await?;
        Ok(Group::from_row(&row))
    }
}
