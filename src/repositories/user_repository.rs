use tokio_postgres::Client;
use uuid::Uuid;

use crate::models::User;

pub struct UserRepository;

impl UserRepository {
    pub async fn get_by_username(
        db: &Client,
        username: &str,
    ) -> Result<Option<User>, tokio_postgres::Error> {
        let row = db
            .query_opt(
                "SELECT id, username, created_at FROM users WHERE username = $1",
                &[&username],
            )
            .await?;
        Ok(row.as_ref().map(User::from_row))
    }

    /// Provisioning seam for the external identity subsystem; also what the
    /// test fixtures use.
    pub async fn create(
        db: &Client,
        id: Uuid,
        username: &str,
    ) -> Result<User, tokio_postgres::Error> {
        let row = db
            .query_one(
                "INSERT INTO users (id, username) VALUES ($1, $2)
                 RETURNING id, username, created_at",
                &[&id, &username],
            )
            .await?;
        Ok(User::from_row(&row))
    }
}
