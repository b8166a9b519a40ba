use deadpool_postgres::Pool;
use log::info;

use crate::errors::ApiError;

/// Apply the schema on startup. Every statement is IF NOT EXISTS, so this is
/// safe to run against an already-provisioned database.
pub async fn init_schema(pool: &Pool) -> Result<(), ApiError> {
    let client = pool.get().await?;
    client
        .batch_execute(include_str!("../migrations/schema.sql"))
        .await?;
    info!("database schema ready");
    Ok(())
}

/// One-row round trip, used by the health check.
pub async fn ping(pool: &Pool) -> Result<(), ApiError> {
    let client = pool.get().await?;
    client.query_one("SELECT 1", &[]).await?;
    Ok(())
}
