use crate::config::DatabaseSettings;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub async fn create_pool(database: &DatabaseSettings, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(database.connect_options())
        .await?;
    Ok(pool)
}
