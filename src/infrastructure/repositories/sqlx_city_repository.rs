use crate::domain::{
    city::{
        entity::{FavoriteCity, NewFavoriteCity},
        repository::CityRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

const SELECT_COLUMNS: &str = "SELECT id, name, latitude, longitude, country, admin1 FROM favorite_cities";

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCityRepository with connection pool");
        Self { pool }
    }
}

fn storage_fault(action: &str, e: sqlx::Error) -> DomainError {
    error!("Failed to {}: {}", action, e);
    DomainError::StorageFault(format!("Failed to {}: {}", action, e))
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    /// Ordered by id, which is insertion order since ids come from a sequence.
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<FavoriteCity>, DomainError> {
        let rows = sqlx::query_as::<_, FavoriteCity>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_fault("list favorites", e))?;

        debug!("Retrieved {} favorites", rows.len());
        Ok(rows)
    }

    /// Inserts a favorite and returns it with the id assigned by the `SERIAL` sequence.
    /// Sequences never hand out a value twice, so ids of deleted rows are not reused.
    #[instrument(skip(self, city), fields(name = %city.name))]
    async fn add(&self, city: NewFavoriteCity) -> Result<FavoriteCity, DomainError> {
        let created = sqlx::query_as::<_, FavoriteCity>(
            r#"INSERT INTO favorite_cities (name, latitude, longitude, country, admin1)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, name, latitude, longitude, country, admin1"#,
        )
        .bind(&city.name)
        .bind(city.latitude)
        .bind(city.longitude)
        .bind(&city.country)
        .bind(&city.admin1)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_fault("create favorite", e))?;

        info!("Successfully created favorite {} ({})", created.id, created.name);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM favorite_cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_fault("delete favorite", e))?;

        if result.rows_affected() == 0 {
            debug!("No favorite found with id {} for deletion", id);
        } else {
            info!("Successfully deleted favorite {}", id);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<Option<FavoriteCity>, DomainError> {
        sqlx::query_as::<_, FavoriteCity>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_fault("fetch favorite", e))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| storage_fault("reach database", e))
    }
}
