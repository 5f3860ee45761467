use super::entity::{FavoriteCity, NewFavoriteCity};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait CityRepository: Send + Sync {
    /// All favorites, oldest first.
    async fn list(&self) -> Result<Vec<FavoriteCity>, DomainError>;
    async fn add(&self, city: NewFavoriteCity) -> Result<FavoriteCity, DomainError>;
    /// Idempotent: removing an unknown id succeeds.
    async fn remove(&self, id: i32) -> Result<(), DomainError>;
    async fn get(&self, id: i32) -> Result<Option<FavoriteCity>, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
