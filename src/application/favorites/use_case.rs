use super::dto::{FavoriteDetails, FavoriteWithWeather};
use crate::domain::{
    city::{
        entity::{FavoriteCity, NewFavoriteCity},
        repository::CityRepository,
    },
    shared::errors::DomainError,
    weather::{
        entity::{ForecastSeries, WeatherSnapshot},
        gateway::UpstreamGateway,
    },
};
use futures_util::future::join_all;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info, instrument, warn};

pub const FORECAST_DISPLAY_DAYS: usize = 5;

/// Favorites CRUD plus the sidebar view that merges current weather into every
/// stored record.
///
/// Weather lookups run concurrently, one per record, each bounded by
/// `weather_timeout`. A failed or timed-out lookup leaves `weather` empty on that
/// record only; the list itself never fails because of weather.
pub struct FavoritesUseCase {
    repository: Arc<dyn CityRepository>,
    gateway: Arc<dyn UpstreamGateway>,
    weather_timeout: Duration,
}

impl FavoritesUseCase {
    pub fn new(
        repository: Arc<dyn CityRepository>,
        gateway: Arc<dyn UpstreamGateway>,
        weather_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            gateway,
            weather_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_with_weather(&self) -> Result<Vec<FavoriteWithWeather>, DomainError> {
        let cities = self.repository.list().await?;
        let lookups = join_all(cities.iter().map(|city| self.weather_for(city))).await;

        let merged: Vec<FavoriteWithWeather> = cities
            .into_iter()
            .zip(lookups)
            .map(|(city, weather)| FavoriteWithWeather { city, weather })
            .collect();

        let missing = merged.iter().filter(|f| f.weather.is_none()).count();
        debug!(
            "aggregated {} favorites, {} without weather",
            merged.len(),
            missing
        );
        Ok(merged)
    }

    #[instrument(skip(self))]
    pub async fn details(&self, id: i32) -> Result<FavoriteDetails, DomainError> {
        let city = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("favorite {}", id)))?;

        let (weather, forecast) =
            tokio::join!(self.weather_for(&city), self.forecast_for(&city));

        Ok(FavoriteDetails {
            city,
            weather,
            forecast,
        })
    }

    #[instrument(skip(self, city), fields(name = %city.name))]
    pub async fn add(&self, city: NewFavoriteCity) -> Result<FavoriteCity, DomainError> {
        let created = self.repository.add(city).await?;
        info!("added favorite {} ({})", created.id, created.name);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> Result<(), DomainError> {
        self.repository.remove(id).await
    }

    async fn weather_for(&self, city: &FavoriteCity) -> Option<WeatherSnapshot> {
        let lookup = self.gateway.current_weather(city.latitude, city.longitude);
        match tokio::time::timeout(self.weather_timeout, lookup).await {
            Ok(Ok(payload)) => {
                let snapshot = WeatherSnapshot::from_payload(&payload);
                if snapshot.is_none() {
                    warn!("weather payload for favorite {} had no current_weather", city.id);
                }
                snapshot
            }
            Ok(Err(e)) => {
                warn!("weather lookup failed for favorite {}: {}", city.id, e);
                None
            }
            Err(_) => {
                warn!(
                    "weather lookup for favorite {} timed out after {:?}",
                    city.id, self.weather_timeout
                );
                None
            }
        }
    }

    async fn forecast_for(&self, city: &FavoriteCity) -> Option<ForecastSeries> {
        let lookup = self.gateway.forecast(city.latitude, city.longitude);
        match tokio::time::timeout(self.weather_timeout, lookup).await {
            Ok(Ok(payload)) => {
                ForecastSeries::from_payload(&payload).map(|s| s.first_days(FORECAST_DISPLAY_DAYS))
            }
            Ok(Err(e)) => {
                warn!("forecast lookup failed for favorite {}: {}", city.id, e);
                None
            }
            Err(_) => {
                warn!("forecast lookup for favorite {} timed out", city.id);
                None
            }
        }
    }
}
