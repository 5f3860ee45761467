use crate::{
    application::{favorites::use_case::FavoritesUseCase, search_cities::use_case::SearchCitiesUseCase},
    config::Config,
    domain::{city::repository::CityRepository, weather::gateway::UpstreamGateway},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub city_repo: Arc<dyn CityRepository>,
    pub gateway: Arc<dyn UpstreamGateway>,
}

impl AppState {
    pub fn favorites(&self) -> FavoritesUseCase {
        FavoritesUseCase::new(
            self.city_repo.clone(),
            self.gateway.clone(),
            self.config.favorite_weather_timeout(),
        )
    }

    pub fn search(&self) -> SearchCitiesUseCase {
        SearchCitiesUseCase::new(self.gateway.clone())
    }
}
