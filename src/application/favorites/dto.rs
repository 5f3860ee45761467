use crate::domain::{
    city::entity::FavoriteCity,
    weather::entity::{ForecastSeries, WeatherSnapshot},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A stored favorite with its current weather, `null` when the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FavoriteWithWeather {
    #[serde(flatten)]
    pub city: FavoriteCity,
    pub weather: Option<WeatherSnapshot>,
}

/// Expanded view of a single favorite: current weather plus the first days of the
/// daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FavoriteDetails {
    #[serde(flatten)]
    pub city: FavoriteCity,
    pub weather: Option<WeatherSnapshot>,
    pub forecast: Option<ForecastSeries>,
}
