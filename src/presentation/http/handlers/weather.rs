use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

pub async fn current_weather(
    State(state): State<AppState>,
    Query(q): Query<CoordinatesQuery>,
) -> Result<Json<Value>, AppError> {
    let payload = state.gateway.current_weather(q.lat, q.lon).await?;
    Ok(Json(payload))
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(q): Query<CoordinatesQuery>,
) -> Result<Json<Value>, AppError> {
    let payload = state.gateway.forecast(q.lat, q.lon).await?;
    Ok(Json(payload))
}
