use crate::{
    application::search_cities::dto::SearchCitiesRequest,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CitySearchQuery {
    pub query: Option<String>,
    pub language: Option<String>,
}

/// Geocoding results for a free-text query, passed through as the upstream sent them.
pub async fn search_cities(
    State(state): State<AppState>,
    Query(params): Query<CitySearchQuery>,
) -> Result<Json<Value>, AppError> {
    let request = SearchCitiesRequest::new(params.query.unwrap_or_default(), params.language);
    let response = state.search().execute(request).await?;
    Ok(Json(response.payload))
}
