use crate::{
    application::favorites::dto::{FavoriteDetails, FavoriteWithWeather},
    domain::city::entity::{FavoriteCity, NewFavoriteCity},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

/// Every stored favorite with its current weather; `weather` is `null` where the
/// lookup failed.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteWithWeather>>, AppError> {
    Ok(Json(state.favorites().list_with_weather().await?))
}

pub async fn get_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FavoriteDetails>, AppError> {
    Ok(Json(state.favorites().details(id).await?))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Json(body): Json<NewFavoriteCity>,
) -> Result<impl IntoResponse, AppError> {
    let created: FavoriteCity = state.favorites().add(body).await?;
    let location = format!("/api/favorites/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Always 204, whether or not the id existed.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.favorites().remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
