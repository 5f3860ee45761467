use super::{
    handlers::{cities, favorites, health, weather},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::services::{ServeDir, ServeFile};

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Search and upstream pass-through
        .route("/api/cities", get(cities::search_cities))
        .route("/api/weather", get(weather::current_weather))
        .route("/api/forecast", get(weather::forecast))
        // Favorites
        .route(
            "/api/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/api/favorites/{id}",
            get(favorites::get_favorite).delete(favorites::remove_favorite),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state);

    match static_dir {
        Some(dir) => {
            let index = format!("{}/index.html", dir.trim_end_matches('/'));
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    }
}
