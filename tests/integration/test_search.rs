use super::helpers::{
    TestGateway, expect_status, get, post_json, read_json, send, spawn_app, spawn_app_with,
};
use axum::http::StatusCode;
use cityweather::domain::city::entity::{CityCandidate, NewFavoriteCity};
use serde_json::Value;

#[tokio::test]
async fn misspelled_query_is_geocoded_with_its_translation() {
    let app = spawn_app_with(TestGateway::with_translation("Pariz", "Paris"));

    let res = expect_status(
        send(&app.app, get("/api/cities?query=Pariz&language=hr")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["results"][0]["name"], "Paris");
    assert_eq!(app.gateway.calls(), vec!["translate:Pariz", "geocode:Paris:hr"]);
}

#[tokio::test]
async fn unreachable_translation_still_returns_results() {
    let app = spawn_app_with(TestGateway::default());

    let res = expect_status(
        send(&app.app, get("/api/cities?query=Pariz")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["results"][0]["name"], "Pariz");
    assert_eq!(app.gateway.calls(), vec!["translate:Pariz", "geocode:Pariz:-"]);
}

#[tokio::test]
async fn zero_results_is_not_an_error() {
    let app = spawn_app();
    let res = expect_status(
        send(&app.app, get("/api/cities?query=Nowhere")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert!(CityCandidate::list_from_payload(&body).is_empty());
}

#[tokio::test]
async fn missing_or_blank_query_is_rejected_before_upstream_calls() {
    let app = spawn_app();

    for uri in ["/api/cities", "/api/cities?query=", "/api/cities?query=%20%20"] {
        let res = expect_status(send(&app.app, get(uri)).await, StatusCode::BAD_REQUEST).await;
        let body: Value = read_json(res).await;
        assert_eq!(body["error"], "Query is required.");
    }

    assert!(app.gateway.calls().is_empty());
}

#[tokio::test]
async fn geocoding_outage_is_surfaced() {
    let app = spawn_app_with(TestGateway {
        geocoding_down: true,
        ..TestGateway::with_translation("Lyon", "Lyon")
    });

    expect_status(
        send(&app.app, get("/api/cities?query=Lyon")).await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
}

#[tokio::test]
async fn selected_candidate_can_be_saved_as_favorite() {
    let app = spawn_app_with(TestGateway::with_translation("Pariz", "Paris"));

    let body: Value = read_json(send(&app.app, get("/api/cities?query=Pariz")).await).await;
    let candidate = CityCandidate::list_from_payload(&body)
        .into_iter()
        .next()
        .expect("one candidate");

    let favorite = NewFavoriteCity::from(candidate);
    let res = expect_status(
        send(
            &app.app,
            post_json("/api/favorites", serde_json::to_value(&favorite).expect("json")),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let created: Value = read_json(res).await;
    assert_eq!(created["admin1"], "Île-de-France");
}
