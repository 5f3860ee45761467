use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use serde_json::Value;

/// The three upstream services, one method per capability. Payloads are returned
/// as received so HTTP handlers can pass them through verbatim.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// Translates `text` to English with the source language auto-detected.
    async fn translate(&self, text: &str) -> Result<String, DomainError>;

    /// Geocoding search capped at 10 results.
    async fn geocode(&self, name: &str, language: Option<&str>) -> Result<Value, DomainError>;

    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<Value, DomainError>;

    /// Daily max/min temperature and weather code, timezone detected by the upstream.
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Value, DomainError>;
}
