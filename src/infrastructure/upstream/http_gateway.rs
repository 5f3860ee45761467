use super::translation::extract_translation;
use crate::{
    config::Config,
    domain::{shared::errors::DomainError, weather::gateway::UpstreamGateway},
};
use async_trait::async_trait;
use reqwest::{Client, Url, header::USER_AGENT};
use serde_json::Value;
use tracing::{debug, instrument, warn};

pub const GEOCODING_RESULT_LIMIT: u32 = 10;
const CLIENT_USER_AGENT: &str = concat!("cityweather/", env!("CARGO_PKG_VERSION"));

/// `UpstreamGateway` over plain HTTP: Google's public translate endpoint and the
/// Open-Meteo geocoding and forecast APIs. No retries and no caching; every call
/// is independent.
pub struct HttpUpstreamGateway {
    client: Client,
    translate_url: Url,
    geocoding_url: Url,
    forecast_url: Url,
}

impl HttpUpstreamGateway {
    /// # Errors
    ///
    /// Returns an error if an endpoint URL is malformed or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            client,
            translate_url: parse_endpoint("TRANSLATE_API_URL", &config.translate_api_url)?,
            geocoding_url: parse_endpoint("GEOCODING_API_URL", &config.geocoding_api_url)?,
            forecast_url: parse_endpoint("FORECAST_API_URL", &config.forecast_api_url)?,
        })
    }

    async fn fetch_json(
        &self,
        service: &'static str,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|e| unavailable(service, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", service, status);
            return Err(DomainError::UpstreamRejected {
                service,
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            warn!("{} returned an unreadable body: {}", service, e);
            DomainError::UpstreamRejected {
                service,
                status: status.as_u16(),
            }
        })
    }
}

fn parse_endpoint(name: &str, raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e))
}

fn unavailable(service: &'static str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        warn!("{} timed out: {}", service, e);
        DomainError::UpstreamUnavailable(format!("{} timed out", service))
    } else {
        warn!("{} request failed: {}", service, e);
        DomainError::UpstreamUnavailable(format!("{} unreachable", service))
    }
}

fn coordinate_query(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
    ]
}

#[async_trait]
impl UpstreamGateway for HttpUpstreamGateway {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn translate(&self, text: &str) -> Result<String, DomainError> {
        let query = [
            ("client", "gtx".to_string()),
            ("sl", "auto".to_string()),
            ("tl", "en".to_string()),
            ("dt", "t".to_string()),
            ("q", text.to_string()),
        ];

        let payload = self
            .fetch_json("translate", self.translate_url.clone(), &query)
            .await
            .map_err(|e| DomainError::TranslationFailed(e.to_string()))?;

        let translated = extract_translation(&payload)?;
        debug!("translated '{}' -> '{}'", text, translated);
        Ok(translated)
    }

    #[instrument(skip(self))]
    async fn geocode(&self, name: &str, language: Option<&str>) -> Result<Value, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidArgument("Query is required.".into()));
        }

        let mut query = vec![
            ("name", name.to_string()),
            ("count", GEOCODING_RESULT_LIMIT.to_string()),
            ("format", "json".to_string()),
        ];
        if let Some(lang) = language.map(str::trim).filter(|l| !l.is_empty()) {
            query.push(("language", lang.to_string()));
        }

        self.fetch_json("geocoding", self.geocoding_url.clone(), &query)
            .await
    }

    #[instrument(skip(self))]
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<Value, DomainError> {
        let mut query = coordinate_query(latitude, longitude);
        query.push(("current_weather", "true".to_string()));

        self.fetch_json("weather", self.forecast_url.clone(), &query)
            .await
    }

    #[instrument(skip(self))]
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Value, DomainError> {
        let mut query = coordinate_query(latitude, longitude);
        query.push((
            "daily",
            "temperature_2m_max,temperature_2m_min,weathercode".to_string(),
        ));
        query.push(("timezone", "auto".to_string()));

        self.fetch_json("forecast", self.forecast_url.clone(), &query)
            .await
    }
}
