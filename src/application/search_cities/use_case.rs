use super::dto::{SearchCitiesRequest, SearchCitiesResponse};
use crate::domain::{shared::errors::DomainError, weather::gateway::UpstreamGateway};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Free-text city search: translate to English when possible, then geocode.
///
/// Translation only improves recall for non-English place names, so any failure in
/// that step falls back to the original query. Geocoding failures propagate.
pub struct SearchCitiesUseCase {
    gateway: Arc<dyn UpstreamGateway>,
}

impl SearchCitiesUseCase {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self, request), fields(query_len = request.query.len()))]
    pub async fn execute(
        &self,
        request: SearchCitiesRequest,
    ) -> Result<SearchCitiesResponse, DomainError> {
        let request = request.validated()?;

        let searched_name = match self.gateway.translate(&request.query).await {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => request.query.clone(),
            Err(e) => {
                warn!("translation skipped, searching original query: {}", e);
                request.query.clone()
            }
        };
        debug!("geocoding '{}' (from '{}')", searched_name, request.query);

        let payload = self
            .gateway
            .geocode(&searched_name, request.language.as_deref())
            .await?;

        Ok(SearchCitiesResponse {
            searched_name,
            payload,
        })
    }
}
