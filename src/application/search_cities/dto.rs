use crate::domain::{city::entity::CityCandidate, shared::errors::DomainError};
use serde_json::Value;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Validate)]
pub struct SearchCitiesRequest {
    #[validate(custom(function = "not_blank"))]
    pub query: String,
    pub language: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Query is required.".into()));
    }
    Ok(())
}

impl SearchCitiesRequest {
    pub fn new(query: impl Into<String>, language: Option<String>) -> Self {
        Self {
            query: query.into(),
            language,
        }
    }

    /// Rejects blank queries. A blank language hint is dropped rather than rejected.
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()
            .map_err(|_| DomainError::InvalidArgument("Query is required.".to_string()))?;

        Ok(Self {
            query: self.query.trim().to_string(),
            language: self
                .language
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        })
    }
}

/// Geocoding payload as received, plus the name that was actually searched.
#[derive(Debug, Clone)]
pub struct SearchCitiesResponse {
    pub searched_name: String,
    pub payload: Value,
}

impl SearchCitiesResponse {
    pub fn candidates(&self) -> Vec<CityCandidate> {
        CityCandidate::list_from_payload(&self.payload)
    }
}
