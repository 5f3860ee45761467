use thiserror::Error;

/// Failure kinds shared by the store, the upstream gateway and the use cases.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// The upstream could not be reached or timed out.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    /// The upstream answered, but with a non-success status or an unreadable body.
    #[error("Upstream {service} responded with {status}")]
    UpstreamRejected { service: &'static str, status: u16 },
    /// Absorbed by the search use case, never reaches an HTTP response.
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
    #[error("Storage fault: {0}")]
    StorageFault(String),
}
