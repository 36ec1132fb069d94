use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}
