#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Weather API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Weather response has no condition entry")]
    MissingCondition,
}
