use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketHubError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    /// The requested symbol or currency pair does not exist upstream.
    /// Surfaced as HTTP 404; every other variant becomes 500.
    #[error("{0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, MarketHubError>;

// Allow building errors directly from message strings
impl From<String> for MarketHubError {
    fn from(s: String) -> Self {
        MarketHubError::Unknown(s)
    }
}

impl From<&str> for MarketHubError {
    fn from(s: &str) -> Self {
        MarketHubError::Unknown(s.to_string())
    }
}

impl MarketHubError {
    /// True when the error means the requested instrument does not exist,
    /// as opposed to a transport or upstream failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketHubError::NotFound(_))
    }
}
