use thiserror::Error;

/// Everything that can go wrong between a tool call and its summary text.
///
/// Display strings double as the tool result for failed calls, so they are
/// written for the agent reading them rather than for a log file.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit hit. Retry after {0} seconds.")]
    RateLimited(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid or expired API key.")]
    Forbidden,

    #[error("Unauthorized. Check your API key.")]
    Unauthorized,

    #[error("Request timeout")]
    Timeout,

    #[error("Network error {0}")]
    Network(String),

    #[error("HTTP error {0}")]
    Http(u16),

    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
