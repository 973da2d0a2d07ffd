use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unexpected status {code} from {path}")]
    UnexpectedStatus { path: String, code: u16 },

    #[error("empty response body from {0}")]
    EmptyBody(String),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, ApiError>;
