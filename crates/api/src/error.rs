//! API error types

use thiserror::Error;

/// API operation result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Unexpected response body: {0}")]
    BadResponse(String),

    #[error("File too large: {size} bytes (max {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("Not an image file")]
    NotAnImage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::ConnectionError(err.to_string())
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}
