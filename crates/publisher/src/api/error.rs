use reqwest::StatusCode;

use super::Response;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// The request could not be sent or its response not read. Also covers
    /// a client that failed to build, which `new` reports the same way.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status code: {status}: {body}")]
    HttpStatus { status: StatusCode, body: Response },
    #[error("could not decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl ApiError {
    /// Status returned by the server, if it answered with a failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }
}
