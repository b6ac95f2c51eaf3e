use thiserror::Error;

/// Everything that can go wrong talking to the backend. The UI collapses all
/// of these into one fixed message per operation; the detail is for the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
}
