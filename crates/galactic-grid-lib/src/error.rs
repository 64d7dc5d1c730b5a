use thiserror::Error;

/// Convenient result alias for the Galactic Grid library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an upstream API answered with a non-success status.
    #[error("{source_name} request failed with status {status}")]
    UpstreamStatus { source_name: &'static str, status: u16 },

    /// Raised when an upstream payload did not contain the fields the
    /// adapter needs (for example an empty N2YO position list).
    #[error("{source_name} returned an unusable payload: {reason}")]
    UpstreamPayload {
        source_name: &'static str,
        reason: String,
    },

    /// ISS position failures always surface to the caller; position is the
    /// operation's entire value and has no meaningful static substitute.
    #[error("failed to fetch ISS position: {reason}")]
    IssUnavailable { reason: String },

    /// Wrapper for HTTP transport errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
