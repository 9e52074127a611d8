//! Error types for the collectives front end

use thiserror::Error;

/// Main error type for collectives operations
#[derive(Error, Debug)]
pub enum CollectivesError {
    /// Transport-level failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The GraphQL response carried an `errors` array
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The GraphQL response had no payload for the requested field
    #[error("Missing data for field: {0}")]
    MissingData(&'static str),

    /// Response or file content could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Deliver type other than `manual` or `email`
    #[error("Unknown deliver type: {0}")]
    UnknownDeliverType(String),

    /// A gift card batch must hold at least one card
    #[error("Gift card batch is empty")]
    EmptyGiftCardBatch,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CollectivesError
pub type CollectivesResult<T> = Result<T, CollectivesError>;
