//! Error types for source runs and search requests

use std::time::Duration;

use thiserror::Error;

/// Why a single source produced nothing for a search.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no response from {url} within {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("could not decode listing payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that fail one search request without touching any other.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to serialize results: {0}")]
    Serialize(#[source] serde_json::Error),
}
