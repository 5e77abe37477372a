/*
[INPUT]:  Error sources (HTTP transport, envelope status, decoding, file IO)
[OUTPUT]: Structured error types with request context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Stocktwits adapter
#[derive(Error, Debug)]
pub enum StocktwitsError {
    /// HTTP transport failed (DNS, connect, timeout, non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The envelope's `response.status` field was not 200
    #[error("API error at {url} (envelope status {status}): {body}")]
    Api {
        url: String,
        status: i64,
        body: serde_json::Value,
    },

    /// Response body was not valid JSON, or a payload fragment had an
    /// unexpected shape
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 200 envelope arrived without the payload field the endpoint promises
    #[error("response from {url} is missing expected field `{field}`")]
    MissingField { url: String, field: &'static str },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Writing a downloaded file failed
    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Stocktwits operations
pub type Result<T> = std::result::Result<T, StocktwitsError>;
