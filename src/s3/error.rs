//! Error classification for client operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Client errors.
///
/// Every failure is logged once at the point of detection and then
/// propagated unchanged; the caller owns any retry or backoff policy.
/// There is no partial-success state for either operation.
#[derive(Error, Debug)]
pub enum S3Error {
    /// Missing or invalid region, bucket, credentials, or object path.
    /// Fatal at the call site, never retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal inconsistency while building a signed request. Should not
    /// occur under valid input.
    #[error("signing error: {0}")]
    Signing(String),

    /// The storage service responded with a non-success status.
    #[error("S3 error: {status} - {message}")]
    Http { status: StatusCode, message: String },

    /// Connection, TLS, or timeout failure below the HTTP layer.
    #[error("network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, S3Error>;
