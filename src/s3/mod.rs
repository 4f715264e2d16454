//! S3 client module with AWS SigV4 signing
//!
//! This module provides:
//! - AWS Signature Version 4 signing for upload and delete requests
//! - Async PUT/DELETE operations over a pluggable transport
//! - Digest helpers for the integrity and payload-hash headers

pub mod client;
pub mod digest;
pub mod error;
pub mod signer;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::S3AsyncClient;
pub use error::{Result, S3Error};
pub use signer::RequestSigner;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
pub use types::{Credentials, ProxySettings};
