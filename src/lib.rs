//! s3courier - Minimal asynchronous S3 upload/delete client with AWS SigV4 signing

pub mod config;
pub mod s3;

pub use s3::client::S3AsyncClient;
pub use s3::error::{Result, S3Error};
pub use s3::types::Credentials;
