//! Body digests for upload and signing.
//!
//! Two different digests serve two different purposes: the base64 MD5
//! travels as the `content-md5` integrity header, while the hex SHA-256
//! feeds the canonical request as `x-amz-content-sha256`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Pre-computed SHA256 hash of the empty payload (avoids hashing on every
/// bodiless request)
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Hex-encoded SHA-256 of `data`, the payload hash the signature covers.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Base64-encoded MD5 of `data`, the `content-md5` integrity header.
///
/// Must be computed over the exact bytes that will be transmitted; the
/// service rejects the upload if body and digest disagree.
pub fn content_md5(data: &[u8]) -> String {
    let digest = md5::compute(data);
    STANDARD.encode(&digest[..])
}
