//! Core data types shared across the client.

use std::fmt;

/// Credentials for request signing.
///
/// Immutable for the lifetime of the client that owns them. The `Debug`
/// output redacts secret material so credentials can appear in error
/// context without leaking.
#[derive(Clone)]
pub struct Credentials {
    /// Access key ID
    pub access_key: String,
    /// Secret access key
    pub secret_key: String,
    /// Present for temporary (STS) credentials; signed into every request
    /// as `x-amz-security-token`.
    pub session_token: Option<String>,
    /// Region the signing scope is bound to
    pub region: String,
}

impl Credentials {
    /// Create long-lived credentials for a region.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
            region: region.into(),
        }
    }

    /// Attach a session token, marking these as temporary credentials.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("region", &self.region)
            .finish()
    }
}

/// Outbound HTTP proxy settings, applied per request by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub host: String,
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("AKIATEST", "supersecret", "us-east-1")
            .with_session_token("tempsessiontoken");

        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("AKIATEST"));
        assert!(rendered.contains("us-east-1"));
        assert!(!rendered.contains("supersecret"));
        assert!(!rendered.contains("tempsessiontoken"));
    }
}
