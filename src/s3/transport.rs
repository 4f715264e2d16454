//! Non-blocking HTTP transport behind the client.
//!
//! Every PUT/DELETE goes through the [`Transport`] trait so tests can
//! substitute a recording mock for live HTTP. The default implementation
//! rides on reqwest: native TLS, redirects followed (so the effective URL
//! is the one actually fetched), tuned connect/request timeouts.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use crate::s3::error::{Result, S3Error};
use crate::s3::types::ProxySettings;

/// One outbound request, fully assembled with its signed headers.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Signed header map; keys are lowercase.
    pub headers: BTreeMap<String, String>,
    /// Present only for uploads.
    pub body: Option<Bytes>,
    pub validate_cert: bool,
    pub proxy: Option<ProxySettings>,
}

impl TransportRequest {
    /// Loggable view of the request with the body replaced by a
    /// placeholder. Failure paths log this, never the raw request.
    pub fn redacted(&self) -> RedactedRequest<'_> {
        RedactedRequest(self)
    }
}

/// Display adapter that renders a request without its payload.
pub struct RedactedRequest<'a>(&'a TransportRequest);

impl fmt::Display for RedactedRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.method, self.0.url)?;
        for (name, value) in &self.0.headers {
            write!(f, " {}: {};", name, value)?;
        }
        if self.0.body.is_some() {
            write!(f, " body=[REDACTED]")?;
        }
        Ok(())
    }
}

/// What the transport reports back: the status, the URL actually fetched
/// after any redirects, and the raw response body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub effective_url: String,
    pub body: Bytes,
}

/// Non-blocking HTTP transport.
///
/// HTTP statuses are reported in the response; `Err` is reserved for
/// failures below the HTTP layer (connect, TLS, timeout).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

type ClientKey = (Option<ProxySettings>, bool);

/// Default transport built on reqwest.
pub struct HttpTransport {
    /// Direct client: certificate validation on, no proxy
    direct: reqwest::Client,
    /// Variant client for proxied or non-validating requests, cached with
    /// the settings that produced it and rebuilt when they change
    variant: Mutex<Option<(ClientKey, reqwest::Client)>>,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            direct: Self::build_client(None, true)?,
            variant: Mutex::new(None),
        })
    }

    fn build_client(proxy: Option<&ProxySettings>, validate_cert: bool) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .use_native_tls()
            .danger_accept_invalid_certs(!validate_cert)
            .tcp_nodelay(true)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(300))
            .pool_idle_timeout(Duration::from_secs(90));

        if let Some(proxy) = proxy {
            let proxy_url = format!("http://{}:{}", proxy.host, proxy.port);
            builder = builder.proxy(
                reqwest::Proxy::all(&proxy_url)
                    .map_err(|e| S3Error::Config(format!("invalid proxy {}: {}", proxy_url, e)))?,
            );
        }

        builder
            .build()
            .map_err(|e| S3Error::Network(format!("failed to build HTTP client: {}", e)))
    }

    /// Pick the client matching the request's proxy/TLS settings. The
    /// common direct case never touches the lock.
    fn client_for(&self, request: &TransportRequest) -> Result<reqwest::Client> {
        if request.proxy.is_none() && request.validate_cert {
            return Ok(self.direct.clone());
        }

        let key = (request.proxy.clone(), request.validate_cert);
        let mut cache = self.variant.lock().unwrap();
        if let Some((cached_key, client)) = &*cache {
            if *cached_key == key {
                return Ok(client.clone());
            }
        }
        let client = Self::build_client(key.0.as_ref(), key.1)?;
        *cache = Some((key, client.clone()));
        Ok(client)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let client = self.client_for(&request)?;

        // A header the signer emitted but HTTP cannot carry is an internal
        // inconsistency, not a transport fault.
        let mut header_map = HeaderMap::with_capacity(request.headers.len());
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| S3Error::Signing(format!("invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| S3Error::Signing(format!("invalid value for header {}: {}", name, e)))?;
            header_map.insert(name, value);
        }

        let mut builder = client
            .request(request.method.clone(), &request.url)
            .headers(header_map);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                S3Error::Network(format!("connection failure: {}", e))
            } else if e.is_timeout() {
                S3Error::Network(format!("timeout: {}", e))
            } else {
                S3Error::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let effective_url = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| S3Error::Network(format!("failed reading response body: {}", e)))?;

        Ok(TransportResponse {
            status,
            effective_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(proxy: Option<ProxySettings>) -> TransportRequest {
        TransportRequest {
            method: Method::PUT,
            url: "https://s3-us-east-1.amazonaws.com/bucket/key".to_string(),
            headers: BTreeMap::from([
                ("x-amz-date".to_string(), "20260115T123045Z".to_string()),
            ]),
            body: Some(Bytes::from_static(b"payload")),
            validate_cert: true,
            proxy,
        }
    }

    #[test]
    fn test_redacted_request_hides_body() {
        let rendered = request(None).redacted().to_string();
        assert!(rendered.contains("PUT"));
        assert!(rendered.contains("https://s3-us-east-1.amazonaws.com/bucket/key"));
        assert!(rendered.contains("x-amz-date"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("payload"));
    }

    #[test]
    fn test_redacted_request_without_body() {
        let mut req = request(None);
        req.body = None;
        let rendered = req.redacted().to_string();
        assert!(!rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_direct_client_bypasses_variant_cache() {
        let transport = HttpTransport::new().unwrap();
        transport.client_for(&request(None)).unwrap();
        assert!(transport.variant.lock().unwrap().is_none());
    }

    #[test]
    fn test_proxied_client_is_cached_by_settings() {
        let transport = HttpTransport::new().unwrap();
        let proxy = ProxySettings {
            host: "proxy.internal".to_string(),
            port: 3128,
        };

        transport.client_for(&request(Some(proxy.clone()))).unwrap();
        let cached = transport.variant.lock().unwrap().as_ref().map(|(k, _)| k.clone());
        assert_eq!(cached, Some((Some(proxy), true)));
    }
}
