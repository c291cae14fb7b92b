//! HTTP plumbing for the Tidemark platform API.
//!
//! The client is deliberately stateless: it holds no token. Callers pass the
//! session's bearer token into every method, so there is no ambient
//! authentication state anywhere in the process.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::PlatformConfig;

use super::{Envelope, GENERIC_ERROR_MESSAGE, PlatformError};

/// Client for the Tidemark platform REST API.
///
/// Cheaply cloneable; all methods take the caller's bearer token explicitly.
#[derive(Clone)]
pub struct PlatformClient {
    inner: Arc<PlatformClientInner>,
}

struct PlatformClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl PlatformClient {
    /// Create a new platform API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot be parsed, or if
    /// the HTTP client cannot be constructed.
    pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let base_url = Url::parse(&config.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(PlatformClientInner { client, base_url }),
        })
    }

    /// Resolve an endpoint path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, PlatformError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Execute a request and unwrap the response envelope, returning its data.
    ///
    /// `token` is attached as a bearer credential when present; the login and
    /// health endpoints are the only unauthenticated calls.
    pub(super) async fn send<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, PlatformError> {
        let envelope = self.send_envelope::<T, B>(method, path, token, body).await?;
        envelope.data.ok_or(PlatformError::MissingData)
    }

    /// Execute a request where only the success acknowledgement matters.
    ///
    /// Used for mutations: the admin re-fetches the collection afterwards, so
    /// any `data` payload is ignored.
    pub(super) async fn send_ack<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<(), PlatformError> {
        self.send_envelope::<serde_json::Value, B>(method, path, token, body)
            .await?;
        Ok(())
    }

    async fn send_envelope<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Envelope<T>, PlatformError> {
        let url = self.endpoint(path)?;

        let mut request = self.inner.client.request(method, url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(PlatformError::RateLimited(retry_after));
        }

        // Check for rejected credentials
        if status == StatusCode::UNAUTHORIZED {
            return Err(PlatformError::TokenRejected);
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            // The error envelope usually carries the message the admin should see
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&response_text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

            tracing::error!(
                path = %path,
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Platform API returned non-success status"
            );
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = match serde_json::from_str(&response_text) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(
                    path = %path,
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse platform response"
                );
                return Err(PlatformError::Parse(e));
            }
        };

        if !envelope.success {
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            });
        }

        Ok(envelope)
    }

    /// Authenticated GET returning the envelope data.
    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, PlatformError> {
        self.send(Method::GET, path, Some(token), None::<&()>).await
    }

    /// Authenticated POST with a JSON body, acknowledgement only.
    pub(super) async fn post_ack(
        &self,
        token: &str,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), PlatformError> {
        self.send_ack(Method::POST, path, Some(token), Some(body))
            .await
    }

    /// Authenticated PUT with a JSON body, acknowledgement only.
    pub(super) async fn put_ack(
        &self,
        token: &str,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), PlatformError> {
        self.send_ack(Method::PUT, path, Some(token), Some(body))
            .await
    }

    /// Authenticated DELETE, acknowledgement only.
    pub(super) async fn delete_ack(&self, token: &str, path: &str) -> Result<(), PlatformError> {
        self.send_ack(Method::DELETE, path, Some(token), None::<&()>)
            .await
    }

    /// Probe the platform health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), PlatformError> {
        self.send_ack(Method::GET, "/api/health", None, None::<&()>)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_client() -> PlatformClient {
        PlatformClient::new(&PlatformConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 30,
        })
        .unwrap()
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let result = PlatformClient::new(&PlatformConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 30,
        });
        assert!(matches!(result, Err(PlatformError::Url(_))));
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = test_client();
        let url = client.endpoint("/api/admin/shipment/all").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/admin/shipment/all");
    }
}
