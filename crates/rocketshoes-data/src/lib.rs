//! HTTP client utilities for RocketShoes.
//!
//! Provides a small, ergonomic API over `reqwest` for talking to the
//! storefront's JSON endpoints, with automatic JSON handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketshoes_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Stock {
//!     amount: i64,
//! }
//!
//! let client = FetchClient::new().with_base_url("http://localhost:3333");
//!
//! let stock: Stock = client
//!     .get("/stock/1")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

use std::time::Duration;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

/// HTTP client for the storefront's JSON endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Apply a total timeout to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        };

        ClientRequestBuilder {
            http: self.http.clone(),
            timeout: self.timeout,
            builder: RequestBuilder::new(full_url),
        }
    }

    /// GET a URL and decode a successful JSON body.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: impl Into<String>,
    ) -> Result<T, FetchError> {
        self.get(url)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// A request builder bound to a client.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    timeout: Option<Duration>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder { url, headers } = self.builder;

        let parsed = reqwest::Url::parse(&url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        let mut request = self.http.get(parsed);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(%url, "sending request");
        let response = Response::read(request.send().await?).await?;
        tracing::debug!(%url, status = response.status, "received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_joined_to_base() {
        let client = FetchClient::new().with_base_url("http://localhost:3333/");
        assert_eq!(client.get("/stock/1").builder.url(), "http://localhost:3333/stock/1");
        assert_eq!(client.get("products/2").builder.url(), "http://localhost:3333/products/2");
    }

    #[test]
    fn test_absolute_url_ignores_base() {
        let client = FetchClient::new().with_base_url("http://localhost:3333");
        let req = client.get("https://api.example.com/stock/1");
        assert_eq!(req.builder.url(), "https://api.example.com/stock/1");
    }

    #[test]
    fn test_timeout_carried_to_requests() {
        let client = FetchClient::new().with_timeout(Duration::from_secs(3));
        assert_eq!(client.get("http://localhost/stock/1").timeout, Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_sending() {
        let err = FetchClient::new().get("not a url").send().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let client = FetchClient::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let err = client.get_json::<serde_json::Value>("/stock/1").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::RequestError(_) | FetchError::Timeout
        ));
    }
}
