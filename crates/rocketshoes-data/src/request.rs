//! HTTP request builder.

use std::collections::HashMap;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_header() {
        let req = RequestBuilder::new("http://x/stock/1").accept("application/json");
        assert_eq!(req.url(), "http://x/stock/1");
        assert_eq!(req.headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_header_replaces_previous_value() {
        let req = RequestBuilder::new("http://x")
            .accept("text/plain")
            .accept("application/json");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers["Accept"], "application/json");
    }
}
