//! # cz-api
//!
//! HTTP client for the CHALLENGERZ collections backend.
//!
//! Endpoint groups:
//! - `auth`: public event list and login
//! - `people`: payment records for an event
//! - `deductions`: expenses and per-event categories
//! - `superadmin`: admin accounts, events, categories, and the audit log
//!
//! The session token is sent raw in the `Authorization` header (no
//! `Bearer ` prefix) on every request once one is attached. Mutating calls
//! refuse to run without a token.

pub mod auth;
pub mod deductions;
pub mod people;
pub mod superadmin;

mod error;
mod http;

pub use error::{ACCESS_DENIED, ApiError};
pub use http::extract_message;

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};

/// Client for one backend origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the URL does not parse or is
    /// not http(s), and [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("challengerz-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            token: None,
        })
    }

    /// Attach (or clear) the session token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request, attaching the token when present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "backend request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }

    /// Build a request that must carry a token. Fails before sending anything
    /// when there is none.
    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        if self.token.is_none() {
            tracing::warn!(%method, path, "refusing to send without a session token");
            return Err(ApiError::MissingToken);
        }
        Ok(self.request(method, path))
    }

    /// Send and status-check, discarding the body.
    async fn execute(builder: RequestBuilder) -> Result<(), ApiError> {
        http::check_response(builder.send().await?).await?;
        Ok(())
    }
}

/// Percent-encode a single path segment (an entity id).
fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(client().base_url(), "http://localhost:5000");
        assert_eq!(client().url("/api/people"), "http://localhost:5000/api/people");
    }

    #[test]
    fn rejects_unparseable_and_non_http_urls() {
        assert!(matches!(
            ApiClient::new("not a url", Duration::from_secs(1)),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiClient::new("ftp://example.org", Duration::from_secs(1)),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn blank_token_counts_as_none() {
        assert!(!client().with_token(Some("  ".into())).has_token());
        assert!(client().with_token(Some("abc".into())).has_token());
        assert!(!client().with_token(None).has_token());
    }

    #[test]
    fn token_is_sent_raw() {
        let request = client()
            .with_token(Some("tok-123".into()))
            .request(Method::GET, "/api/people")
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "tok-123");
    }

    #[test]
    fn authed_requests_need_a_token() {
        assert!(matches!(
            client().authed(Method::DELETE, "/api/people/1"),
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("665f1c2e"), "665f1c2e");
    }
}
