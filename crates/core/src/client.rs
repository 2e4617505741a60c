//! Query dispatcher: one GET against `{api_root}/recommend` per search.
//!
//! No retries and no timeout. Superseded requests are not aborted; callers
//! discard their completions through [`crate::schedule::RequestGate`].

use reqwest::Url;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

use crate::types::{ErrorBody, RecommendResponse};

/// Message used when an error status comes with a non-JSON body.
pub const GENERIC_SERVER_ERROR: &str = "Server error";
/// Message used when an error body is JSON but carries no `error` text.
pub const UNSPECIFIED_SERVER_ERROR: &str = "Server returned error";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Non-2xx response.
    Server { status: u16, message: String },
    /// The request never produced a response.
    Transport(String),
    /// A 2xx response whose body is not JSON.
    Decode(String),
    /// The endpoint or page URL could not be built.
    InvalidUrl(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Server { message, .. } => f.write_str(message),
            SearchError::Transport(msg) => write!(f, "Network error: {msg}"),
            SearchError::Decode(msg) => write!(f, "Invalid response: {msg}"),
            SearchError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Resolve the recommend endpoint against the page location. `api_root` may
/// be relative (`/api`) or absolute (`https://host/api`).
pub fn endpoint_url(page: &Url, api_root: &str) -> Result<Url, SearchError> {
    let path = format!("{}/recommend", api_root.trim_end_matches('/'));
    page.join(&path).map_err(|e| SearchError::InvalidUrl(format!("{path}: {e}")))
}

/// Endpoint URL with `q` and `n` set.
pub fn request_url(endpoint: &Url, query: &str, count: u32) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("q", query)
        .append_pair("n", &count.to_string());
    url
}

/// Pull the user-facing message out of an error body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(Value::String(msg)) }) if !msg.is_empty() => msg,
        Ok(_) => UNSPECIFIED_SERVER_ERROR.to_string(),
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    }
}

#[derive(Clone)]
pub struct RecommendClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RecommendClient {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Client for the endpoint under `api_root`, resolved against `page`.
    pub fn for_page(page: &Url, api_root: &str) -> Result<Self, SearchError> {
        Ok(Self::new(reqwest::Client::new(), endpoint_url(page, api_root)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch recommendations for a trimmed, non-empty query.
    pub async fn recommend(&self, query: &str, count: u32) -> Result<RecommendResponse, SearchError> {
        let url = request_url(&self.endpoint, query, count);
        debug!(query, count, url = %url, "Requesting recommendations");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(query, status = status.as_u16(), message = message.as_str(), "Recommend request failed");
            return Err(SearchError::Server { status: status.as_u16(), message });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        let parsed = RecommendResponse::from_value(&body);
        info!(query, results = parsed.len(), "Recommendations received");
        Ok(parsed)
    }
}

impl fmt::Debug for RecommendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendClient").field("endpoint", &self.endpoint.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_resolves_against_origin() {
        let page = Url::parse("https://movies.example/app/index.html?q=x").unwrap();
        let url = endpoint_url(&page, "/api").unwrap();
        assert_eq!(url.as_str(), "https://movies.example/api/recommend");

        let url = endpoint_url(&page, "/api/").unwrap();
        assert_eq!(url.as_str(), "https://movies.example/api/recommend");

        let url = endpoint_url(&page, "http://backend:5000/api").unwrap();
        assert_eq!(url.as_str(), "http://backend:5000/api/recommend");
    }

    #[test]
    fn request_url_sets_q_and_n() {
        let endpoint = Url::parse("http://localhost:5000/api/recommend").unwrap();
        let url = request_url(&endpoint, "The Matrix", 10);
        assert_eq!(url.as_str(), "http://localhost:5000/api/recommend?q=The+Matrix&n=10");
    }

    #[test]
    fn error_message_variants() {
        assert_eq!(error_message(r#"{"error":"Movie not found"}"#), "Movie not found");
        assert_eq!(error_message(r#"{"detail":"x"}"#), UNSPECIFIED_SERVER_ERROR);
        assert_eq!(error_message(r#"{"error":""}"#), UNSPECIFIED_SERVER_ERROR);
        assert_eq!(error_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message(""), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn server_error_displays_bare_message() {
        let err = SearchError::Server { status: 404, message: "Movie not found".into() };
        assert_eq!(err.to_string(), "Movie not found");
    }
}
