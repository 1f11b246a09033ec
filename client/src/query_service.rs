use crate::models::{ErrorBody, QueryResult};
use reqwest::Client;
use std::env;

/// Number of context snippets requested when the caller has no preference.
pub const DEFAULT_TOP_K: usize = 3;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const GENERIC_ERROR: &str = "Request failed";

/// Client for the RAG backend's query endpoint.
///
/// `query` never fails: HTTP errors, transport errors and malformed bodies
/// are all folded into the returned [`QueryResult`], so callers always get
/// something to render.
pub struct QueryService {
    client: Client,
    base_url: String,
}

impl QueryService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Read the backend location from `RAG_BACKEND_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url =
            env::var("RAG_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    /// Submit `query` to the backend, asking for up to `k` context snippets.
    ///
    /// A single attempt per call: no retries, no timeout, no cancellation.
    pub async fn query(&self, query: &str, k: usize) -> QueryResult {
        let url = format!("{}/rag_query", self.base_url);
        let k = k.to_string();
        let request = self.client.get(&url).query(&[("q", query), ("k", k.as_str())]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Request to {} failed: {}", url, err);
                return Self::failure(query, None, Some(err.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("Backend returned HTTP {} for query", status);
            // Tolerate a non-JSON error body by treating it as empty.
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let details = body
                .details
                .or_else(|| status.canonical_reason().map(str::to_string));
            return Self::failure(query, body.error, details);
        }

        match response.json::<QueryResult>().await {
            Ok(result) => result,
            Err(err) => {
                log::warn!("Backend returned an unreadable success body: {}", err);
                Self::failure(query, None, Some(err.to_string()))
            }
        }
    }

    /// Hit the backend's root endpoint and report whether it answered.
    /// A failed probe never blocks querying.
    pub async fn probe(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::debug!("Probe of {} failed: {}", url, err);
                false
            }
        }
    }

    fn failure(query: &str, error: Option<String>, details: Option<String>) -> QueryResult {
        QueryResult {
            query: query.to_string(),
            response: None,
            context: None,
            error: Some(error.unwrap_or_else(|| GENERIC_ERROR.to_string())),
            details,
            fallback: Some(format!("Echo: {}", query)),
        }
    }
}
