//! HTTP client for the disaster query service.
//!
//! Works on native targets (CLI) and in the browser, where reqwest goes
//! through `fetch`. There is no retry: a failed call surfaces as an error
//! for the caller to display.

use crate::error::{DoomError, Result};
use crate::query::{ChatReply, ChatRequest, DisasterDetail, SearchHit};
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Base URL of a locally running query service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Shortest search term that is sent to the service.
pub const MIN_SEARCH_TERM_CHARS: usize = 3;

/// Search terms of two characters or fewer never reach the service.
pub fn should_search(term: &str) -> bool {
    term.chars().count() >= MIN_SEARCH_TERM_CHARS
}

pub fn should_chat(question: &str) -> bool {
    !question.trim().is_empty()
}

/// Decode a response body, mapping non-success statuses to [`DoomError::Status`].
pub fn parse_body<T: DeserializeOwned>(
    what: &'static str,
    status: u16,
    reason: &str,
    body: &str,
) -> Result<T> {
    if !(200..300).contains(&status) {
        warn!("query service: {} answered {} {}", what, status, reason);
        return Err(DoomError::Status {
            what,
            status,
            reason: reason.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|source| DoomError::Decode { what, source })
}

#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    base_url: String,
}

impl QueryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (e.g. with a timeout on native targets).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(
        what: &'static str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        parse_body(
            what,
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &body,
        )
    }

    /// `GET /search?term=<term>`
    pub async fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        let response = self
            .client
            .get(self.url("search"))
            .query(&[("term", term)])
            .send()
            .await?;
        let hits: Vec<SearchHit> = Self::read("disasters", response).await?;
        info!("query service: search '{}' returned {} hits", term, hits.len());
        Ok(hits)
    }

    /// `GET /disaster/<id>`
    pub async fn detail(&self, disaster_id: usize) -> Result<DisasterDetail> {
        let response = self
            .client
            .get(self.url(&format!("disaster/{}", disaster_id)))
            .send()
            .await?;
        let detail = Self::read("disaster details", response).await?;
        info!("query service: loaded detail for disaster {}", disaster_id);
        Ok(detail)
    }

    /// `POST /chat` with `{ disaster_id, question }`
    pub async fn chat(&self, disaster_id: usize, question: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("chat"))
            .json(&ChatRequest {
                disaster_id,
                question,
            })
            .send()
            .await?;
        let reply: ChatReply = Self::read("chat response", response).await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_boundary_is_three_chars() {
        assert!(!should_search(""));
        assert!(!should_search("US"));
        assert!(should_search("USA"));
        assert!(should_search("flood"));
        // counted in characters, not bytes
        assert!(!should_search("日本"));
        assert!(should_search("日本国"));
    }

    #[test]
    fn test_empty_questions_are_not_sent() {
        assert!(!should_chat(""));
        assert!(!should_chat("   "));
        assert!(should_chat("Is the water safe?"));
    }

    #[test]
    fn test_base_url_loses_trailing_slash() {
        let client = QueryClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("chat"), "http://localhost:5000/api/chat");
    }

    #[test]
    fn test_non_success_status_is_reported() {
        let err = parse_body::<ChatReply>("chat response", 500, "Internal Server Error", "oops")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch chat response: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_undecodable_body_is_reported() {
        let err = parse_body::<ChatReply>("chat response", 200, "OK", "{}").unwrap_err();
        assert!(matches!(err, DoomError::Decode { what: "chat response", .. }));
        let reply: ChatReply = parse_body("chat response", 200, "OK", r#"{"response":"yes"}"#).unwrap();
        assert_eq!(reply.response, "yes");
    }
}
