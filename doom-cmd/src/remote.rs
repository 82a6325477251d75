//! Commands that call the disaster query service.

use doom_core::client::{should_chat, should_search, QueryClient};
use doom_core::query::SearchHit;
use log::info;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn client(api_base_url: &str) -> anyhow::Result<QueryClient> {
    let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(QueryClient::with_client(http, api_base_url))
}

/// Terms shorter than three characters are not sent and yield no hits.
pub async fn search(client: &QueryClient, term: &str) -> anyhow::Result<Vec<SearchHit>> {
    if !should_search(term) {
        info!("Search term '{}' is too short; not querying", term);
        return Ok(Vec::new());
    }
    Ok(client.search(term).await?)
}

pub async fn chat(client: &QueryClient, disaster_id: usize, question: &str) -> anyhow::Result<String> {
    if !should_chat(question) {
        anyhow::bail!("question is empty");
    }
    Ok(client.chat(disaster_id, question).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 (discard) is never a query service; these paths must not connect.
    const UNREACHABLE: &str = "http://127.0.0.1:9/api";

    #[tokio::test]
    async fn test_short_term_skips_request() {
        let client = client(UNREACHABLE).unwrap();
        assert!(search(&client, "us").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let client = client(UNREACHABLE).unwrap();
        let err = chat(&client, 0, "  ").await.unwrap_err();
        assert_eq!(err.to_string(), "question is empty");
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = client("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }
}
