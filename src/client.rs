//! The OpenAlex works search client.

use crate::error::{FetchError, Result};
use crate::parse::parse_works_response;
use crate::types::Work;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Identifying User-Agent sent on every outbound request, per OpenAlex
/// politeness conventions.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; paperfetch/0.1.0; +https://openalex.org)";

/// Async client for the OpenAlex works search endpoint.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> paperfetch::error::Result<()> {
/// let client = paperfetch::OpenAlexClient::new();
/// let works = client.search_works("Time to Build and Aggregate Fluctuations", 5).await?;
/// for work in &works {
///     println!("{:?} ({:?})", work.title, work.publication_year);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenAlexClient {
    http: Client,
    base_url: String,
}

impl Default for OpenAlexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAlexClient {
    /// Create a new client against the public OpenAlex API.
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client with static configuration");

        Self {
            http,
            base_url: "https://api.openalex.org".to_string(),
        }
    }

    /// Override the base URL (useful for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Full-text search for works, returning up to `limit` candidates.
    ///
    /// One network request per call; transport, status, and parse failures
    /// all surface to the caller and are never retried here.
    pub async fn search_works(&self, title: &str, limit: u32) -> Result<Vec<Work>> {
        let url = format!("{}/works", self.base_url);
        let limit_str = limit.to_string();
        debug!(query = %title, limit, "searching OpenAlex");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("search", title), ("per_page", &limit_str)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        parse_works_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_works_sends_query_and_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/works"))
            .and(query_param("search", "dark matter"))
            .and(query_param("per_page", "5"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"results": [{"title": "Dark Matter", "publication_year": 2020}]}"#,
            ))
            .mount(&server)
            .await;

        let client = OpenAlexClient::new().with_base_url(server.uri());
        let works = client.search_works("dark matter", 5).await.unwrap();

        assert_eq!(works.len(), 1);
        assert_eq!(works[0].title.as_deref(), Some("Dark Matter"));
    }

    #[tokio::test]
    async fn test_search_works_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/works"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = OpenAlexClient::new().with_base_url(server.uri());
        let err = client.search_works("anything", 5).await.unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status, 503),
            other => panic!("expected Status error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_works_unparseable_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/works"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenAlexClient::new().with_base_url(server.uri());
        let err = client.search_works("anything", 5).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
