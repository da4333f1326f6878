//! Relay HTTP Client
//!
//! A small, typed HTTP client for the parts of the CircleCI API that Relay
//! needs: triggering a pipeline, listing its workflows and jobs, and reading
//! job artifacts and step logs.
//!
//! The orchestrator only depends on the [`CiApi`] trait, so it can be driven
//! by [`CircleClient`] in production and by an in-memory fake in tests.
//!
//! # Example
//!
//! ```no_run
//! use relay_client::{CiApi, CircleClient};
//! use relay_core::domain::pipeline::ProjectSlug;
//!
//! # async fn example() -> relay_client::Result<()> {
//! let client = CircleClient::new(
//!     "https://circleci.com",
//!     ProjectSlug::new("gh", "acme", "widgets"),
//!     "my-token",
//! );
//!
//! let response = client.trigger_pipeline("main").await?;
//! println!("Triggered pipeline {:?}", response.number);
//! # Ok(())
//! # }
//! ```

mod api;
pub mod error;
mod jobs;
mod pipelines;
mod workflows;

pub use api::CiApi;
pub use error::{ClientError, Result};

use relay_core::domain::pipeline::ProjectSlug;
use relay_core::dto::page::Page;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the personal API token
const TOKEN_HEADER: &str = "Circle-Token";

/// HTTP client for the CircleCI API, scoped to one project
#[derive(Debug, Clone)]
pub struct CircleClient {
    /// Base URL of the service (e.g., "https://circleci.com")
    base_url: String,
    /// Project the client acts on
    project: ProjectSlug,
    /// API token sent with every authenticated request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl CircleClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use relay_client::CircleClient;
    /// use relay_core::domain::pipeline::ProjectSlug;
    ///
    /// let client = CircleClient::new(
    ///     "https://circleci.com/",
    ///     ProjectSlug::new("gh", "acme", "widgets"),
    ///     "token",
    /// );
    /// assert_eq!(client.base_url(), "https://circleci.com");
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        project: ProjectSlug,
        token: impl Into<String>,
    ) -> Self {
        Self::with_client(base_url, project, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        project: ProjectSlug,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project,
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    /// Authenticated GET against a v2 endpoint
    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/api/v2{}", self.base_url, path);
        self.client.get(url).header(TOKEN_HEADER, &self.token)
    }

    /// Authenticated POST against a v2 endpoint
    fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/api/v2{}", self.base_url, path);
        self.client.post(url).header(TOKEN_HEADER, &self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::ApiError`] carrying the raw body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Fetch every page of a listing endpoint
    async fn list_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.get(path);
            if let Some(token) = &page_token {
                request = request.query(&[("page-token", token)]);
            }

            let page: Page<T> = self.handle_response(request.send().await?).await?;
            items.extend(page.items);

            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    debug!("Following next page of {}", path);
                    page_token = Some(token);
                }
                _ => return Ok(items),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectSlug {
        ProjectSlug::new("gh", "acme", "widgets")
    }

    #[test]
    fn test_client_creation() {
        let client = CircleClient::new("https://circleci.com", project(), "token");
        assert_eq!(client.base_url(), "https://circleci.com");
        assert_eq!(client.project.v2(), "gh/acme/widgets");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CircleClient::new("https://circleci.com/", project(), "token");
        assert_eq!(client.base_url(), "https://circleci.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client =
            CircleClient::with_client("https://circleci.com", project(), "token", http_client);
        assert_eq!(client.base_url(), "https://circleci.com");
    }
}
