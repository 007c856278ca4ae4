//! HTTP client for the Notion REST API.

use std::fmt;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::NotionApiError;
use crate::domain::models::{NotionConfig, User};

/// Base URL for the Notion REST API.
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Authenticated client for the Notion REST API.
///
/// Holds a single integration token for its whole lifetime. The token is
/// not validated until the first request. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct NotionClient {
    /// Reusable HTTP client with connection pooling
    http: ReqwestClient,
    /// Integration token sent as a bearer credential
    token: String,
    /// Base URL without a trailing slash
    base_url: String,
}

impl NotionClient {
    /// Create a client against the public Notion API with default
    /// transport settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            token: token.into(),
            base_url: NOTION_API_BASE.to_string(),
        }
    }

    /// Create a client using the base URL and request timeout from `config`.
    ///
    /// Fails only if the HTTP transport cannot be built.
    pub fn with_config(
        token: impl Into<String>,
        config: &NotionConfig,
    ) -> Result<Self, NotionApiError> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token: token.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an authenticated request to `<base_url><path>` and decode the
    /// JSON response into `T`.
    ///
    /// Any status other than 200 is turned into [`NotionApiError::Api`], or
    /// [`NotionApiError::Status`] when the body is not Notion's structured
    /// error. Transport and decode failures are returned unchanged.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, NotionApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending request");

        let response = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.bytes().await.unwrap_or_default();
            let error = NotionApiError::from_response(status, &body);
            // the caller reports it; keep the default console quiet
            debug!(status = status.as_u16(), %error, "Notion API returned an error");
            return Err(error);
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the user the token authenticates as (`GET /users/me`).
    pub async fn me(&self) -> Result<User, NotionApiError> {
        self.execute(Method::GET, "/users/me").await
    }

    /// Verify the token by fetching the bot user.
    ///
    /// Returns the bot's display name, or its id when the name is empty.
    pub async fn ping(&self) -> Result<String, NotionApiError> {
        let user = self.me().await?;
        Ok(user.display_name().to_string())
    }
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
