//! HTTP API Client
//!
//! reqwest-backed [`SocialApi`]. Any transport error or non-2xx status is a
//! failure; callers do not distinguish between them.

use async_trait::async_trait;
use reqwest::Url;
use snafu::ResultExt;
use tracing::debug;

use crate::constants::{FOLLOW_ENDPOINT, REGISTER_ENDPOINT, UNFOLLOW_ENDPOINT, USER_ENDPOINT};
use crate::domain::config::ApiConfig;
use crate::domain::registration::RegistrationInput;
use crate::domain::user::{UserId, UserProfile};
use crate::error::{ClientBuildSnafu, DecodeSnafu, Error, HttpSnafu, Result, StatusSnafu};
use crate::services::api::SocialApi;

/// Social API over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    /// Create a client for the configured server
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|e| Error::Invalid {
            message: format!("Invalid API base URL {:?}: {e}", config.base_url),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Invalid {
                message: format!("API base URL {base_url} cannot hold a path"),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context(ClientBuildSnafu)?;

        Ok(Self { http, base_url })
    }

    /// Join path segments onto the base URL, percent-encoding each segment
    pub(crate) fn endpoint(&self, segments: &[&str], id: Option<&UserId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
            if let Some(id) = id {
                path.push(id.as_str());
            }
        }
        url
    }

    /// Send a request and turn non-2xx statuses into errors
    async fn send(&self, url: &Url, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.context(HttpSnafu {
            url: url.as_str(),
        })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "API response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        StatusSnafu {
            url: url.as_str(),
            status: status.as_u16(),
            body,
        }
        .fail()
    }

    async fn post_empty(&self, url: Url) -> Result<()> {
        debug!(url = %url, "POST");
        self.send(&url, self.http.post(url.clone())).await?;
        Ok(())
    }
}

#[async_trait]
impl SocialApi for HttpApi {
    async fn fetch_user(&self, id: &UserId) -> Result<UserProfile> {
        let url = self.endpoint(USER_ENDPOINT, Some(id));
        debug!(url = %url, "GET user profile");
        let response = self.send(&url, self.http.get(url.clone())).await?;
        response
            .json::<UserProfile>()
            .await
            .context(DecodeSnafu { url: url.as_str() })
    }

    async fn follow(&self, id: &UserId) -> Result<()> {
        self.post_empty(self.endpoint(FOLLOW_ENDPOINT, Some(id))).await
    }

    async fn unfollow(&self, id: &UserId) -> Result<()> {
        self.post_empty(self.endpoint(UNFOLLOW_ENDPOINT, Some(id))).await
    }

    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value> {
        let url = self.endpoint(REGISTER_ENDPOINT, None);
        debug!(url = %url, email = %input.email, "POST registration");
        let response = self
            .send(&url, self.http.post(url.clone()).json(input))
            .await?;

        let body = response
            .text()
            .await
            .context(HttpSnafu { url: url.as_str() })?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}
