use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::GitHubApi;
use crate::config::AppConfig;
use crate::error::{DashError, Result};
use crate::model::{Profile, Repository};

/// Blocking client for the user and user-repos endpoints.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| DashError::Other(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.api_base.clone(),
        })
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.api_base, urlencoding::encode(username))
    }

    pub fn repos_url(&self, username: &str) -> String {
        format!("{}/users/{}/repos", self.api_base, urlencoding::encode(username))
    }

    /// GET `url` and decode the body, or `None` for anything other than a
    /// parseable 200 response.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        tracing::debug!(%url, "GET");
        let response: Response = match self.http.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(%url, error = %e, "request failed");
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%url, %status, "non-200 response");
            return None;
        }

        match response.json::<T>() {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(%url, error = %e, "failed to decode response body");
                None
            }
        }
    }
}

impl GitHubApi for GitHubClient {
    fn fetch_profile(&self, username: &str) -> Option<Profile> {
        self.get_json(&self.profile_url(username))
    }

    fn fetch_repos(&self, username: &str) -> Vec<Repository> {
        self.get_json(&self.repos_url(username)).unwrap_or_default()
    }
}
