//! TFE HTTP client for API interactions

use reqwest::Client;
use std::time::Duration;

use crate::config::{api, rc};
use crate::error::Result;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a client for HCP Terraform.
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn new(token: String, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: Self::build_http_client(timeout)?,
            token,
            host: rc::HOST.to_string(),
            base_url_override: None,
        })
    }

    /// Create a client with custom base URL (for testing with mock servers)
    pub fn with_base_url(token: String, base_url: String, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: Self::build_http_client(timeout)?,
            token,
            host: rc::HOST.to_string(),
            base_url_override: Some(base_url.trim_end_matches('/').to_string()),
        })
    }

    fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some((connect, total)) = Self::timeouts(timeout) {
            builder = builder.connect_timeout(connect).timeout(total);
        }
        Ok(builder.build()?)
    }

    /// Connect and total timeouts; `None` leaves the request unbounded
    fn timeouts(timeout: Option<Duration>) -> Option<(Duration, Duration)> {
        timeout.map(|total| {
            let connect = Duration::from_secs(api::CONNECT_TIMEOUT_SECS).min(total);
            (connect, total)
        })
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }
}
