//! HTTP client for the external form-intake endpoint
//!
//! Posts the registration as `application/x-www-form-urlencoded`, the way a
//! plain HTML form with `method="POST"` would. The response body is never
//! read.

use super::traits::FormEndpoint;
use super::SubmissionError;
use crate::state::FormPayload;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Give up on a silent endpoint after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Form endpoint reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpFormEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl HttpFormEndpoint {
    pub fn new(url: &str) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SubmissionError::Client)?;
        Self::with_client(url, client)
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(url: &str, client: reqwest::Client) -> Result<Self, SubmissionError> {
        let url =
            Url::parse(url).map_err(|e| SubmissionError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FormEndpoint for HttpFormEndpoint {
    async fn post_form(&self, payload: &FormPayload) -> Result<u16, SubmissionError> {
        let response = self
            .client
            .post(self.url.clone())
            .form(payload)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;
        Ok(response.status().as_u16())
    }
}
