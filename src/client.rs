use std::fmt;
use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{
    config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    error::ApiError,
    retry::{is_retryable_status, parse_retry_after, RetryPolicy},
    Result, ZenfraError,
};

/// HTTP client for the Zenfra REST API.
///
/// The client is read-only after construction and cheap to clone; clones
/// share the underlying connection pool and may be used from any number of
/// concurrent tasks. Dropping an operation's future cancels the in-flight
/// request and any pending retry wait.
#[derive(Clone)]
pub struct ZenfraClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    user_agent: String,
    retry: RetryPolicy,
}

impl fmt::Debug for ZenfraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenfraClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ZenfraClient {
    /// Creates a client from the given configuration.
    ///
    /// Fails with [`ZenfraError::Config`] before any network activity if the
    /// endpoint or token is missing. Trailing slashes are stripped from the
    /// endpoint so paths can be appended verbatim.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(ZenfraError::Config("endpoint is required".to_owned()));
        }
        if config.api_token.trim().is_empty() {
            return Err(ZenfraError::Config("api_token is required".to_owned()));
        }

        let mut retry = RetryPolicy::default();
        if let Some(max_retries) = config.max_retries {
            retry.max_retries = max_retries;
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Self {
            http,
            base_url: config.endpoint.trim_end_matches('/').to_owned(),
            api_token: config.api_token,
            user_agent: config
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            retry,
        })
    }

    /// Replaces the retry policy, e.g. to shorten backoff in tests.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Executes a request and deserializes the JSON response body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
    ) -> Result<T> {
        let response = self.execute(method, path, body.as_ref()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ZenfraError::from_response(response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ZenfraError::Decode {
            status: status.as_u16(),
            source,
        })
    }

    /// Executes a request, checking only the status code.
    pub(crate) async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
    ) -> Result<()> {
        let response = self.execute(method, path, body.as_ref()).await?;
        if !response.status().is_success() {
            return Err(ZenfraError::from_response(response).await);
        }
        Ok(())
    }

    /// Sends the request, retrying transient failures within the attempt
    /// budget, and returns the first non-retryable response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0usize;

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(header::AUTHORIZATION, format!("Bearer {}", self.api_token))
                .header(header::USER_AGENT, &self.user_agent)
                .header(header::ACCEPT, "application/json");
            // The body is attached per attempt; a sent request consumes it.
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if !is_retryable_status(status) {
                        return Ok(response);
                    }

                    let retry_after = (status == StatusCode::TOO_MANY_REQUESTS)
                        .then(|| parse_retry_after(response.headers()))
                        .flatten();
                    // Close the body before retrying.
                    drop(response);

                    if attempt >= self.retry.max_retries {
                        return Err(ZenfraError::Api(ApiError {
                            status: status.as_u16(),
                            message: format!(
                                "request failed after {} retries with status {}",
                                self.retry.max_retries,
                                status.as_u16()
                            ),
                            request_id: None,
                        }));
                    }

                    self.wait_before_retry(attempt, retry_after).await;
                    attempt += 1;
                }
                Err(err) => {
                    if self.should_retry_transport(&err) && attempt < self.retry.max_retries {
                        self.wait_before_retry(attempt, None).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(ZenfraError::Transport(err));
                }
            }
        }
    }

    fn should_retry_transport(&self, err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect() || err.is_request() || err.is_body()
    }

    async fn wait_before_retry(&self, attempt: usize, retry_after: Option<Duration>) {
        let delay = self.retry.delay(attempt, retry_after);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying request after {} ms", delay.as_millis());

        sleep(delay).await;
    }
}
