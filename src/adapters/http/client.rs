//! Blocking HTTP gateway over `reqwest`
//!
//! Owns a current-thread tokio runtime and blocks the caller on each request.
//! The timeout drops the request future, so a late response is never observed.

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tokio::runtime::Runtime;

use super::wire;
use crate::config::ApiConfig;
use crate::core::error::GatewayError;
use crate::core::models::{Article, Reviewer, Summary};
use crate::core::ports::{DecisionSubmission, ReviewGateway};

/// Bounded retry for read operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each attempt
    pub backoff: Duration,
}

impl RetryPolicy {
    /// No retries
    pub const NONE: Self = Self {
        max_retries: 0,
        backoff: Duration::ZERO,
    };

    const fn delay(self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Gateway to the spreadsheet web app
pub struct HttpGateway {
    base_url: Url,
    client: Client,
    runtime: Runtime,
    timeout: Duration,
    retry: RetryPolicy,
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl HttpGateway {
    /// Create a gateway for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid API URL '{base_url}': {e}"))?;
        let client = Client::builder()
            .user_agent(concat!("screener/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            base_url,
            client,
            runtime,
            timeout,
            retry: RetryPolicy::NONE,
        })
    }

    /// Create a gateway from configuration
    pub fn from_config(url: &str, api: &ApiConfig) -> anyhow::Result<Self> {
        Ok(Self::new(url, api.timeout())?.with_retry(api.retry_policy()))
    }

    /// Retry transient failures of read operations
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn url_for(&self, action: &str, params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("action", action);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    fn call(
        &self,
        method: Method,
        action: &str,
        params: &[(&str, String)],
        body: Option<&DecisionSubmission>,
    ) -> Result<Value, GatewayError> {
        let url = self.url_for(action, params);
        debug!("{method} action={action}");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let send = async {
            let response = request
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            Ok::<_, GatewayError>((status, text))
        };

        let (status, text) = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, send).await })
            .map_err(|_| GatewayError::Timeout(self.timeout))??;

        if !status.is_success() {
            // Prefer the store's own message when it sent one
            return match wire::parse_envelope(&text) {
                Err(GatewayError::Remote(message)) => Err(GatewayError::Remote(message)),
                _ => Err(GatewayError::Status(status.as_u16())),
            };
        }

        wire::parse_envelope(&text)
    }

    fn read(&self, action: &str, params: &[(&str, String)]) -> Result<Value, GatewayError> {
        let mut attempt = 0;
        loop {
            match self.call(Method::GET, action, params, None) {
                Err(e) if e.is_transient() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay(attempt);
                    attempt += 1;
                    warn!(
                        "{action} failed ({e}); retry {attempt}/{} in {}ms",
                        self.retry.max_retries,
                        delay.as_millis()
                    );
                    std::thread::sleep(delay);
                },
                other => return other,
            }
        }
    }
}

fn reviewer_params(reviewer: &Reviewer) -> [(&'static str, String); 2] {
    [
        ("reviewer", reviewer.name.clone()),
        ("role", reviewer.role.code().to_string()),
    ]
}

impl ReviewGateway for HttpGateway {
    fn get_reviewers(&self) -> Result<Vec<String>, GatewayError> {
        let value = self.read("getReviewers", &[])?;
        Ok(wire::reviewers(&value)?)
    }

    fn get_articles(&self, reviewer: &Reviewer) -> Result<Vec<Article>, GatewayError> {
        let value = self.read("getArticles", &reviewer_params(reviewer))?;
        Ok(wire::articles(&value)?)
    }

    fn submit_decision(&self, submission: &DecisionSubmission) -> Result<(), GatewayError> {
        // Single attempt: a timed-out write may still have landed
        self.call(
            Method::POST,
            "submitDecision",
            &submission.params(),
            Some(submission),
        )?;
        Ok(())
    }

    fn get_summary(&self, reviewer: &Reviewer) -> Result<Summary, GatewayError> {
        let value = self.read("getSummary", &reviewer_params(reviewer))?;
        Ok(wire::summary(&value)?)
    }
}
