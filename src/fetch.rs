// src/fetch.rs
//! Page fetching. Every transport problem is folded into
//! `FetchOutcome::Failure`; nothing escapes `fetch` as an error.

use anyhow::Context;
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;
use std::time::{Duration, Instant};

/// Desktop Chrome string; some servers refuse obvious bot agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { body: String },
    /// Timeout, DNS/connect error, non-2xx status, body read error.
    Failure { reason: String },
}

impl FetchOutcome {
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, address: &str, timeout: Duration) -> FetchOutcome;
}

/// reqwest-backed fetcher. One client is reused across targets.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get_text(&self, address: &str, timeout: Duration) -> reqwest::Result<String> {
        self.client
            .get(address)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, address: &str, timeout: Duration) -> FetchOutcome {
        tracing::debug!(url = %address, timeout_ms = timeout.as_millis() as u64, "GET");
        let t0 = Instant::now();
        let res = self.get_text(address, timeout).await;
        histogram!("syphon_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        match res {
            Ok(body) => FetchOutcome::Success { body },
            Err(e) => {
                counter!("syphon_fetch_failures_total").increment(1);
                FetchOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        }
    }
}
