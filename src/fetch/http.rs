// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! reqwest-backed fetcher for a live site.

use super::{parse_base, resolve_same_origin, PageFetcher};
use crate::config::SearchConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches pages from one origin over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str, config: &SearchConfig) -> Result<Self, FetchError> {
        let base = parse_base(base)?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Unavailable(format!("http client: {e}")))?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = resolve_same_origin(&self.base, path)?;
        tracing::debug!(%url, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unavailable(format!("{url}: HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Unavailable(format!("{url}: {e}")))
    }
}
