//! Block Explorer Client
//!
//! Reads tattoo NFT instances from a Blockscout-compatible REST API
//! (`{base}/tokens/{contract}/instances`). This is the only network-facing record
//! source; everything downstream of it works on already-fetched data.

use super::normalizer::normalize_all;
use super::types::{InstancePage, RawRecord};
use crate::error::DiscoveryError;
use crate::search::types::Tattoo;
use std::time::Duration;

pub const DEFAULT_EXPLORER_URL: &str = "https://polygon.blockscout.com/api/v2";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub struct ExplorerClient {
    http_client: reqwest::Client,
    base_url: String,
    contract: String,
    timeout: Duration,
    attempts: usize,
}

impl ExplorerClient {
    pub fn new(base_url: &str, contract: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            contract: contract.to_string(),
            timeout: Duration::from_secs(10),
            attempts: 3,
        }
    }

    /// Per-request timeout and total attempts (at least one).
    pub fn with_retry(mut self, timeout: Duration, attempts: usize) -> Self {
        self.timeout = timeout;
        self.attempts = attempts.max(1);
        self
    }

    /// A contract of all zeroes is the placeholder for "not deployed yet".
    pub fn is_configured(&self) -> bool {
        !self.contract.is_empty() && self.contract != ZERO_ADDRESS
    }

    pub fn instances_url(&self, offset: usize, limit: usize) -> String {
        format!(
            "{}/tokens/{}/instances?offset={}&limit={}",
            self.base_url, self.contract, offset, limit
        )
    }

    pub async fn fetch_instances(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<RawRecord>, DiscoveryError> {
        let url = self.instances_url(offset, limit);
        let response = self.get_with_retry(&url).await?;
        let page: InstancePage = response
            .json()
            .await
            .map_err(|e| DiscoveryError::Explorer(e.to_string()))?;

        tracing::debug!("Fetched {} instances from {}", page.items.len(), url);
        Ok(page.items)
    }

    /// Fetches one page of instances and normalizes it.
    pub async fn fetch_tattoos(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Tattoo>, DiscoveryError> {
        let raws = self.fetch_instances(offset, limit).await?;
        Ok(normalize_all(&raws))
    }

    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, DiscoveryError> {
        let mut delay_ms = 150u64;

        for attempt in 0..self.attempts {
            let response = self
                .http_client
                .get(url)
                .timeout(self.timeout)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                // Client errors will not improve on retry.
                Ok(resp) if resp.status().is_client_error() => {
                    return Err(DiscoveryError::ExplorerStatus {
                        status: resp.status().as_u16(),
                        url: url.to_string(),
                    });
                }
                Ok(resp) => {
                    if attempt + 1 == self.attempts {
                        return Err(DiscoveryError::ExplorerStatus {
                            status: resp.status().as_u16(),
                            url: url.to_string(),
                        });
                    }
                    tracing::warn!(
                        "Explorer returned {} for {} (attempt {})",
                        resp.status(),
                        url,
                        attempt + 1
                    );
                }
                Err(e) => {
                    if attempt + 1 == self.attempts {
                        return Err(DiscoveryError::Explorer(e.to_string()));
                    }
                    tracing::warn!("Explorer request to {} failed: {}", url, e);
                }
            }

            let jitter = rand::random::<u64>() % 50;
            tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
            delay_ms = (delay_ms * 2).min(1200);
        }

        Err(DiscoveryError::Explorer("Retry attempts exhausted".to_string()))
    }
}
