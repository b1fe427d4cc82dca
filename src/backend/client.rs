//! HTTP client for the word backend.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::BackendConfig;

use super::error::BackendError;
use super::types::{AdvancedConfig, AssociationResult, ClosestWord, DictionaryEntry};

/// The three queries the coordinator issues.
///
/// Implementations must be cheap to share across tasks; every call is
/// independent and may complete in any order.
#[async_trait]
pub trait WordService: Send + Sync {
    /// Closest dictionary word for a (possibly misspelled) input.
    async fn closest(&self, word: &str) -> Result<ClosestWord, BackendError>;

    /// Definitions of `word`, or of its closest correction.
    async fn definitions(&self, word: &str) -> Result<DictionaryEntry, BackendError>;

    /// Associations of `word` using the given advanced-search options.
    async fn associations(
        &self,
        word: &str,
        config: AdvancedConfig,
    ) -> Result<AssociationResult, BackendError>;
}

/// `WordService` backed by the JSON HTTP endpoints.
pub struct HttpWordService {
    client: Client,
    base_url: Url,
}

impl HttpWordService {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| BackendError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_seconds as u64))
            .pool_max_idle_per_host(config.pool_max_idle_per_host as usize)
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self { client, base_url })
    }

    /// Build `{base}/{endpoint}/{word}`, percent-encoding the word.
    pub fn endpoint_url(&self, endpoint: &str, word: &str) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push(endpoint)
            .push(word);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        let endpoint = url.path().to_string();
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Request {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| BackendError::Request {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| BackendError::Decode {
            endpoint,
            source: e,
        })
    }
}

#[async_trait]
impl WordService for HttpWordService {
    async fn closest(&self, word: &str) -> Result<ClosestWord, BackendError> {
        let url = self.endpoint_url("closest", word)?;
        self.get_json(url).await
    }

    async fn definitions(&self, word: &str) -> Result<DictionaryEntry, BackendError> {
        let url = self.endpoint_url("definitions", word)?;
        self.get_json(url).await
    }

    async fn associations(
        &self,
        word: &str,
        config: AdvancedConfig,
    ) -> Result<AssociationResult, BackendError> {
        let mut url = self.endpoint_url("associations", word)?;
        url.query_pairs_mut()
            .append_pair("split", if config.split_enabled { "true" } else { "false" })
            .append_pair("limit", &config.limit.to_string());
        self.get_json(url).await
    }
}
