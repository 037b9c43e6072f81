// ============================================================================
// CoWork Infrastructure - Backend Client
// File: crates/cowork-infrastructure/src/backend/client.rs
// ============================================================================
//! Thin JSON client for the listing backend.

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use cowork_core::error::DomainError;
use cowork_shared::config::BackendSettings;

use super::cache::RevalidationCache;

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
    cache: RevalidationCache,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, DomainError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            DomainError::InternalError(format!("Invalid backend URL {}: {}", settings.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            cache: RevalidationCache::new(Duration::from_secs(settings.revalidate_seconds)),
        })
    }

    pub fn cache(&self) -> &RevalidationCache {
        &self.cache
    }

    /// `base_url` + path segments + query. Segments are percent-encoded and a
    /// trailing slash on the base is optional.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::InternalError(format!("Backend URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET and decode, served from the revalidation cache while fresh.
    /// Only successfully decoded bodies are cached.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, DomainError> {
        let url = self.endpoint(segments, query)?;
        let key = url.to_string();

        if let Some(body) = self.cache.get(&key) {
            debug!("Serving {} from cache", key);
            return decode(&body);
        }

        debug!("GET {}", key);
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::BackendStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::BackendUnavailable(e.to_string()))?;

        let parsed = decode(&body)?;
        self.cache.insert(key, body);
        Ok(parsed)
    }

    /// POST a JSON body; any 2xx is success and the response body is ignored.
    pub async fn post_json<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<(), DomainError> {
        let url = self.endpoint(segments, &[])?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::BackendStatus(status.as_u16()));
        }
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DomainError> {
    serde_json::from_str(body).map_err(|e| DomainError::MalformedResponse(e.to_string()))
}
