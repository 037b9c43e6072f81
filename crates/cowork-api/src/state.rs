use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use cowork_core::services::{LeadService, ListingService};
use cowork_infrastructure::{
    BackendClient, HttpLeadRepository, HttpLocationRepository, HttpSpaceRepository,
};
use cowork_shared::config::AppConfig;

use crate::error::ApiError;
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub listings: ListingService,
    pub leads: LeadService,
    pub views: Arc<Views>,
    pub backend: BackendClient,
}

impl AppState {
    /// Wire the HTTP repositories against `config.backend` and load the templates.
    pub fn from_config(config: AppConfig) -> Result<Self, ApiError> {
        let backend = BackendClient::new(&config.backend)?;

        let listings = ListingService::new(
            Arc::new(HttpSpaceRepository::new(backend.clone())),
            Arc::new(HttpLocationRepository::new(backend.clone())),
        );
        let leads = LeadService::new(Arc::new(HttpLeadRepository::new(backend.clone())));

        Ok(Self {
            config: Arc::new(config),
            listings,
            leads,
            views: Arc::new(Views::new()?),
            backend,
        })
    }

    /// Sweep stale backend responses once per revalidation interval.
    /// Nothing is spawned when caching is disabled.
    pub fn spawn_cache_sweeper(&self) -> Option<JoinHandle<()>> {
        let cache = self.backend.cache().clone();
        if !cache.is_enabled() {
            return None;
        }

        let period = Duration::from_secs(self.config.backend.revalidate_seconds);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = cache.cleanup_expired();
                if removed > 0 {
                    debug!("Evicted {} stale backend responses", removed);
                }
            }
        }))
    }
}
