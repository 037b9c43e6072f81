// ============================================================================
// CoWork Core - Listing Service
// File: crates/cowork-core/src/services/listing_service.rs
// ============================================================================
//! Fail-soft accessors for workspaces and locations.
//!
//! Every accessor returns an empty sentinel on failure; callers cannot tell
//! "no results" from "backend down" and render an empty state either way.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use cowork_shared::constants::SITEMAP_WORKSPACE_LIMIT;

use crate::domain::{Location, WorkspaceQuery, WorkspaceResponse, WorkspacesResponse};
use crate::repositories::{LocationRepository, SpaceRepository};
use crate::sitemap::{self, SitemapEntry};

#[derive(Clone)]
pub struct ListingService {
    spaces: Arc<dyn SpaceRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl ListingService {
    pub fn new(spaces: Arc<dyn SpaceRepository>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { spaces, locations }
    }

    pub async fn get_workspaces(&self, query: &WorkspaceQuery) -> Option<WorkspacesResponse> {
        match self.spaces.list(query).await {
            Ok(response) => {
                debug!("Fetched {} workspaces", response.data.len());
                Some(response)
            }
            Err(e) => {
                warn!("Error fetching workspaces: {}", e);
                None
            }
        }
    }

    pub async fn get_workspace_by_id(&self, id: &str) -> Option<WorkspaceResponse> {
        self.spaces
            .find_by_id(id)
            .await
            .map_err(|e| warn!("Error fetching workspace {}: {}", id, e))
            .ok()
    }

    pub async fn get_featured_workspaces(&self) -> Option<WorkspacesResponse> {
        self.spaces
            .featured()
            .await
            .map_err(|e| warn!("Error fetching featured workspaces: {}", e))
            .ok()
    }

    /// Locations from a successful envelope; empty otherwise.
    pub async fn get_locations(&self) -> Vec<Location> {
        match self.locations.list().await {
            Ok(response) if response.success => response.data,
            Ok(_) => {
                debug!("Locations envelope reported success=false");
                Vec::new()
            }
            Err(e) => {
                warn!("Error fetching locations: {}", e);
                Vec::new()
            }
        }
    }

    /// Static routes, then workspace and city pages. A failed fetch only drops
    /// its own dynamic entries.
    pub async fn sitemap(&self, site_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        let query = WorkspaceQuery::default().with_limit(SITEMAP_WORKSPACE_LIMIT);
        let (workspaces, locations) = tokio::join!(self.get_workspaces(&query), self.get_locations());

        let mut entries = sitemap::static_pages(site_url, now);
        if let Some(response) = workspaces {
            entries.extend(sitemap::workspace_pages(site_url, &response.data, now));
        }
        entries.extend(sitemap::city_pages(site_url, &locations, now));
        entries
    }
}
