// ============================================================================
// CoWork Core - Workspace Entity
// File: crates/cowork-core/src/domain/workspace.rs
// Description: Listed coworking space as served by the listing backend
// ============================================================================

use serde::{Deserialize, Serialize};

use cowork_shared::constants::PLACEHOLDER_IMAGE;
use cowork_shared::Pagination;

/// Listing lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl SpaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceStatus::Active => "active",
            SpaceStatus::Inactive => "inactive",
            SpaceStatus::Pending => "pending",
        }
    }
}

/// City a workspace belongs to (embedded in the workspace payload).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Price tiers per day. Absent or zero means the tier is not offered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_desk: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_desk: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_office: Option<f64>,
}

impl Pricing {
    /// First offered tier, in hot-desk, dedicated-desk, private-office order.
    pub fn starting_price(&self) -> Option<f64> {
        [self.hot_desk, self.dedicated_desk, self.private_office]
            .into_iter()
            .flatten()
            .find(|price| *price > 0.0)
    }

    pub fn display_price(&self) -> String {
        match self.starting_price() {
            Some(price) => format!("${:.2} / Day", price),
            None => "Contact for Price".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Card highlights, all free text ("100 Mbps", "50 Seats", "120 m²").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceFeatures {
    #[serde(default)]
    pub wifi: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub area: String,
}

impl Default for SpaceFeatures {
    fn default() -> Self {
        Self {
            wifi: "100 Mbps".to_string(),
            seats: "N/A".to_string(),
            area: "N/A".to_string(),
        }
    }
}

/// Workspace entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub space_name: String,
    #[serde(default)]
    pub space_type: String,
    #[serde(default)]
    pub city: City,
    #[serde(default)]
    pub space_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub location: SpaceLocation,
    #[serde(default)]
    pub contact: SpaceContact,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: SpaceStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<SpaceFeatures>,
}

impl Workspace {
    pub fn display_features(&self) -> SpaceFeatures {
        self.features.clone().unwrap_or_default()
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|src| !src.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn is_active(&self) -> bool {
        self.status == SpaceStatus::Active
    }
}

/// Query accepted by `GET /api/v1/spaces`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceQuery {
    pub city: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl WorkspaceQuery {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self { city: Some(city.into()), ..Self::default() }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs in wire order; unset, empty and zero values are left out.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("city", city.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// Envelope of `GET /api/v1/spaces` and `GET /api/v1/spaces/featured`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspacesResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Workspace>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Envelope of `GET /api/v1/spaces/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    pub success: bool,
    pub data: Workspace,
}
