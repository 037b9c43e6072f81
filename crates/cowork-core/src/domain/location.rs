//! Location (city) entity listed by `GET /api/v1/locations`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
}

impl Location {
    /// Route segment for this city (`Kochi` -> `kochi`).
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Location>,
}
