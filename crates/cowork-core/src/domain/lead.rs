// ============================================================================
// CoWork Core - Lead Entity
// File: crates/cowork-core/src/domain/lead.rs
// Description: Prospect contact submission sent to the lead backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Page that produced a lead (`enquiredFor` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    #[serde(rename = "Contact Page")]
    ContactPage,
    #[serde(rename = "Virtual Office Page")]
    VirtualOfficePage,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::ContactPage => "Contact Page",
            LeadSource::VirtualOfficePage => "Virtual Office Page",
        }
    }
}

/// Lead entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Enquiry or service type chosen on the form.
    pub space_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub enquired_for: LeadSource,
}
