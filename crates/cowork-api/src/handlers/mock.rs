//! Local stand-ins for the listing backend: a fixed featured list and a
//! lead sink, so the site runs without the real backend.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use cowork_core::domain::{
    City, Lead, Pricing, SpaceContact, SpaceFeatures, SpaceLocation, SpaceStatus, Workspace,
};
use cowork_shared::constants::DEFAULT_PAGE_SIZE;
use cowork_shared::utils::mask_email;
use cowork_shared::Pagination;

use crate::response::ApiResponse;

fn city(id: &str, name: &str, description: &str, image: &str) -> City {
    City {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        is_active: true,
    }
}

fn features(wifi: &str, seats: &str, area: &str) -> Option<SpaceFeatures> {
    Some(SpaceFeatures {
        wifi: wifi.to_string(),
        seats: seats.to_string(),
        area: area.to_string(),
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn space(id: &str, name: &str, space_type: &str, category: &str, city: City) -> Workspace {
    Workspace {
        id: id.to_string(),
        space_id: id.to_string(),
        space_name: name.to_string(),
        space_type: space_type.to_string(),
        city,
        space_category: category.to_string(),
        status: SpaceStatus::Active,
        is_featured: true,
        ..Workspace::default()
    }
}

/// The six featured listings served by `GET /api/v1/spaces/featured`.
pub fn featured_catalog() -> Vec<Workspace> {
    let kochi = || city("city-1", "Kochi", "", "");
    let trivandrum = || city("city-2", "Trivandrum", "", "");

    vec![
        Workspace {
            short_description: Some("A vibrant collaborative space".to_string()),
            amenities: strings(&["Wifi", "Parking", "Coffee"]),
            pricing: Pricing {
                hot_desk: Some(120.0),
                dedicated_desk: Some(150.0),
                private_office: Some(0.0),
            },
            location: SpaceLocation {
                address: Some("MG Road, Kochi".to_string()),
                pincode: Some("682001".to_string()),
                ..SpaceLocation::default()
            },
            contact: SpaceContact {
                email: Some("info@collabhub.com".to_string()),
                phone: Some("+919876543210".to_string()),
                ..SpaceContact::default()
            },
            images: strings(&["/images/thumb-1.png"]),
            features: features("100 Mbps", "50 Seats", "120 m²"),
            ..space(
                "collab-hub-1",
                "Collaborative Hub",
                "Sharing Workspace",
                "Sharing Workspace",
                city("city-1", "Kochi", "Queen of Arabian Sea", "/images/kochi.png"),
            )
        },
        Workspace {
            short_description: Some("Open space for creative minds".to_string()),
            amenities: strings(&["Wifi", "Chill Zone"]),
            pricing: Pricing { hot_desk: Some(85.0), ..Pricing::default() },
            location: SpaceLocation {
                address: Some("Technopark, Trivandrum".to_string()),
                ..SpaceLocation::default()
            },
            contact: SpaceContact {
                email: Some("hello@openws.com".to_string()),
                ..SpaceContact::default()
            },
            images: strings(&["/images/thumb-2.png"]),
            features: features("100 Mbps", "30 Seats", "90 m²"),
            ..space(
                "open-ws-1",
                "Open Workspace",
                "Hot Desk",
                "Hybrid",
                city("city-2", "Trivandrum", "Capital City", "/images/tvm.png"),
            )
        },
        Workspace {
            amenities: strings(&["Wifi", "Meeting Room"]),
            pricing: Pricing { private_office: Some(45.0), ..Pricing::default() },
            images: strings(&["/images/thumb-1.png"]),
            features: features("75 Mbps", "10 Seats", "50 m²"),
            ..space("private-1", "Private Suite", "Private Office", "Private", kochi())
        },
        Workspace {
            pricing: Pricing { hot_desk: Some(120.0), ..Pricing::default() },
            images: strings(&["/images/thumb-1.png"]),
            features: features("100 Mbps", "50 Seats", "120 m²"),
            ..space(
                "collab-hub-2",
                "Collaborative Hub",
                "Sharing Workspace",
                "Sharing Workspace",
                city("city-3", "Calicut", "", ""),
            )
        },
        Workspace {
            pricing: Pricing { hot_desk: Some(85.0), ..Pricing::default() },
            images: strings(&["/images/thumb-2.png"]),
            features: features("100 Mbps", "30 Seats", "90 m²"),
            ..space("open-ws-2", "Open Workspace", "Hot Desk", "Hybrid", kochi())
        },
        Workspace {
            pricing: Pricing { private_office: Some(45.0), ..Pricing::default() },
            images: strings(&["/images/thumb-1.png"]),
            features: features("75 Mbps", "10 Seats", "50 m²"),
            ..space("private-2", "Private Suite", "Private Office", "Private", trivandrum())
        },
    ]
}

pub async fn featured_spaces() -> Json<ApiResponse<Vec<Workspace>>> {
    let spaces = featured_catalog();
    let pagination = Pagination::single_page(spaces.len() as u32, DEFAULT_PAGE_SIZE);
    Json(ApiResponse::paginated(spaces, pagination))
}

#[derive(Serialize)]
pub struct LeadReceipt {
    pub enquired_for: &'static str,
}

/// Accepts a lead and only logs it. Email is masked in the log line.
pub async fn create_lead(Json(lead): Json<Lead>) -> (StatusCode, Json<ApiResponse<LeadReceipt>>) {
    info!(
        email = %mask_email(&lead.email),
        source = lead.enquired_for.as_str(),
        space_type = %lead.space_type,
        "Lead received"
    );

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(LeadReceipt {
            enquired_for: lead.enquired_for.as_str(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_catalog() {
        let spaces = featured_catalog();
        let ids: Vec<&str> = spaces.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["collab-hub-1", "open-ws-1", "private-1", "collab-hub-2", "open-ws-2", "private-2"]
        );
        assert!(spaces.iter().all(|s| s.is_featured && s.is_active()));
        assert_eq!(spaces[0].pricing.display_price(), "$120.00 / Day");
        assert_eq!(spaces[2].pricing.display_price(), "$45.00 / Day");
        assert_eq!(spaces[3].city.name, "Calicut");
    }

    #[tokio::test]
    async fn test_featured_envelope() {
        let Json(body) = featured_spaces().await;
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 6);
        assert_eq!(json["data"][0]["city"]["_id"], "city-1");
        assert_eq!(
            json["pagination"],
            serde_json::json!({ "page": 1, "limit": 10, "total": 6, "totalPages": 1 })
        );
    }
}
