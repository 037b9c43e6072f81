//! Page-level metadata (title, description, canonical URL, social cards)
//! derived from route parameters.

use serde::Serialize;

use cowork_shared::constants::SITE_NAME;
use cowork_shared::utils::capitalize_first;

use crate::domain::Workspace;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: Option<String>,
    pub og_type: &'static str,
    pub locale: &'static str,
    pub site_name: &'static str,
    pub twitter_card: &'static str,
}

impl PageMeta {
    fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            keywords: Vec::new(),
            canonical: None,
            og_type: "website",
            locale: "en_IN",
            site_name: SITE_NAME,
            twitter_card: "summary_large_image",
        }
    }

    fn canonical_at(mut self, site_url: &str, path: &str) -> Self {
        self.canonical = Some(format!("{}{}", site_url.trim_end_matches('/'), path));
        self
    }

    /// Root layout metadata, used where a page sets nothing more specific.
    pub fn site_default() -> Self {
        Self::new(
            "Co-Work Kerala".to_string(),
            "Find the best coworking spaces in Kerala".to_string(),
        )
    }

    pub fn landing(site_url: &str) -> Self {
        let mut meta = Self::new(
            "Coworking Spaces & Virtual Offices in Kerala | CoWork Kerala".to_string(),
            "Find the best coworking spaces, private offices and virtual offices across Kerala. Compare prices and book online.".to_string(),
        )
        .canonical_at(site_url, "/");
        meta.keywords = vec![
            "coworking space Kerala".to_string(),
            "virtual office Kerala".to_string(),
            "private office Kochi".to_string(),
        ];
        meta
    }

    pub fn contact(site_url: &str) -> Self {
        Self::new(
            "Contact Us | CoWork Kerala".to_string(),
            "Talk to the CoWork Kerala team about workspace discovery, virtual offices, or listing your space.".to_string(),
        )
        .canonical_at(site_url, "/contact")
    }

    /// Virtual office page, optionally for one city (`kochi` -> "Kochi").
    pub fn virtual_office(site_url: &str, city: Option<&str>) -> Self {
        let Some(city) = city.filter(|c| !c.is_empty()) else {
            let mut meta = Self::new(
                "Virtual Office in Kerala | GST & Company Registration | CoWork Kerala".to_string(),
                "Get a GST-compliant virtual office in Kerala with a prime business address, documentation, and mail handling.".to_string(),
            )
            .canonical_at(site_url, "/virtual-office");
            meta.keywords = vec!["virtual office Kerala".to_string(), "mail handling Kerala".to_string()];
            return meta;
        };

        let display_city = capitalize_first(city);
        let mut meta = Self::new(
            format!(
                "Virtual Office in {} | GST & Company Registration | CoWork Kerala",
                display_city
            ),
            format!(
                "Get GST-compliant virtual office in {0} with a prime business address, documentation, and mail handling. Flexible pricing plans available in {0}. Book online now.",
                display_city
            ),
        )
        .canonical_at(site_url, &format!("/virtual-office/{}", city.to_lowercase()));
        meta.keywords = vec![
            format!("virtual office {}", display_city),
            format!("GST registration address {}", display_city),
            format!("company registration address {}", display_city),
            format!("business address {}", display_city),
            "mail handling Kerala".to_string(),
            "startup registration".to_string(),
        ];
        meta
    }

    pub fn directory(site_url: &str, city: Option<&str>) -> Self {
        match city.filter(|c| !c.is_empty()) {
            Some(city) => {
                let display_city = capitalize_first(city);
                Self::new(
                    format!("Coworking Spaces in {} | CoWork Kerala", display_city),
                    format!(
                        "Browse coworking spaces, hot desks and private offices in {}. Compare amenities and prices.",
                        display_city
                    ),
                )
                .canonical_at(site_url, &format!("/coworking-space/{}", city.to_lowercase()))
            }
            None => Self::new(
                "Coworking Spaces in Kerala | CoWork Kerala".to_string(),
                "Browse coworking spaces, hot desks and private offices across Kerala.".to_string(),
            )
            .canonical_at(site_url, "/coworking-space"),
        }
    }

    /// Detail page; falls back to a generic title when the workspace did not load.
    pub fn workspace_detail(site_url: &str, id: &str, workspace: Option<&Workspace>) -> Self {
        let meta = match workspace {
            Some(ws) => {
                let description = ws.short_description.clone().unwrap_or_else(|| {
                    format!("{} in {}. {}.", ws.space_type, ws.city.name, ws.pricing.display_price())
                });
                Self::new(format!("{} | {} | CoWork Kerala", ws.space_name, ws.city.name), description)
            }
            None => Self::new(
                "Workspace | CoWork Kerala".to_string(),
                Self::site_default().description,
            ),
        };
        meta.canonical_at(site_url, &format!("/coworking-space/details/{}", id))
    }
}
