//! View models: what the templates see.

use serde::Serialize;
use url::Url;

use cowork_core::domain::{Location, Workspace};
use cowork_core::seo::PageMeta;
use cowork_shared::config::AppConfig;
use cowork_shared::constants::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, MIN_PHONE_LENGTH, SITE_NAME};
use cowork_shared::Pagination;

/// Shared chrome for every page: metadata, analytics tag, footer contact.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub meta: PageMeta,
    pub keywords: String,
    pub analytics_id: Option<String>,
    pub site_name: &'static str,
    pub contact_phone: &'static str,
    pub contact_email: &'static str,
    pub contact_address: &'static str,
    pub min_phone_length: u64,
}

impl Layout {
    pub fn new(meta: PageMeta, config: &AppConfig) -> Self {
        Self {
            keywords: meta.keywords.join(", "),
            meta,
            analytics_id: config.analytics.measurement_id().map(str::to_string),
            site_name: SITE_NAME,
            contact_phone: CONTACT_PHONE,
            contact_email: CONTACT_EMAIL,
            contact_address: CONTACT_ADDRESS,
            min_phone_length: MIN_PHONE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceCard {
    pub id: String,
    pub name: String,
    pub href: String,
    pub image: String,
    pub city: String,
    pub space_type: String,
    pub price: String,
    pub wifi: String,
    pub seats: String,
    pub area: String,
}

impl From<&Workspace> for WorkspaceCard {
    fn from(ws: &Workspace) -> Self {
        let features = ws.display_features();
        Self {
            id: ws.id.clone(),
            name: ws.space_name.clone(),
            href: format!("/coworking-space/details/{}", ws.id),
            image: ws.cover_image().to_string(),
            city: ws.city.name.clone(),
            space_type: ws.space_type.clone(),
            price: ws.pricing.display_price(),
            wifi: features.wifi,
            seats: features.seats,
            area: features.area,
        }
    }
}

pub fn cards(workspaces: &[Workspace]) -> Vec<WorkspaceCard> {
    workspaces.iter().map(WorkspaceCard::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceDetail {
    #[serde(flatten)]
    pub card: WorkspaceCard,
    pub category: String,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub gallery: Vec<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl From<&Workspace> for WorkspaceDetail {
    fn from(ws: &Workspace) -> Self {
        Self {
            card: WorkspaceCard::from(ws),
            category: ws.space_category.clone(),
            description: ws.long_description.clone().or_else(|| ws.short_description.clone()),
            amenities: ws.amenities.clone(),
            gallery: ws.images.iter().skip(1).cloned().collect(),
            address: ws.location.address.clone(),
            pincode: ws.location.pincode.clone(),
            contact_name: ws.contact.name.clone(),
            contact_email: ws.contact.email.clone(),
            contact_phone: ws.contact.phone.clone(),
        }
    }
}

/// `/{prefix}/{segment}` with `segment` percent-encoded as a single path segment.
pub fn route_path(prefix: &str, segment: &str) -> String {
    match Url::parse("http://localhost/") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push(prefix).push(segment);
            }
            url.path().to_string()
        }
        Err(_) => format!("/{}/{}", prefix, segment),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityLink {
    pub name: String,
    pub image: String,
    pub directory_href: String,
    pub virtual_office_href: String,
}

impl From<&Location> for CityLink {
    fn from(location: &Location) -> Self {
        let slug = location.slug();
        Self {
            name: location.name.clone(),
            image: location.image.clone(),
            directory_href: route_path("coworking-space", &slug),
            virtual_office_href: route_path("virtual-office", &slug),
        }
    }
}

pub fn city_links(locations: &[Location]) -> Vec<CityLink> {
    locations.iter().map(CityLink::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// `<option>` list with `current` marked; a current value missing from
/// `choices` is appended so the submitted value is never lost.
pub fn select_options<S: AsRef<str>>(choices: &[S], current: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = choices
        .iter()
        .map(|choice| SelectOption {
            value: choice.as_ref().to_string(),
            selected: choice.as_ref() == current,
        })
        .collect();

    if !current.is_empty() && !options.iter().any(|o| o.selected) {
        options.push(SelectOption { value: current.to_string(), selected: true });
    }
    options
}

/// Previous/next links for a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageNav {
    pub page: u32,
    pub total_pages: u32,
    pub total: u32,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl PageNav {
    pub fn new(base_path: &str, pagination: &Pagination) -> Self {
        let link = |page: u32| format!("{}?page={}", base_path, page);
        Self {
            page: pagination.page,
            total_pages: pagination.total_pages,
            total: pagination.total,
            prev_href: pagination.has_previous().then(|| link(pagination.page - 1)),
            next_href: pagination.has_next().then(|| link(pagination.page + 1)),
        }
    }
}
