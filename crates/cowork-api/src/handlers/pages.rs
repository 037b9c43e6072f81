//! Page handlers. Every page renders even when the backend is down; lists
//! fall back to empty states.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
    Form,
};
use serde::Serialize;
use tracing::debug;

use cowork_core::domain::{Location, WorkspaceQuery, WorkspacesResponse};
use cowork_core::forms::{ContactForm, FormState, VirtualOfficeForm, ENQUIRY_TYPES, SERVICE_TYPES};
use cowork_core::seo::PageMeta;
use cowork_shared::utils::capitalize_first;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::models::{
    cards, city_links, route_path, select_options, CityLink, Layout, PageNav, SelectOption, WorkspaceCard,
    WorkspaceDetail,
};

#[derive(Serialize)]
struct LandingPage {
    #[serde(flatten)]
    layout: Layout,
    featured: Vec<WorkspaceCard>,
    cities: Vec<CityLink>,
}

pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (featured, locations) = tokio::join!(
        state.listings.get_featured_workspaces(),
        state.listings.get_locations()
    );

    let page = LandingPage {
        layout: Layout::new(PageMeta::landing(&state.config.app.site_url), &state.config),
        featured: featured.map(|r| cards(&r.data)).unwrap_or_default(),
        cities: city_links(&locations),
    };
    state.views.render("landing", &page)
}

/// Display name for a city route segment: the backend's spelling when the
/// segment names a known location, else the segment with its first letter raised.
fn city_name(locations: &[Location], segment: &str) -> String {
    locations
        .iter()
        .find(|location| location.name.eq_ignore_ascii_case(segment) || location.slug() == segment)
        .map(|location| location.name.clone())
        .unwrap_or_else(|| capitalize_first(segment))
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ContactPage {
    #[serde(flatten)]
    layout: Layout,
    form: FormState<ContactForm>,
    enquiry_types: Vec<SelectOption>,
}

fn render_contact(state: &AppState, form: FormState<ContactForm>) -> Result<Html<String>, ApiError> {
    let page = ContactPage {
        layout: Layout::new(PageMeta::contact(&state.config.app.site_url), &state.config),
        enquiry_types: select_options(&ENQUIRY_TYPES[..], &form.values.enquiry_type),
        form,
    };
    state.views.render("contact", &page)
}

pub async fn contact_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_contact(&state, FormState::blank(ContactForm::default()))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.leads.submit(form).await;
    render_contact(&state, result)
}

// ---------------------------------------------------------------------------
// Virtual office
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct VirtualOfficePage {
    #[serde(flatten)]
    layout: Layout,
    heading: String,
    action: String,
    form: FormState<VirtualOfficeForm>,
    service_types: Vec<SelectOption>,
    locations: Vec<SelectOption>,
}

async fn render_virtual_office(
    state: &AppState,
    city: Option<&str>,
    form: FormState<VirtualOfficeForm>,
) -> Result<Html<String>, ApiError> {
    let locations = state.listings.get_locations().await;

    let (heading, action) = match city {
        Some(city) => (
            format!("Virtual Office in {}", city_name(&locations, city)),
            route_path("virtual-office", city),
        ),
        None => ("Virtual Office in Kerala".to_string(), "/virtual-office".to_string()),
    };

    let page = VirtualOfficePage {
        layout: Layout::new(
            PageMeta::virtual_office(&state.config.app.site_url, city),
            &state.config,
        ),
        heading,
        action,
        service_types: select_options(&SERVICE_TYPES[..], &form.values.service_type),
        locations: select_options(
            &locations.iter().map(|location| location.name.as_str()).collect::<Vec<_>>(),
            &form.values.location,
        ),
        form,
    };
    state.views.render("virtual_office", &page)
}

pub async fn virtual_office_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_virtual_office(&state, None, FormState::blank(VirtualOfficeForm::default())).await
}

pub async fn city_virtual_office_page(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Html<String>, ApiError> {
    let form = FormState::blank(VirtualOfficeForm::for_city(&city));
    render_virtual_office(&state, Some(&city), form).await
}

pub async fn submit_virtual_office(
    State(state): State<AppState>,
    Form(form): Form<VirtualOfficeForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.leads.submit(form).await;
    render_virtual_office(&state, None, result).await
}

pub async fn submit_city_virtual_office(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Form(form): Form<VirtualOfficeForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.leads.submit(form.rendered_for(&city)).await;
    render_virtual_office(&state, Some(&city), result).await
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DirectoryPage {
    #[serde(flatten)]
    layout: Layout,
    heading: String,
    city: Option<String>,
    workspaces: Vec<WorkspaceCard>,
    nav: Option<PageNav>,
    cities: Vec<CityLink>,
}

/// A `/coworking-space/{city}` request: the raw route segment and the
/// display name it resolved to.
struct CityRoute {
    segment: String,
    name: String,
}

fn render_directory(
    state: &AppState,
    city: Option<CityRoute>,
    workspaces: Option<WorkspacesResponse>,
    locations: Vec<Location>,
) -> Result<Html<String>, ApiError> {
    let (base_path, heading) = match &city {
        Some(city) => (
            route_path("coworking-space", &city.segment),
            format!("Coworking Spaces in {}", city.name),
        ),
        None => ("/coworking-space".to_string(), "Coworking Spaces in Kerala".to_string()),
    };

    let (listed, nav) = match workspaces {
        Some(response) => (
            cards(&response.data),
            Some(PageNav::new(&base_path, &response.pagination)),
        ),
        None => (Vec::new(), None),
    };

    let page = DirectoryPage {
        layout: Layout::new(
            PageMeta::directory(
                &state.config.app.site_url,
                city.as_ref().map(|c| c.segment.as_str()),
            ),
            &state.config,
        ),
        heading,
        city: city.map(|c| c.segment),
        workspaces: listed,
        nav,
        cities: city_links(&locations),
    };
    state.views.render("directory", &page)
}

/// Unparseable query strings fall back to the unfiltered first page.
pub async fn directory(
    State(state): State<AppState>,
    query: Result<Query<WorkspaceQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|rejection| {
        debug!("Ignoring directory query: {}", rejection);
        WorkspaceQuery::default()
    });
    let (workspaces, locations) = tokio::join!(
        state.listings.get_workspaces(&query),
        state.listings.get_locations()
    );
    render_directory(&state, None, workspaces, locations)
}

pub async fn city_directory(
    State(state): State<AppState>,
    Path(city): Path<String>,
    query: Result<Query<WorkspaceQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let page = query.ok().and_then(|Query(q)| q.page);
    let locations = state.listings.get_locations().await;
    let name = city_name(&locations, &city);
    let query = WorkspaceQuery { page, ..WorkspaceQuery::for_city(name.clone()) };
    let workspaces = state.listings.get_workspaces(&query).await;
    render_directory(&state, Some(CityRoute { segment: city, name }), workspaces, locations)
}

// ---------------------------------------------------------------------------
// Workspace detail
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DetailPage {
    #[serde(flatten)]
    layout: Layout,
    workspace: Option<WorkspaceDetail>,
}

pub async fn workspace_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let workspace = state
        .listings
        .get_workspace_by_id(&id)
        .await
        .filter(|response| response.success)
        .map(|response| response.data);

    let page = DetailPage {
        layout: Layout::new(
            PageMeta::workspace_detail(&state.config.app.site_url, &id, workspace.as_ref()),
            &state.config,
        ),
        workspace: workspace.as_ref().map(WorkspaceDetail::from),
    };
    state.views.render("workspace_detail", &page)
}
