use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, mock, pages, sitemap};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.app.static_dir.clone();

    let page_routes = Router::new()
        .route("/", get(pages::landing))
        .route("/contact", get(pages::contact_page).post(pages::submit_contact))
        .route(
            "/virtual-office",
            get(pages::virtual_office_page).post(pages::submit_virtual_office),
        )
        .route(
            "/virtual-office/{city}",
            get(pages::city_virtual_office_page).post(pages::submit_city_virtual_office),
        )
        .route("/coworking-space", get(pages::directory))
        .route("/coworking-space/{city}", get(pages::city_directory))
        .route("/coworking-space/details/{id}", get(pages::workspace_detail))
        .route("/sitemap.xml", get(sitemap::sitemap_xml));

    // Browser-callable mock backend
    let mock_routes = Router::new()
        .route("/api/v1/spaces/featured", get(mock::featured_spaces))
        .route("/api/v1/leads", post(mock::create_lead))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(health::health_check))
        .merge(page_routes)
        .merge(mock_routes)
        .nest_service("/images", ServeDir::new(Path::new(&static_dir).join("images")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::default().include_headers(true)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new()),
        )
}
