use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cowork_api::{build_router, AppState};
use cowork_shared::config::{AnalyticsSettings, AppConfig, AppSettings, BackendSettings};

fn config(base_url: &str) -> AppConfig {
    AppConfig {
        backend: BackendSettings {
            base_url: base_url.to_string(),
            revalidate_seconds: 0,
            timeout_seconds: 2,
        },
        ..AppConfig::default()
    }
}

fn app(config: AppConfig) -> Router {
    build_router(AppState::from_config(config).unwrap())
}

/// Nothing listens on the discard port.
fn offline_app() -> Router {
    app(config("http://127.0.0.1:9/"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn featured_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": [{
            "id": "collab-hub-1",
            "spaceName": "Collaborative Hub",
            "spaceType": "Sharing Workspace",
            "city": { "_id": "city-1", "name": "Kochi" },
            "pricing": { "hotDesk": 120 },
            "images": ["/images/thumb-1.png"],
            "features": { "wifi": "100 Mbps", "seats": "50 Seats", "area": "120 m²" }
        }],
        "pagination": { "page": 1, "limit": 10, "total": 1, "totalPages": 1 }
    })
}

fn locations_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": [{ "_id": "c1", "name": "Kochi", "image": "/images/kochi.png" }]
    })
}

const VALID_CONTACT: &str =
    "name=Asha&email=asha%40example.com&phone=9876543210&enquiry_type=Looking+for+Space&message=Hi";

#[tokio::test]
async fn test_health() {
    let (status, body) = get(offline_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_landing_renders_featured_and_cities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(featured_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(locations_body()))
        .mount(&server)
        .await;

    let (status, body) = get(app(config(&server.uri())), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Collaborative Hub"));
    assert!(body.contains("$120.00 / Day"));
    assert!(body.contains("/coworking-space/details/collab-hub-1"));
    assert!(body.contains("/coworking-space/kochi"));
    assert!(body.contains("<link rel=\"canonical\" href=\"https://coworkkerala.com/\">"));
}

#[tokio::test]
async fn test_landing_survives_backend_outage() {
    let (status, body) = get(offline_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured Workspaces in Kerala"));
    assert!(body.contains("Featured workspaces will be listed here soon."));
}

#[tokio::test]
async fn test_analytics_tag_only_when_configured() {
    let (_, body) = get(offline_app(), "/contact").await;
    assert!(!body.contains("googletagmanager"));

    let mut with_ga = config("http://127.0.0.1:9/");
    with_ga.analytics = AnalyticsSettings { ga_id: Some("G-TEST123".to_string()) };
    let (_, body) = get(app(with_ga), "/contact").await;
    assert!(body.contains("gtag/js?id=G-TEST123"));
}

#[tokio::test]
async fn test_contact_invalid_email_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        app(config(&server.uri())),
        "/contact",
        "name=Asha&email=not-an-email&phone=9876543210&enquiry_type=Looking+for+Space",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid email address"));
    assert!(body.contains("value=\"Asha\""));
    assert!(!body.contains("Thank you!"));
}

#[tokio::test]
async fn test_contact_missing_fields_report_each_error() {
    let (_, body) = post_form(offline_app(), "/contact", "").await;
    assert!(body.contains("Name is required"));
    assert!(body.contains("Phone number must be at least 10 digits"));
    assert!(body.contains("Please select an enquiry type"));
}

#[tokio::test]
async fn test_contact_success_resets_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .and(body_partial_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "spaceType": "Looking for Space",
            "message": "Hi",
            "enquiredFor": "Contact Page"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(app(config(&server.uri())), "/contact", VALID_CONTACT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you! We will contact you soon."));
    assert!(!body.contains("value=\"Asha\""));
}

#[tokio::test]
async fn test_contact_sends_trimmed_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .and(body_partial_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "9876543210"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        app(config(&server.uri())),
        "/contact",
        "name=++Asha++&email=+asha%40example.com+&phone=+9876543210+&enquiry_type=Looking+for+Space",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you! We will contact you soon."));
}

#[tokio::test]
async fn test_contact_blank_after_trimming_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        app(config(&server.uri())),
        "/contact",
        "name=+++&email=asha%40example.com&phone=123456789+&enquiry_type=Looking+for+Space",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Phone number must be at least 10 digits"));
    assert!(!body.contains("Thank you!"));
}

#[tokio::test]
async fn test_contact_failure_keeps_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(app(config(&server.uri())), "/contact", VALID_CONTACT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Something went wrong. Please try again."));
    assert!(body.contains("value=\"Asha\""));
}

#[tokio::test]
async fn test_virtual_office_city_prefills_location() {
    let (status, body) = get(offline_app(), "/virtual-office/kochi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Virtual Office in Kochi"));
    assert!(body.contains("<option value=\"Kochi\" selected>Kochi</option>"));
    assert!(body.contains("https://coworkkerala.com/virtual-office/kochi"));
}

#[tokio::test]
async fn test_virtual_office_action_reencodes_city() {
    let (status, body) = get(offline_app(), "/virtual-office/a%3Fb").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("action=\"/virtual-office/a%3Fb\""));
}

#[tokio::test]
async fn test_virtual_office_city_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/leads"))
        .and(body_partial_json(json!({
            "spaceType": "GST Registration",
            "location": "Kochi",
            "enquiredFor": "Virtual Office Page"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        app(config(&server.uri())),
        "/virtual-office/kochi",
        "name=Ravi&email=ravi%40example.com&phone=9876543210&service_type=GST+Registration&location=Kochi",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you! We will contact you soon."));
    // Reset returns to the route city
    assert!(body.contains("<option value=\"Kochi\" selected>Kochi</option>"));
}

#[tokio::test]
async fn test_directory_ignores_bad_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(featured_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app(config(&server.uri())), "/coworking-space?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Collaborative Hub"));

    let requests = server.received_requests().await.unwrap();
    let spaces = requests.iter().find(|r| r.url.path() == "/api/v1/spaces").unwrap();
    assert!(spaces.url.query().is_none());
}

#[tokio::test]
async fn test_city_directory_filters_by_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .and(query_param("city", "Kochi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(featured_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app(config(&server.uri())), "/coworking-space/kochi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Coworking Spaces in Kochi"));
    assert!(body.contains("Collaborative Hub"));
}

#[tokio::test]
async fn test_city_directory_uses_backend_city_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "_id": "c9", "name": "North Paravur" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .and(query_param("city", "North Paravur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(featured_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app(config(&server.uri())), "/coworking-space/north%20paravur").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Coworking Spaces in North Paravur"));
    assert!(body.contains("href=\"/coworking-space/north%20paravur\""));
}

#[tokio::test]
async fn test_city_directory_pager_reencodes_city() {
    let server = MockServer::start().await;
    let mut spaces = featured_body();
    spaces["pagination"] = json!({ "page": 1, "limit": 1, "total": 2, "totalPages": 2 });
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spaces))
        .mount(&server)
        .await;

    let (_, body) = get(app(config(&server.uri())), "/coworking-space/a%3Fb").await;
    assert!(body.contains("href=\"/coworking-space/a%3Fb?page"));
}

#[tokio::test]
async fn test_placeholder_image_is_served() {
    let config = AppConfig {
        app: AppSettings {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").to_string(),
            ..AppSettings::default()
        },
        ..config("http://127.0.0.1:9/")
    };

    let response = app(config)
        .oneshot(Request::builder().uri("/images/placeholder.png").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn test_detail_unavailable_renders_empty_state() {
    let (status, body) = get(offline_app(), "/coworking-space/details/missing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Workspace unavailable"));
    assert!(body.contains("https://coworkkerala.com/coworking-space/details/missing"));
}

#[tokio::test]
async fn test_detail_renders_workspace() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/collab-hub-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "collab-hub-1",
                "spaceName": "Collaborative Hub",
                "spaceType": "Sharing Workspace",
                "city": { "_id": "city-1", "name": "Kochi" },
                "amenities": ["Wifi", "Parking"],
                "location": { "address": "MG Road, Kochi", "pincode": "682001" }
            }
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app(config(&server.uri())), "/coworking-space/details/collab-hub-1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Collaborative Hub | Kochi | CoWork Kerala</title>"));
    assert!(body.contains("<li>Parking</li>"));
    assert!(body.contains("MG Road, Kochi - 682001"));
    assert!(body.contains("Contact for Price"));
}

#[tokio::test]
async fn test_mock_featured_endpoint() {
    let (status, body) = get(offline_app(), "/api/v1/spaces/featured").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
    assert_eq!(json["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn test_mock_lead_sink() {
    let response = offline_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/leads")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Asha",
                        "email": "asha@example.com",
                        "phone": "9876543210",
                        "spaceType": "Looking for Space",
                        "enquiredFor": "Contact Page"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_sitemap_with_backend_down_lists_static_pages() {
    let response = offline_app()
        .oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let xml = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(xml.matches("<url>").count(), 6);
    assert!(xml.contains("<loc>https://coworkkerala.com/virtual-office</loc>"));
}

#[tokio::test]
async fn test_sitemap_includes_workspaces_and_cities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(featured_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(locations_body()))
        .mount(&server)
        .await;

    let (_, xml) = get(app(config(&server.uri())), "/sitemap.xml").await;
    assert_eq!(xml.matches("<url>").count(), 8);
    assert!(xml.contains("<loc>https://coworkkerala.com/coworking-space/details/collab-hub-1</loc>"));
    assert!(xml.contains("<loc>https://coworkkerala.com/coworking-space/kochi</loc>"));
}
