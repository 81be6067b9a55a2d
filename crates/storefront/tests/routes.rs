//! Router-level tests for route/tab derivation, session-backed state, and
//! degrade-to-empty behavior.
//!
//! The router is exercised in-process via `tower::ServiceExt::oneshot`; the
//! catalog and auth base URLs point at a port nothing listens on, so every
//! upstream call fails fast and the handlers' degrade paths render.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;

use essence_storefront::config::{CatalogApiConfig, EssenceConfig};
use essence_storefront::middleware::create_session_layer;
use essence_storefront::routes;
use essence_storefront::state::AppState;

fn test_config() -> EssenceConfig {
    EssenceConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("k9J2mQ8xR4vL7nW3pT6yB1cF5hD0gZsA"),
        catalog: CatalogApiConfig {
            // Nothing listens on the discard port: upstream calls fail fast
            base_url: "http://127.0.0.1:9".to_string(),
        },
        auth_api_base_url: "http://127.0.0.1:9".to_string(),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build the app the way `main` does, minus tracing and Sentry.
fn app() -> Router {
    let config = test_config();
    let session_layer = create_session_layer(&config);

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(AppState::new(config))
}

async fn get(app: &Router, path: &str) -> Response {
    request(app, path, None).await
}

async fn request(app: &Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, path: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// The session cookie pair from a response, e.g. `essence_session=...`.
fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .expect("response should set a session cookie")
        .to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Alerts hub: tab derivation and sub-route memory
// ============================================================================

#[tokio::test]
async fn alerts_orders_renders_seeded_orders() {
    let app = app();
    let response = get(&app, "/alerts/orders").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("#ORD001"));
    assert!(body.contains("Back to Alerts"));
}

#[tokio::test]
async fn alerts_tab_link_restores_last_sub_route() {
    let app = app();

    // Visit a sub-route; the session records it
    let response = get(&app, "/alerts/orders").await;
    let cookie = session_cookie(&response);

    // On a different page, the Alerts tab points back at the sub-route
    let response = request(&app, "/settings", Some(&cookie)).await;
    let body = body_text(response).await;
    assert!(body.contains("href=\"/alerts/orders\""));
}

#[tokio::test]
async fn alerts_tab_defaults_to_hub_without_memory() {
    let app = app();
    let response = get(&app, "/settings").await;
    let body = body_text(response).await;
    assert!(body.contains("href=\"/alerts\""));
    assert!(!body.contains("href=\"/alerts/orders\""));
}

#[tokio::test]
async fn back_to_bare_alerts_shows_all_tab() {
    let app = app();

    let response = get(&app, "/alerts/orders").await;
    let cookie = session_cookie(&response);

    // Landing on the bare hub path always renders the All tab: the active
    // indicator is derived from the path, never from the memory
    let response = request(&app, "/alerts", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Recent Activities"));
    assert!(!body.contains("is-active"));
}

#[tokio::test]
async fn unknown_alerts_sub_route_falls_back_to_hub() {
    let app = app();
    let response = get(&app, "/alerts/bogus").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Recent Activities"));
}

#[tokio::test]
async fn cleared_activity_feed_stays_empty() {
    let app = app();

    let response = post_form(&app, "/alerts/clear", "", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let response = request(&app, "/alerts", Some(&cookie)).await;
    let body = body_text(response).await;
    assert!(body.contains("Nothing new right now."));
}

#[tokio::test]
async fn notification_detail_marks_as_read() {
    let app = app();

    let response = get(&app, "/alerts/notifications").await;
    let cookie = session_cookie(&response);
    let body = body_text(response).await;
    // Two of the three seeded notifications start unread
    assert_eq!(body.matches("Mark read").count(), 2);

    let response = request(&app, "/alerts/notifications/1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = request(&app, "/alerts/notifications", Some(&cookie)).await;
    let body = body_text(response).await;
    assert_eq!(body.matches("Mark read").count(), 1);
}

#[tokio::test]
async fn missing_chat_thread_is_not_found() {
    let app = app();
    let response = get(&app, "/alerts/chat/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Theme cookie
// ============================================================================

#[tokio::test]
async fn theme_choice_persists_via_cookie() {
    let app = app();

    let response = post_form(&app, "/settings/theme", "theme=dark", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("theme=dark"));

    let response = request(&app, "/settings", Some("theme=dark")).await;
    let body = body_text(response).await;
    assert!(body.contains("bg-gray-900"));
}

#[tokio::test]
async fn unknown_theme_reads_as_light() {
    let app = app();
    let response = request(&app, "/settings", Some("theme=solarized")).await;
    let body = body_text(response).await;
    assert!(body.contains("bg-gray-50"));
}

// ============================================================================
// Degrade-to-empty when the catalog is down
// ============================================================================

#[tokio::test]
async fn home_renders_banner_without_catalog() {
    let app = app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Luxury Fragrances"));
}

#[tokio::test]
async fn product_listing_renders_without_catalog() {
    let app = app();
    let response = get(&app, "/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Discover Our Collection"));
}

#[tokio::test]
async fn category_page_renders_empty_state_without_catalog() {
    let app = app();
    let response = get(&app, "/categories/floral-fragrances").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Floral Fragrances"));
    assert!(body.contains("No products found matching your criteria."));
}

#[tokio::test]
async fn cart_seed_failure_renders_empty_cart() {
    let app = app();
    let response = get(&app, "/cart").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Your cart is empty"));
}

// ============================================================================
// Auth pages
// ============================================================================

#[tokio::test]
async fn login_page_renders() {
    let app = app();
    let response = get(&app, "/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Welcome Back"));
}

#[tokio::test]
async fn login_failure_shows_inline_message() {
    let app = app();
    let response = post_form(&app, "/login", "login=amy&password=pw", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred during login"));
}

#[tokio::test]
async fn signup_wizard_advances_and_carries_values() {
    let app = app();
    let response = post_form(
        &app,
        "/signup",
        "step=1&name=Amy+Pond&username=amy&email=amy%40example.com&password=pw",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Step 2 of 3"));
    assert!(body.contains("name=\"phone_number\""));
    // Step-1 values ride along as hidden fields
    assert!(body.contains("value=\"Amy Pond\""));
}

#[tokio::test]
async fn signup_rejects_malformed_email_on_final_step() {
    let app = app();
    let response = post_form(
        &app,
        "/signup",
        "step=3&name=Amy&username=amy&email=nope&password=pw",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Step 3 of 3"));
    assert!(body.contains("local@domain"));
}
