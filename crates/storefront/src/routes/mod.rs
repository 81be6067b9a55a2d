//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page (banner, search bar, sections)
//! GET  /health                  - Health check
//!
//! # Products & Categories
//! GET  /products                - Product listing (three-source merge)
//! GET  /products/{id}           - Product detail (?from=cart keeps the cart tab lit)
//! GET  /categories              - Curated category grid
//! GET  /categories/{slug}       - Category products (q, min_price, max_price, sort)
//!
//! # Cart
//! GET  /cart                    - Cart page (seeds an empty cart from the API)
//! POST /cart/add                - Add a product
//! POST /cart/update             - Increment/decrement a line (floors at 1)
//! POST /cart/remove             - Remove a line
//!
//! # Alerts hub
//! GET  /alerts                  - Hub (tab grid + activity feed)
//! POST /alerts/clear            - Clear the activity feed
//! GET  /alerts/chat             - Conversation list
//! GET  /alerts/chat/{id}        - Conversation view
//! POST /alerts/chat/{id}/send   - Append a message
//! GET  /alerts/orders           - Seeded orders (status filter, sort)
//! GET  /alerts/notifications    - Notifications (kind filter, search)
//! GET  /alerts/notifications/{id}        - Detail (marks as read)
//! POST /alerts/notifications/{id}/read   - Mark as read
//! POST /alerts/notifications/{id}/delete - Delete
//! GET  /alerts/wishlist         - Seeded wishlist (search, stock filter)
//!
//! # Auth
//! GET  /login                   - Login page
//! POST /login                   - Login via the auth API
//! GET  /signup                  - Three-step signup wizard
//! POST /signup                  - Advance a step / register via the auth API
//! POST /logout                  - Clear the session user
//!
//! # Misc
//! GET  /settings                - Settings (theme picker)
//! POST /settings/theme          - Persist the theme cookie
//! GET  /profile                 - Profile page
//! GET  /referral                - Referral stats and share channels
//! ```

pub mod alerts;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod chat;
pub mod home;
pub mod products;
pub mod profile;
pub mod referral;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::models::{Cart, CurrentUser, Theme, ThemeTokens, session_keys};
use crate::nav::{self, BottomTab};
use crate::state::AppState;

/// Layout data shared by every page template: theme tokens, bottom-nav
/// highlight, the Alerts tab link (sub-route memory), cart badge, and the
/// logged-in user.
pub struct Shell {
    pub theme: Theme,
    pub tokens: ThemeTokens,
    /// Bottom-nav tab id to highlight, or empty.
    pub active: &'static str,
    /// Where the Alerts tab points (last sub-route visited, if any).
    pub alerts_href: String,
    pub cart_count: u32,
    pub user: Option<CurrentUser>,
}

impl Shell {
    /// Assemble the layout data for a request.
    ///
    /// Also records the sub-route memory: any path inside the alerts hub
    /// becomes the remembered target of the Alerts tab. The active
    /// indicator itself is derived from `path` alone on every call.
    pub async fn build(session: &Session, theme: Theme, path: &str, from_cart: bool) -> Self {
        if nav::is_alerts_path(path)
            && let Err(e) = session.insert(session_keys::LAST_ALERTS_ROUTE, path).await
        {
            tracing::warn!("Failed to record alerts sub-route: {e}");
        }

        let last_visited: Option<String> = session
            .get(session_keys::LAST_ALERTS_ROUTE)
            .await
            .ok()
            .flatten();

        let cart: Cart = session
            .get(session_keys::CART)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let user: Option<CurrentUser> = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();

        Self {
            theme,
            tokens: theme.tokens(),
            active: BottomTab::active(path, from_cart).map_or("", BottomTab::as_str),
            alerts_href: nav::alerts_tab_href(last_visited.as_deref()),
            cart_count: cart.item_count(),
            user,
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{slug}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the alerts-hub routes router.
pub fn alerts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(alerts::index))
        .route("/clear", post(alerts::clear))
        .route("/chat", get(chat::index))
        .route("/chat/{id}", get(chat::show))
        .route("/chat/{id}/send", post(chat::send))
        .route("/orders", get(alerts::orders))
        .route("/notifications", get(alerts::notifications))
        .route("/notifications/{id}", get(alerts::notification_detail))
        .route("/notifications/{id}/read", post(alerts::mark_read))
        .route("/notifications/{id}/delete", post(alerts::delete))
        .route("/wishlist", get(alerts::wishlist))
        // Unknown sub-routes land on the hub rather than a 404
        .fallback(get(alerts::index))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Category routes
        .nest("/categories", category_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Alerts hub
        .nest("/alerts", alerts_routes())
        // Auth routes (top-level paths, not nested)
        .merge(auth_routes())
        // Settings, profile, referral
        .route("/settings", get(settings::show))
        .route("/settings/theme", post(settings::set_theme))
        .route("/profile", get(profile::show))
        .route("/referral", get(referral::show))
}
