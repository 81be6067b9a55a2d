//! Session-related types.
//!
//! Types and keys for per-visitor session state. The session is the
//! server-side stand-in for the original client's local storage: it carries
//! the auth token and user, the cart, the alerts working copies, and the
//! last-visited alerts sub-route.

use serde::{Deserialize, Serialize};

/// Session-stored user identity, as returned by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's ID at the auth service.
    pub id: u64,
    /// Display/login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the user has admin rights (unused here, but persisted).
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

/// Session keys.
pub mod keys {
    /// Auth token from the auth API.
    pub const TOKEN: &str = "token";

    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "user";

    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Last sub-route visited under `/alerts` (sub-route memory).
    pub const LAST_ALERTS_ROUTE: &str = "last_alerts_route";

    /// Working copy of the alerts-hub activity feed.
    pub const ACTIVITY_FEED: &str = "activity_feed";

    /// Working copy of the notifications list.
    pub const NOTIFICATIONS: &str = "notifications";

    /// Working copy of the wishlist.
    pub const WISHLIST: &str = "wishlist";

    /// Working copy of a chat thread's messages.
    #[must_use]
    pub fn chat_messages(thread_id: u64) -> String {
        format!("chat_messages:{thread_id}")
    }
}
