//! Navigation state derived from the request path.
//!
//! Active indicators are never stored: every render recomputes them from
//! the current path (plus the `from=cart` query flag), so the indicator can
//! never drift from the URL across back/forward navigation or rapid clicks.
//! The only remembered piece is the last path visited under `/alerts`
//! (sub-route memory), which feeds the Alerts tab link so returning to the
//! tab restores the last sub-route instead of resetting to the bare hub.

/// The active tab inside the alerts hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertsTab {
    #[default]
    All,
    Chat,
    Orders,
    Notifications,
    Wishlist,
}

impl AlertsTab {
    /// Map a request path to its alerts tab.
    ///
    /// Total: paths outside `/alerts` and unknown sub-segments map to
    /// [`AlertsTab::All`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let Some(rest) = path.strip_prefix("/alerts") else {
            return Self::All;
        };

        let segment = rest
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();

        match segment {
            "chat" => Self::Chat,
            "orders" => Self::Orders,
            "notifications" => Self::Notifications,
            "wishlist" => Self::Wishlist,
            _ => Self::All,
        }
    }

    /// Identifier used by templates for the active state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Chat => "chat",
            Self::Orders => "orders",
            Self::Notifications => "notifications",
            Self::Wishlist => "wishlist",
        }
    }

    /// Canonical path of this tab.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::All => "/alerts",
            Self::Chat => "/alerts/chat",
            Self::Orders => "/alerts/orders",
            Self::Notifications => "/alerts/notifications",
            Self::Wishlist => "/alerts/wishlist",
        }
    }
}

/// The bottom-navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomTab {
    Home,
    Cart,
    Alerts,
    Profile,
}

impl BottomTab {
    /// Which bottom tab the current location highlights, if any.
    ///
    /// Product routes highlight Home unless the visitor arrived from the
    /// cart (`?from=cart`), in which case Cart stays highlighted.
    #[must_use]
    pub fn active(path: &str, from_cart: bool) -> Option<Self> {
        if path == "/cart" || (is_product_route(path) && from_cart) {
            return Some(Self::Cart);
        }
        if is_alerts_path(path) {
            return Some(Self::Alerts);
        }
        if path == "/profile" {
            return Some(Self::Profile);
        }
        if path == "/" || is_product_route(path) {
            return Some(Self::Home);
        }
        None
    }

    /// Identifier used by templates for the active state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cart => "cart",
            Self::Alerts => "alerts",
            Self::Profile => "profile",
        }
    }
}

/// Whether a path belongs to the alerts hub (and should update the
/// sub-route memory).
#[must_use]
pub fn is_alerts_path(path: &str) -> bool {
    path == "/alerts" || path.starts_with("/alerts/")
}

fn is_product_route(path: &str) -> bool {
    path == "/products" || path.starts_with("/products/")
}

/// The href the Alerts bottom tab should carry, restoring the last
/// sub-route visited when there is one.
#[must_use]
pub fn alerts_tab_href(last_visited: Option<&str>) -> String {
    last_visited
        .filter(|path| is_alerts_path(path))
        .unwrap_or("/alerts")
        .to_string()
}
