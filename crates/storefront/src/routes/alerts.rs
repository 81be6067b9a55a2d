//! Alerts hub route handlers: the hub page with its activity feed, plus
//! the orders, notifications, and wishlist sections.
//!
//! The active tab is derived from the request path on every render
//! ([`AlertsTab::from_path`]); the only stored navigation state is the
//! sub-route memory that [`super::Shell::build`] records.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Redirect},
};
use essence_core::{NotificationId, NotificationKind, OrderStatus};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentTheme;
use crate::models::alerts::{load_or_seed, store};
use crate::models::{Notification, Order, WishlistItem, session_keys};
use crate::nav::AlertsTab;
use crate::routes::Shell;
use crate::seed;

/// A quick-access card on the hub page.
pub struct TabCard {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub count: u32,
}

fn tab_cards() -> Vec<TabCard> {
    vec![
        TabCard {
            id: "chat",
            label: "Chat",
            description: "View messages",
            href: AlertsTab::Chat.href(),
            count: 3,
        },
        TabCard {
            id: "orders",
            label: "Orders",
            description: "Track orders",
            href: AlertsTab::Orders.href(),
            count: 2,
        },
        TabCard {
            id: "notifications",
            label: "Notifications",
            description: "Updates",
            href: AlertsTab::Notifications.href(),
            count: 5,
        },
        TabCard {
            id: "wishlist",
            label: "Wishlist",
            description: "Saved items",
            href: AlertsTab::Wishlist.href(),
            count: 4,
        },
    ]
}

// =============================================================================
// Hub
// =============================================================================

/// Hub page template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/index.html")]
pub struct AlertsIndexTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub cards: Vec<TabCard>,
    pub feed: Vec<Notification>,
}

/// Display the alerts hub: quick-access cards and the activity feed.
#[instrument(skip(session))]
pub async fn index(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    let feed = load_or_seed(&session, session_keys::ACTIVITY_FEED, seed::activity_feed).await;

    AlertsIndexTemplate {
        shell: Shell::build(&session, theme, "/alerts", false).await,
        tab: AlertsTab::from_path("/alerts").as_str(),
        cards: tab_cards(),
        feed,
    }
}

/// Clear the activity feed (local action, session-scoped).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Redirect {
    store(&session, session_keys::ACTIVITY_FEED, &Vec::<Notification>::new()).await;
    Redirect::to("/alerts")
}

// =============================================================================
// Orders
// =============================================================================

/// Filter/sort query parameters for the orders page.
#[derive(Debug, Deserialize, Default)]
pub struct OrdersQuery {
    pub status: Option<String>,
    pub sort: Option<String>,
}

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/orders.html")]
pub struct OrdersTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub orders: Vec<Order>,
    pub status: String,
    pub sort: String,
}

/// Sort an order list by the requested key (newest/highest first).
fn sort_orders(orders: &mut [Order], key: &str) {
    match key {
        "total" => orders.sort_by(|a, b| b.total.cmp(&a.total)),
        "status" => orders.sort_by(|a, b| a.status.label().cmp(b.status.label())),
        _ => orders.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Display the seeded order history with status filter and sort.
#[instrument(skip(session))]
pub async fn orders(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Query(query): Query<OrdersQuery>,
) -> impl IntoResponse {
    let status = query.status.unwrap_or_default();
    let sort = query.sort.unwrap_or_else(|| "date".to_string());

    let mut orders = seed::orders();
    if let Some(wanted) = OrderStatus::from_filter(&status) {
        orders.retain(|order| order.status == wanted);
    }
    sort_orders(&mut orders, &sort);

    OrdersTemplate {
        shell: Shell::build(&session, theme, "/alerts/orders", false).await,
        tab: AlertsTab::from_path("/alerts/orders").as_str(),
        orders,
        status,
        sort,
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Filter/search query parameters for the notifications page.
#[derive(Debug, Deserialize, Default)]
pub struct NotificationsQuery {
    pub filter: Option<String>,
    pub q: Option<String>,
}

/// Notifications page template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/notifications.html")]
pub struct NotificationsTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub notifications: Vec<Notification>,
    pub filter: String,
    pub q: String,
}

/// Notification detail template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/notification_detail.html")]
pub struct NotificationDetailTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub notification: Notification,
}

/// Display the notifications list with kind filter and text search.
#[instrument(skip(session))]
pub async fn notifications(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Query(query): Query<NotificationsQuery>,
) -> impl IntoResponse {
    let filter = query.filter.unwrap_or_default();
    let q = query.q.unwrap_or_default();
    let needle = q.to_lowercase();

    let mut notifications =
        load_or_seed(&session, session_keys::NOTIFICATIONS, seed::notifications).await;

    if let Some(kind) = NotificationKind::from_filter(&filter) {
        notifications.retain(|n| n.kind == kind);
    }
    if !needle.is_empty() {
        notifications.retain(|n| {
            n.title.to_lowercase().contains(&needle) || n.message.to_lowercase().contains(&needle)
        });
    }

    NotificationsTemplate {
        shell: Shell::build(&session, theme, "/alerts/notifications", false).await,
        tab: AlertsTab::from_path("/alerts/notifications").as_str(),
        notifications,
        filter,
        q,
    }
}

/// Display one notification; viewing marks it as read.
#[instrument(skip(session))]
pub async fn notification_detail(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Path(id): Path<u64>,
) -> crate::error::Result<impl IntoResponse> {
    let id = NotificationId::new(id);
    let mut notifications =
        load_or_seed(&session, session_keys::NOTIFICATIONS, seed::notifications).await;

    let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
        return Err(crate::error::AppError::NotFound(format!(
            "notification {id}"
        )));
    };

    notification.read = true;
    let notification = notification.clone();
    store(&session, session_keys::NOTIFICATIONS, &notifications).await;

    let path = format!("/alerts/notifications/{id}");
    Ok(NotificationDetailTemplate {
        shell: Shell::build(&session, theme, &path, false).await,
        tab: AlertsTab::from_path(&path).as_str(),
        notification,
    })
}

/// Mark a notification as read.
#[instrument(skip(session))]
pub async fn mark_read(session: Session, Path(id): Path<u64>) -> Redirect {
    let id = NotificationId::new(id);
    let mut notifications =
        load_or_seed(&session, session_keys::NOTIFICATIONS, seed::notifications).await;

    if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
        notification.read = true;
        store(&session, session_keys::NOTIFICATIONS, &notifications).await;
    }

    Redirect::to("/alerts/notifications")
}

/// Delete a notification (local action, session-scoped).
#[instrument(skip(session))]
pub async fn delete(session: Session, Path(id): Path<u64>) -> Redirect {
    let id = NotificationId::new(id);
    let mut notifications =
        load_or_seed(&session, session_keys::NOTIFICATIONS, seed::notifications).await;

    notifications.retain(|n| n.id != id);
    store(&session, session_keys::NOTIFICATIONS, &notifications).await;

    Redirect::to("/alerts/notifications")
}

// =============================================================================
// Wishlist
// =============================================================================

/// Filter/search query parameters for the wishlist page.
#[derive(Debug, Deserialize, Default)]
pub struct WishlistQuery {
    pub q: Option<String>,
    /// "in" or "out"; anything else shows all.
    pub stock: Option<String>,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/wishlist.html")]
pub struct WishlistTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub items: Vec<WishlistItem>,
    pub q: String,
    pub stock: String,
}

/// Display the seeded wishlist with search and stock filter.
#[instrument(skip(session))]
pub async fn wishlist(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Query(query): Query<WishlistQuery>,
) -> impl IntoResponse {
    let q = query.q.unwrap_or_default();
    let stock = query.stock.unwrap_or_default();
    let needle = q.to_lowercase();

    let mut items = load_or_seed(&session, session_keys::WISHLIST, seed::wishlist).await;

    if !needle.is_empty() {
        items.retain(|item| item.name.to_lowercase().contains(&needle));
    }
    match stock.as_str() {
        "in" => items.retain(|item| item.in_stock),
        "out" => items.retain(|item| !item.in_stock),
        _ => {}
    }

    WishlistTemplate {
        shell: Shell::build(&session, theme, "/alerts/wishlist", false).await,
        tab: AlertsTab::from_path("/alerts/wishlist").as_str(),
        items,
        q,
        stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_orders_by_total_descending() {
        let mut orders = seed::orders();
        sort_orders(&mut orders, "total");
        let totals: Vec<_> = orders.iter().map(|o| o.total).collect();
        let mut sorted = totals.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(totals, sorted);
    }

    #[test]
    fn test_sort_orders_default_is_newest_first() {
        let mut orders = seed::orders();
        sort_orders(&mut orders, "date");
        for pair in orders.windows(2) {
            if let [a, b] = pair {
                assert!(a.date >= b.date);
            }
        }
    }
}
