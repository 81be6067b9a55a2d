//! Alerts-hub record types and their session working copies.
//!
//! These records are seeded from [`crate::seed`] on first visit and then
//! mutated only by local actions (mark-read, delete, clear, send-message).
//! Nothing persists beyond the session.

use chrono::NaiveDate;
use essence_core::{NotificationId, NotificationKind, OrderId, OrderStatus, Price, ThreadId,
    WishlistItemId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_sessions::Session;

/// A notification row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative display time ("2 minutes ago"); seed data, not a clock.
    pub time: String,
    pub read: bool,
}

/// A seeded order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub date: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<String>,
    pub payment_method: String,
    pub shipping_address: String,
}

/// A wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub rating: f64,
    pub in_stock: bool,
    pub category: String,
}

/// A chat conversation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: ThreadId,
    pub name: String,
    pub preview: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
    pub avatar: String,
}

/// One message inside a chat thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// True when the seller (this user) sent it.
    pub outgoing: bool,
    pub body: String,
    pub time: String,
}

/// Referral program stats for the referral page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralStats {
    pub total_referrals: u32,
    pub rewards_earned: Price,
    pub code: String,
}

/// Load a session working copy, seeding it on first visit.
///
/// This is the fetch-if-empty guard: an already-initialized copy
/// short-circuits, a missing one is seeded and stored. A stored empty
/// collection is a deliberate state (clear-all, delete-all) and is NOT
/// reseeded. Session read/write failures degrade to the seed data with a
/// warning.
pub async fn load_or_seed<T, F>(session: &Session, key: &str, seed: F) -> Vec<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match session.get::<Vec<T>>(key).await {
        Ok(Some(items)) => items,
        Ok(None) => {
            let items = seed();
            store(session, key, &items).await;
            items
        }
        Err(e) => {
            tracing::warn!(key, "Failed to read session state: {e}");
            seed()
        }
    }
}

/// Write a session working copy back, logging on failure.
pub async fn store<T: Serialize>(session: &Session, key: &str, items: &T) {
    if let Err(e) = session.insert(key, items).await {
        tracing::warn!(key, "Failed to write session state: {e}");
    }
}
