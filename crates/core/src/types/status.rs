//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order status as shown in the orders view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Display label (matches the serialized form).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a filter value from a query string; unknown values mean "all".
    #[must_use]
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// The kind of a notification or activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Message,
    Order,
    Promotion,
    Wishlist,
}

impl NotificationKind {
    /// Display label (matches the serialized form).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Order => "order",
            Self::Promotion => "promotion",
            Self::Wishlist => "wishlist",
        }
    }

    /// Parse a filter value from a query string; unknown values mean "all".
    #[must_use]
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "message" => Some(Self::Message),
            "order" => Some(Self::Order),
            "promotion" => Some(Self::Promotion),
            "wishlist" => Some(Self::Wishlist),
            _ => None,
        }
    }
}
