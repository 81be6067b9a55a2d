//! Domain models for per-visitor state.

pub mod alerts;
pub mod cart;
pub mod session;
pub mod theme;

pub use alerts::{ChatMessage, ChatThread, Notification, Order, ReferralStats, WishlistItem};
pub use cart::{Cart, CartLine};
pub use session::{CurrentUser, keys as session_keys};
pub use theme::{Theme, ThemeTokens};
