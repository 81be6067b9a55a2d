//! HTTP middleware and request extractors.
//!
//! # Stack (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//!
//! Plus per-handler extractors: [`CurrentTheme`] (theme cookie) and
//! [`OptionalAuth`] (session user).

pub mod auth;
pub mod session;
pub mod theme;

pub use auth::{OptionalAuth, clear_current_user, set_current_user};
pub use session::create_session_layer;
pub use theme::{CurrentTheme, theme_cookie};
