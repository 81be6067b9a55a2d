//! Authentication extractor and session helpers.
//!
//! Every page is public; handlers that personalize use [`OptionalAuth`] to
//! read the logged-in user, if any, from the session.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor that optionally gets the current user.
///
/// Does not reject the request when nobody is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
///     match user {
///         Some(u) => format!("Hello, {}!", u.username),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Store the auth token and user in the session after login.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn set_current_user(
    session: &Session,
    token: &str,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::TOKEN, token).await?;
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Clear the auth token and user from the session on logout.
pub async fn clear_current_user(session: &Session) {
    if let Err(e) = session.remove::<String>(session_keys::TOKEN).await {
        tracing::warn!("Failed to clear token from session: {e}");
    }
    if let Err(e) = session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await
    {
        tracing::warn!("Failed to clear user from session: {e}");
    }
}
