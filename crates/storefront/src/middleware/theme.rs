//! Theme cookie extractor.
//!
//! The theme preference is persisted in a plain `theme` cookie, separate
//! from the session, and read on every request.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use tower_sessions::cookie::{Cookie, SameSite, time::Duration};

use crate::models::Theme;

/// Cookie name for the theme preference.
pub const THEME_COOKIE_NAME: &str = "theme";

/// How long the preference sticks (1 year).
const THEME_COOKIE_MAX_AGE: Duration = Duration::days(365);

/// Extractor for the visitor's theme.
///
/// Missing or unknown cookie values read as the light theme.
#[derive(Debug, Clone, Copy)]
pub struct CurrentTheme(pub Theme);

impl<S> FromRequestParts<S> for CurrentTheme
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let theme = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(std::result::Result::ok)
            .find(|cookie| cookie.name() == THEME_COOKIE_NAME)
            .map_or(Theme::default(), |cookie| Theme::from_name(cookie.value()));

        Ok(Self(theme))
    }
}

/// Build the `Set-Cookie` value that persists a theme choice.
#[must_use]
pub fn theme_cookie(theme: Theme) -> String {
    Cookie::build((THEME_COOKIE_NAME, theme.name()))
        .path("/")
        .max_age(THEME_COOKIE_MAX_AGE)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cookie_format() {
        let value = theme_cookie(Theme::EyeCare);
        assert!(value.starts_with("theme=eyeCare"));
        assert!(value.contains("Path=/"));
    }
}
