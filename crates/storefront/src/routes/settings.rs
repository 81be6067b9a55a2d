//! Settings route handlers: the theme picker.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{CurrentTheme, theme_cookie};
use crate::models::Theme;
use crate::routes::Shell;

/// Theme selection form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub shell: Shell,
    pub themes: [Theme; 3],
}

/// Display the settings page.
#[instrument(skip(session))]
pub async fn show(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    SettingsTemplate {
        shell: Shell::build(&session, theme, "/settings", false).await,
        themes: [Theme::Light, Theme::Dark, Theme::EyeCare],
    }
}

/// Persist a theme choice in the `theme` cookie.
///
/// Unknown names fall back to the light theme rather than erroring.
#[instrument]
pub async fn set_theme(Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let theme = Theme::from_name(&form.theme);

    (
        AppendHeaders([(SET_COOKIE, theme_cookie(theme))]),
        Redirect::to("/settings"),
    )
}
