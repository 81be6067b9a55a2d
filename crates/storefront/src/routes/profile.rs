//! Profile route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{CurrentTheme, OptionalAuth};
use crate::routes::Shell;

/// Profile display data.
pub struct ProfileView {
    pub display_name: String,
    pub email: String,
    pub logged_in: bool,
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub shell: Shell,
    pub profile: ProfileView,
}

/// Display the profile page.
///
/// Falls back to the demo seller identity when nobody is logged in.
#[instrument(skip(session))]
pub async fn show(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    OptionalAuth(user): OptionalAuth,
) -> impl IntoResponse {
    let profile = user.as_ref().map_or_else(
        || ProfileView {
            display_name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            logged_in: false,
        },
        |user| ProfileView {
            display_name: user.username.clone(),
            email: user.email.clone(),
            logged_in: true,
        },
    );

    ProfileTemplate {
        shell: Shell::build(&session, theme, "/profile", false).await,
        profile,
    }
}
