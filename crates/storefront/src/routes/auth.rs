//! Authentication route handlers.
//!
//! Login and the three-step signup wizard. Both delegate to the external
//! auth API; on success the token and user are stored in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use essence_core::Email;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{CurrentTheme, clear_current_user, set_current_user};
use crate::routes::Shell;
use crate::services::auth::{AuthError, RegisterPayload};
use crate::state::AppState;

/// Number of signup wizard steps.
const SIGNUP_STEPS: u8 = 3;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

/// Signup wizard state: the current step plus every field gathered so far.
/// Fields from earlier steps ride along as hidden inputs.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SignupForm {
    #[serde(default)]
    pub step: u8,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
}

/// Signup page query parameters.
#[derive(Debug, Deserialize, Default)]
pub struct SignupQuery {
    pub step: Option<u8>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub shell: Shell,
    pub error: Option<String>,
}

/// Signup wizard template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub shell: Shell,
    pub step: u8,
    pub values: SignupForm,
    pub error: Option<String>,
}

// =============================================================================
// Login
// =============================================================================

/// Display the login page.
#[instrument(skip(session))]
pub async fn login_page(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    LoginTemplate {
        shell: Shell::build(&session, theme, "/login", false).await,
        error: None,
    }
}

/// Handle the login form.
///
/// On success the token and user go into the session; on failure the page
/// re-renders with a single inline message.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth().login(&form.login, &form.password).await {
        Ok((token, user)) => {
            if let Err(e) = set_current_user(&session, &token, &user).await {
                tracing::error!("Failed to store login in session: {e}");
            }
            Redirect::to("/").into_response()
        }
        Err(AuthError::Rejected(message)) => LoginTemplate {
            shell: Shell::build(&session, theme, "/login", false).await,
            error: Some(message),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("Login request failed: {e}");
            LoginTemplate {
                shell: Shell::build(&session, theme, "/login", false).await,
                error: Some("An error occurred during login".to_string()),
            }
            .into_response()
        }
    }
}

/// Clear the session user and token.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Redirect {
    clear_current_user(&session).await;
    Redirect::to("/login")
}

// =============================================================================
// Signup
// =============================================================================

/// Display the signup wizard at a given step.
#[instrument(skip(session))]
pub async fn signup_page(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Query(query): Query<SignupQuery>,
) -> impl IntoResponse {
    SignupTemplate {
        shell: Shell::build(&session, theme, "/signup", false).await,
        step: query.step.unwrap_or(1).clamp(1, SIGNUP_STEPS),
        values: SignupForm::default(),
        error: None,
    }
}

/// Advance the wizard or, on the final step, register via the auth API.
#[instrument(skip(state, session, form))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Form(form): Form<SignupForm>,
) -> Response {
    let step = form.step.clamp(1, SIGNUP_STEPS);

    if step < SIGNUP_STEPS {
        return SignupTemplate {
            shell: Shell::build(&session, theme, "/signup", false).await,
            step: step + 1,
            values: form,
            error: None,
        }
        .into_response();
    }

    // Final step: validate and submit
    if let Err(e) = Email::parse(&form.email) {
        return SignupTemplate {
            shell: Shell::build(&session, theme, "/signup", false).await,
            step,
            values: form.clone(),
            error: Some(e.to_string()),
        }
        .into_response();
    }

    let payload = RegisterPayload {
        name: form.name.clone(),
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        phone_number: form.phone_number.clone(),
        country: form.country.clone(),
        city: form.city.clone(),
        address: form.address.clone(),
        gender: form.gender.clone(),
        date_of_birth: form.date_of_birth.clone(),
    };

    match state.auth().register_buyer(&payload).await {
        Ok(()) => Redirect::to("/login").into_response(),
        Err(AuthError::Rejected(message)) => SignupTemplate {
            shell: Shell::build(&session, theme, "/signup", false).await,
            step,
            values: form,
            error: Some(message),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("Registration request failed: {e}");
            SignupTemplate {
                shell: Shell::build(&session, theme, "/signup", false).await,
                step,
                values: form,
                error: Some("An error occurred during registration".to_string()),
            }
            .into_response()
        }
    }
}
