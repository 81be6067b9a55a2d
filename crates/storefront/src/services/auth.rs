//! Auth API client.
//!
//! Login and buyer registration are delegated to an external auth service;
//! on success the token and user land in the session. No refresh logic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::models::CurrentUser;

/// Errors from the auth API.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never got a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered `success: false` with a message.
    #[error("{0}")]
    Rejected(String),
}

/// Client for the auth API.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// `POST /api/auth/login` request body.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
}

/// `POST /api/auth/login` response body.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<CurrentUser>,
    #[serde(default)]
    message: Option<String>,
}

/// `POST /api/auth/register/buyer` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub gender: String,
    pub date_of_birth: String,
}

/// `POST /api/auth/register/buyer` response body.
#[derive(Debug, Deserialize)]
struct RegisterResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl AuthClient {
    /// Create a new auth API client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(AuthClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.to_string(),
            }),
        }
    }

    /// Log in with an email-or-username plus password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` with the service's message when the
    /// credentials are refused, or `AuthError::Http` when the call fails.
    #[instrument(skip(self, password), fields(login = %login))]
    pub async fn login(
        &self,
        login: &str,
        password: &str,
    ) -> Result<(String, CurrentUser), AuthError> {
        let url = format!("{}/api/auth/login", self.inner.base_url);
        let response: LoginResponse = self
            .inner
            .client
            .post(&url)
            .json(&LoginRequest { login, password })
            .send()
            .await?
            .json()
            .await?;

        match (response.success, response.token, response.user) {
            (true, Some(token), Some(user)) => Ok((token, user)),
            _ => Err(AuthError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Login failed".to_string()),
            )),
        }
    }

    /// Register a new buyer account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` with the service's message when the
    /// registration is refused, or `AuthError::Http` when the call fails.
    #[instrument(skip(self, payload), fields(username = %payload.username))]
    pub async fn register_buyer(&self, payload: &RegisterPayload) -> Result<(), AuthError> {
        let url = format!("{}/api/auth/register/buyer", self.inner.base_url);
        let response: RegisterResponse = self
            .inner
            .client
            .post(&url)
            .json(payload)
            .send()
            .await?
            .json()
            .await?;

        if response.success {
            Ok(())
        } else {
            Err(AuthError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ))
        }
    }
}
