//! Chat route handlers (under `/alerts/chat`).
//!
//! Threads and their opening messages are seed data; sent messages append
//! to a per-thread session working copy and go nowhere else.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Path,
    response::{IntoResponse, Redirect},
};
use essence_core::ThreadId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CurrentTheme;
use crate::models::alerts::{load_or_seed, store};
use crate::models::{ChatMessage, ChatThread, session_keys};
use crate::nav::AlertsTab;
use crate::routes::Shell;
use crate::seed;

/// Send-message form data.
#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub body: String,
}

/// Conversation list template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/chat.html")]
pub struct ChatIndexTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub threads: Vec<ChatThread>,
}

/// Conversation view template.
#[derive(Template, WebTemplate)]
#[template(path = "alerts/chat_thread.html")]
pub struct ChatThreadTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub thread: ChatThread,
    pub messages: Vec<ChatMessage>,
}

/// Display the conversation list.
#[instrument(skip(session))]
pub async fn index(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    ChatIndexTemplate {
        shell: Shell::build(&session, theme, "/alerts/chat", false).await,
        tab: AlertsTab::from_path("/alerts/chat").as_str(),
        threads: seed::chat_threads(),
    }
}

/// Display one conversation.
#[instrument(skip(session))]
pub async fn show(
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let id = ThreadId::new(id);
    let thread = seed::chat_thread(id).ok_or_else(|| AppError::NotFound(format!("thread {id}")))?;

    let key = session_keys::chat_messages(id.as_u64());
    let messages = load_or_seed(&session, &key, || seed::chat_messages(id)).await;

    let path = format!("/alerts/chat/{id}");
    Ok(ChatThreadTemplate {
        shell: Shell::build(&session, theme, &path, false).await,
        tab: AlertsTab::from_path(&path).as_str(),
        thread,
        messages,
    })
}

/// Append a message to a conversation's working copy.
#[instrument(skip(session, form))]
pub async fn send(
    session: Session,
    Path(id): Path<u64>,
    Form(form): Form<SendForm>,
) -> Result<Redirect> {
    let id = ThreadId::new(id);
    if seed::chat_thread(id).is_none() {
        return Err(AppError::NotFound(format!("thread {id}")));
    }

    let body = form.body.trim();
    if !body.is_empty() {
        let key = session_keys::chat_messages(id.as_u64());
        let mut messages = load_or_seed(&session, &key, || seed::chat_messages(id)).await;
        messages.push(ChatMessage {
            outgoing: true,
            body: body.to_string(),
            time: chrono::Local::now().format("%H:%M").to_string(),
        });
        store(&session, &key, &messages).await;
    }

    Ok(Redirect::to(&format!("/alerts/chat/{id}")))
}
