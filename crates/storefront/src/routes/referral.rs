//! Referral page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentTheme;
use crate::models::ReferralStats;
use crate::routes::Shell;
use crate::seed;

/// Referral page template.
#[derive(Template, WebTemplate)]
#[template(path = "referral.html")]
pub struct ReferralTemplate {
    pub shell: Shell,
    pub stats: ReferralStats,
    pub channels: &'static [&'static str],
}

/// Display referral stats, the share channels, and the referral code.
#[instrument(skip(session))]
pub async fn show(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    ReferralTemplate {
        shell: Shell::build(&session, theme, "/referral", false).await,
        stats: seed::referral_stats(),
        channels: seed::referral_channels(),
    }
}
