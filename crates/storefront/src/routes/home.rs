//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentTheme;
use crate::routes::Shell;
use crate::routes::products::{Section, product_sections};
use crate::state::AppState;

// =============================================================================
// Banner Configuration (static content for the carousel)
// =============================================================================

/// A single slide in the home banner carousel.
#[derive(Clone)]
pub struct BannerSlide {
    pub image: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
}

/// Banner carousel configuration.
///
/// The rotation interval is declared here and bound to the page lifetime by
/// the template script (started on load, cleared on unload).
#[derive(Clone)]
pub struct BannerConfig {
    pub slides: Vec<BannerSlide>,
    pub autoplay_ms: u32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            slides: vec![
                BannerSlide {
                    image: "https://images.unsplash.com/photo-1615529328331-f8917597711f?q=80&w=2070"
                        .to_string(),
                    title: "Luxury Fragrances".to_string(),
                    description: "Up to 40% Off on Premium Perfumes".to_string(),
                    button_text: "Shop Now".to_string(),
                },
                BannerSlide {
                    image: "https://images.unsplash.com/photo-1541643600914-78b084683601?q=80&w=2070"
                        .to_string(),
                    title: "New Arrivals".to_string(),
                    description: "Discover Latest Collections".to_string(),
                    button_text: "Explore".to_string(),
                },
                BannerSlide {
                    image: "https://images.unsplash.com/photo-1592945403244-b3fbafd7f539?q=80&w=2070"
                        .to_string(),
                    title: "Exclusive Perfumes".to_string(),
                    description: "Limited Edition Fragrances".to_string(),
                    button_text: "View More".to_string(),
                },
            ],
            autoplay_ms: 5000,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub banner: BannerConfig,
    pub sections: Vec<Section>,
}

/// Display the home page: banner carousel, search bar, product sections.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
) -> impl IntoResponse {
    let products = state.catalog().products().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products for home page: {e}");
        Vec::new()
    });

    HomeTemplate {
        shell: Shell::build(&session, theme, "/", false).await,
        banner: BannerConfig::default(),
        sections: product_sections(&products),
    }
}
