//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{Product, ProductQuery, SortKey, filter_and_sort, query::normalize_category};
use crate::filters;
use crate::middleware::CurrentTheme;
use crate::routes::Shell;
use crate::seed::{self, Category};
use crate::state::AppState;

/// Filter/sort query parameters for a category page.
#[derive(Debug, Deserialize, Default)]
pub struct CategoryPageQuery {
    pub q: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<String>,
}

/// Header data for a category page.
pub struct CategoryHeader {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl CategoryHeader {
    fn for_slug(slug: &str) -> Self {
        seed::category_by_slug(slug).map_or_else(
            || Self {
                name: normalize_category(slug),
                description: String::new(),
                image: String::new(),
            },
            |category| Self {
                name: category.name.to_string(),
                description: category.description.to_string(),
                image: category.image.to_string(),
            },
        )
    }
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub shell: Shell,
    pub categories: Vec<Category>,
}

/// Category products page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub shell: Shell,
    pub slug: String,
    pub header: CategoryHeader,
    pub products: Vec<Product>,
    pub q: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: &'static str,
}

/// Display the curated category grid.
#[instrument(skip(session))]
pub async fn index(session: Session, CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
    CategoriesIndexTemplate {
        shell: Shell::build(&session, theme, "/categories", false).await,
        categories: seed::categories(),
    }
}

/// Display a category's products through the filter/sort pipeline.
///
/// The query descriptor lives entirely in the URL, so the rendered view is
/// a pure function of the request.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Path(slug): Path<String>,
    Query(query): Query<CategoryPageQuery>,
) -> impl IntoResponse {
    let all = state.catalog().products().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products for category page: {e}");
        Vec::new()
    });

    let sort = SortKey::parse(query.sort.as_deref().unwrap_or_default());
    let descriptor = ProductQuery {
        text: query.q.clone().unwrap_or_default(),
        min_price: query.min_price.map(essence_core::Price::new),
        max_price: query.max_price.map(essence_core::Price::new),
        category: Some(slug.clone()),
        sort,
    };
    let products = filter_and_sort(&all, &descriptor);

    let path = format!("/categories/{slug}");

    CategoryShowTemplate {
        shell: Shell::build(&session, theme, &path, false).await,
        header: CategoryHeader::for_slug(&slug),
        slug,
        products,
        q: query.q.unwrap_or_default(),
        min_price: query.min_price.map(|p| p.to_string()).unwrap_or_default(),
        max_price: query.max_price.map(|p| p.to_string()).unwrap_or_default(),
        sort: sort.as_str(),
    }
}
