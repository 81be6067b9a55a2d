//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use essence_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{Product, ProductQuery, filter_and_sort, query::slugify_category};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CurrentTheme;
use crate::routes::Shell;
use crate::state::AppState;

/// A titled rail of products on the listing and home pages.
pub struct Section {
    pub id: &'static str,
    pub name: &'static str,
    pub products: Vec<Product>,
}

/// Organize a product list into the three display rails.
#[must_use]
pub fn product_sections(products: &[Product]) -> Vec<Section> {
    vec![
        Section {
            id: "featured",
            name: "Featured Collection",
            products: products
                .iter()
                .filter(|p| p.rating.rate >= 4.0)
                .take(8)
                .cloned()
                .collect(),
        },
        Section {
            id: "trending",
            name: "Trending Now",
            products: products
                .iter()
                .filter(|p| p.rating.count >= 200)
                .take(8)
                .cloned()
                .collect(),
        },
        Section {
            id: "new",
            name: "New Arrivals",
            products: products.iter().rev().take(8).cloned().collect(),
        },
    ]
}

/// A category chip linking into the category pages.
pub struct CategoryChip {
    pub name: String,
    pub slug: String,
}

/// Search query parameters for the listing page.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
}

/// Query parameters for the detail page.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub from: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub shell: Shell,
    /// Search text currently applied, if any.
    pub q: String,
    /// Flat result grid when searching.
    pub results: Vec<Product>,
    /// Display rails when not searching.
    pub sections: Vec<Section>,
    pub spotlight: Vec<Product>,
    pub chips: Vec<CategoryChip>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub shell: Shell,
    pub product: Product,
    pub related: Vec<Product>,
    pub from_cart: bool,
}

/// Display the product listing page.
///
/// Issues the three catalog calls together and merges the results; each
/// source fails independently so one outage cannot blank the others.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let (all, spotlight, category_names) = tokio::join!(
        state.catalog().products(),
        state.catalog().products_limited(8),
        state.catalog().category_names(),
    );

    let all = all.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products: {e}");
        Vec::new()
    });
    let spotlight = spotlight.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch spotlight products: {e}");
        Vec::new()
    });
    let chips: Vec<CategoryChip> = category_names
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch category names: {e}");
            Vec::new()
        })
        .into_iter()
        .map(|name| CategoryChip {
            slug: slugify_category(&name),
            name,
        })
        .collect();

    let q = query.q.unwrap_or_default();
    let results = if q.trim().is_empty() {
        Vec::new()
    } else {
        filter_and_sort(
            &all,
            &ProductQuery {
                text: q.clone(),
                ..ProductQuery::default()
            },
        )
    };

    let sections = if q.trim().is_empty() {
        product_sections(&all)
    } else {
        Vec::new()
    };

    ProductsIndexTemplate {
        shell: Shell::build(&session, theme, "/products", false).await,
        q,
        results,
        sections,
        spotlight,
        chips,
    }
}

/// Display the product detail page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
    Path(id): Path<u64>,
    Query(query): Query<DetailQuery>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .product(id)
        .await
        .map_err(|e| match e {
            crate::catalog::CatalogError::NotFound(_) => {
                AppError::NotFound(format!("product {id}"))
            }
            other => AppError::Catalog(other),
        })?;

    // Related items share the product's category
    let related = match state.catalog().products().await {
        Ok(all) => filter_and_sort(
            &all,
            &ProductQuery {
                category: Some(product.category.clone()),
                ..ProductQuery::default()
            },
        )
        .into_iter()
        .filter(|p| p.id != product.id)
        .take(4)
        .collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch related products: {e}");
            Vec::new()
        }
    };

    let from_cart = query.from.as_deref() == Some("cart");
    let path = format!("/products/{id}");

    Ok(ProductShowTemplate {
        shell: Shell::build(&session, theme, &path, from_cart).await,
        product,
        related,
        from_cart,
    })
}

#[cfg(test)]
mod tests {
    use essence_core::Price;

    use super::*;
    use crate::catalog::Rating;

    fn product(id: u64, rate: f64, count: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(1000),
            description: String::new(),
            category: "fresh".to_string(),
            image: String::new(),
            rating: Rating { rate, count },
        }
    }

    #[test]
    fn test_sections_split_by_rating_and_count() {
        let products = vec![
            product(1, 4.5, 300),
            product(2, 3.0, 50),
            product(3, 4.1, 10),
        ];
        let sections = product_sections(&products);

        let featured = sections.iter().find(|s| s.id == "featured");
        let trending = sections.iter().find(|s| s.id == "trending");
        let newest = sections.iter().find(|s| s.id == "new");

        assert_eq!(
            featured.map(|s| s.products.len()),
            Some(2),
            "ratings >= 4.0"
        );
        assert_eq!(trending.map(|s| s.products.len()), Some(1), "count >= 200");
        assert_eq!(
            newest.and_then(|s| s.products.first()).map(|p| p.id.as_u64()),
            Some(3),
            "new arrivals are reversed input"
        );
    }
}
