//! Cart route handlers.
//!
//! The cart lives in the session. Mutations are plain form posts that
//! redirect back to the cart page; totals are recomputed on every render.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use essence_core::{Price, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentTheme;
use crate::models::{Cart, session_keys};
use crate::routes::Shell;
use crate::state::AppState;

/// Size of the seeded demo cart.
const CART_SEED_LIMIT: u32 = 3;

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: u64,
}

/// Quantity change form data.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: u64,
    /// +1 or -1 from the stepper buttons.
    pub delta: i32,
}

/// Remove-line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: u64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: Shell,
    pub cart: Cart,
    pub subtotal: Price,
    pub shipping: Price,
    pub free_shipping: bool,
    pub total: Price,
}

// =============================================================================
// Session Helpers
// =============================================================================

async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

async fn store_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART, cart).await {
        tracing::warn!("Failed to store cart in session: {e}");
    }
}

/// Display the cart page.
///
/// An empty cart is seeded from the product API (first few products at
/// quantity 1); if the seed fetch fails the empty-cart state renders.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CurrentTheme(theme): CurrentTheme,
) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;

    if cart.is_empty() {
        match state.catalog().products_limited(CART_SEED_LIMIT).await {
            Ok(products) => {
                for product in &products {
                    cart.add(product);
                }
                store_cart(&session, &cart).await;
            }
            Err(e) => {
                tracing::warn!("Failed to seed cart: {e}");
            }
        }
    }

    let subtotal = cart.subtotal();
    let shipping = cart.shipping();
    let total = cart.total();

    CartShowTemplate {
        shell: Shell::build(&session, theme, "/cart", false).await,
        cart,
        subtotal,
        shipping,
        free_shipping: shipping == Price::ZERO,
        total,
    }
}

/// Add a product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Redirect {
    match state.catalog().product(ProductId::new(form.product_id)).await {
        Ok(product) => {
            let mut cart = load_cart(&session).await;
            cart.add(&product);
            store_cart(&session, &cart).await;
        }
        Err(e) => {
            tracing::warn!(product_id = form.product_id, "Failed to add to cart: {e}");
        }
    }

    Redirect::to("/cart")
}

/// Change a line's quantity (decrement floors at 1).
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateForm>) -> Redirect {
    let mut cart = load_cart(&session).await;
    cart.change_quantity(ProductId::new(form.product_id), form.delta);
    store_cart(&session, &cart).await;

    Redirect::to("/cart")
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveForm>) -> Redirect {
    let mut cart = load_cart(&session).await;
    cart.remove(ProductId::new(form.product_id));
    store_cart(&session, &cart).await;

    Redirect::to("/cart")
}
