//! Session-stored shopping cart.
//!
//! Totals are always computed from the lines, never stored. The quantity
//! floor is 1: decrement never removes a line, only the explicit remove
//! action does.

use essence_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Subtotals strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: Price = Price::from_cents(150_00);

/// Flat shipping fee below the threshold.
pub const SHIPPING_FEE: Price = Price::from_cents(12_00);

/// One cart line: a product snapshot plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Line total (price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a product: a new line at quantity 1, or one more unit on the
    /// existing line for the same product.
    pub fn add(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from(product)),
        }
    }

    /// Increment or decrement a line's quantity. Decrement floors at 1;
    /// unknown ids are ignored.
    pub fn change_quantity(&mut self, id: ProductId, delta: i32) {
        if let Some(line) = self.line_mut(id) {
            let next = if delta.is_negative() {
                line.quantity.saturating_sub(delta.unsigned_abs())
            } else {
                line.quantity.saturating_add(delta.unsigned_abs())
            };
            line.quantity = next.max(1);
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Sum of price x quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Flat fee, waived strictly above the free-shipping threshold
    /// (a subtotal of exactly $150.00 still pays the fee).
    #[must_use]
    pub fn shipping(&self) -> Price {
        if self.subtotal() > FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            SHIPPING_FEE
        }
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use essence_core::ProductId;

    use super::*;
    use crate::catalog::Rating;

    fn product(id: u64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(cents),
            description: String::new(),
            category: "fresh".to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::default();
        let p = product(1, 1000);
        cart.add(&p);
        cart.add(&p);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_subtotal_tracks_quantity_changes() {
        let mut cart = Cart::default();
        cart.add(&product(1, 1250));
        cart.add(&product(2, 500));
        cart.change_quantity(ProductId::new(1), 2);

        // 3 x 12.50 + 1 x 5.00
        assert_eq!(cart.subtotal(), Price::from_cents(42_50));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::default();
        cart.add(&product(1, 1000));
        cart.change_quantity(ProductId::new(1), -1);
        cart.change_quantity(ProductId::new(1), -1);
        assert_eq!(cart.lines.first().unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_is_explicit() {
        let mut cart = Cart::default();
        cart.add(&product(1, 1000));
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_shipping_boundary_is_strict() {
        let mut cart = Cart::default();
        cart.add(&product(1, 150_00));
        // Exactly $150.00 pays the fee
        assert_eq!(cart.shipping(), SHIPPING_FEE);
        assert_eq!(cart.total(), Price::from_cents(162_00));

        let mut cart = Cart::default();
        cart.add(&product(2, 150_01));
        // $150.01 ships free
        assert_eq!(cart.shipping(), Price::ZERO);
        assert_eq!(cart.total(), Price::from_cents(150_01));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut cart = Cart::default();
        cart.add(&product(1, 1000));
        cart.change_quantity(ProductId::new(99), 5);
        cart.remove(ProductId::new(99));
        assert_eq!(cart.item_count(), 1);
    }
}
