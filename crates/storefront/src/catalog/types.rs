//! Wire types for the product source API.

use essence_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product as returned by `GET /products` and `GET /products/:id`.
///
/// Immutable once fetched; owned by the catalog cache for its TTL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregate rating attached to a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.com/img.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_u64(), 1);
        assert_eq!(product.price.to_string(), "$109.95");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_deserialize_product_without_rating() {
        let json = r#"{ "id": 2, "title": "Mug", "price": 5.5 }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating.count, 0);
        assert!(product.category.is_empty());
    }
}
