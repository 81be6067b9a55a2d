//! In-memory filter/search/sort pipeline over a product list.
//!
//! Pure functions of `(list, query) -> list`: no side effects, the input
//! slice is never mutated, and the relative order of equal elements is
//! preserved at every step. The pipeline re-runs on every request with
//! whatever query descriptor the URL carries.

use essence_core::Price;

use super::types::Product;

/// Sort order for the product view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve the input order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse a sort key from a query parameter; unknown values sort by
    /// input order.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            _ => Self::Default,
        }
    }

    /// The query-parameter form of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }
}

/// Query descriptor for [`filter_and_sort`].
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring match against title and description.
    /// Empty means no text filtering.
    pub text: String,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
    /// Category slug (hyphens match spaces, case-insensitive).
    /// `None` means no category filtering.
    pub category: Option<String>,
    /// Sort order applied after filtering.
    pub sort: SortKey,
}

/// Normalize a category slug for comparison: hyphens become spaces and
/// the result is lowercased, so `mens-clothing` matches `Mens Clothing`.
#[must_use]
pub fn normalize_category(value: &str) -> String {
    value.replace('-', " ").to_lowercase()
}

/// Turn an API category name into a URL slug (the inverse of
/// [`normalize_category`] up to case).
#[must_use]
pub fn slugify_category(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Apply text, category and price filters, then sort.
///
/// Returns a new vector; the input is left untouched. An empty result is
/// a valid outcome the caller renders explicitly.
#[must_use]
pub fn filter_and_sort(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let needle = query.text.trim().to_lowercase();
    let category = query.category.as_deref().map(normalize_category);

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|c| normalize_category(&p.category) == c)
        })
        .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep their input order
    match query.sort {
        SortKey::Default => {}
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => result.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::NameDesc => result.sort_by(|a, b| b.title.cmp(&a.title)),
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use essence_core::ProductId;

    use super::*;
    use crate::catalog::types::Rating;

    fn product(id: u64, title: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::from_cents(cents),
            description: format!("{title} description"),
            category: category.to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Amber Noir", 4999, "oriental"),
            product(2, "Citrus Dawn", 1999, "fresh"),
            product(3, "Velvet Rose", 7999, "floral"),
            product(4, "Ocean Mist", 1999, "fresh"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let products = fixture();
        let result = filter_and_sort(&products, &ProductQuery::default());
        let ids: Vec<u64> = result.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_text_filter_matches_title_and_description() {
        let products = fixture();

        let by_title = filter_and_sort(
            &products,
            &ProductQuery {
                text: "ROSE".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title.first().unwrap().id.as_u64(), 3);

        let by_description = filter_and_sort(
            &products,
            &ProductQuery {
                text: "mist description".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(by_description.len(), 1);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = fixture();
        let result = filter_and_sort(
            &products,
            &ProductQuery {
                min_price: Some(Price::from_cents(1999)),
                max_price: Some(Price::from_cents(4999)),
                ..ProductQuery::default()
            },
        );
        let ids: Vec<u64> = result.iter().map(|p| p.id.as_u64()).collect();
        // Both bounds included, input order preserved
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_price_bounds_outside_data_range() {
        let products = fixture();

        let none = filter_and_sort(
            &products,
            &ProductQuery {
                min_price: Some(Price::from_cents(100_000)),
                ..ProductQuery::default()
            },
        );
        assert!(none.is_empty());

        let all = filter_and_sort(
            &products,
            &ProductQuery {
                min_price: Some(Price::ZERO),
                max_price: Some(Price::from_cents(1_000_000)),
                ..ProductQuery::default()
            },
        );
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_category_filter_normalizes_slug() {
        let mut products = fixture();
        products.push(product(5, "Leather Duffel", 9999, "men's clothing"));

        let result = filter_and_sort(
            &products,
            &ProductQuery {
                category: Some("Men's-Clothing".to_string()),
                ..ProductQuery::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id.as_u64(), 5);
    }

    #[test]
    fn test_sort_price_asc_desc_are_reverses() {
        let products = fixture();

        let asc = filter_and_sort(
            &products,
            &ProductQuery {
                sort: SortKey::PriceAsc,
                ..ProductQuery::default()
            },
        );
        let desc = filter_and_sort(
            &products,
            &ProductQuery {
                sort: SortKey::PriceDesc,
                ..ProductQuery::default()
            },
        );

        let asc_prices: Vec<Price> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<Price> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let products = fixture();
        let result = filter_and_sort(
            &products,
            &ProductQuery {
                sort: SortKey::PriceAsc,
                ..ProductQuery::default()
            },
        );
        // Products 2 and 4 share a price; input order must hold
        let ids: Vec<u64> = result.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_name() {
        let products = fixture();
        let result = filter_and_sort(
            &products,
            &ProductQuery {
                sort: SortKey::NameDesc,
                ..ProductQuery::default()
            },
        );
        let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Velvet Rose", "Ocean Mist", "Citrus Dawn", "Amber Noir"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let products = fixture();
        let before: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
        let _ = filter_and_sort(
            &products,
            &ProductQuery {
                sort: SortKey::PriceDesc,
                text: "a".to_string(),
                ..ProductQuery::default()
            },
        );
        let after: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_text_keeps_filtered_order() {
        let products = fixture();
        let result = filter_and_sort(
            &products,
            &ProductQuery {
                text: "   ".to_string(),
                max_price: Some(Price::from_cents(5000)),
                ..ProductQuery::default()
            },
        );
        let ids: Vec<u64> = result.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_slug_round_trip() {
        assert_eq!(slugify_category("Men's Clothing"), "men's-clothing");
        assert_eq!(normalize_category("men's-clothing"), "men's clothing");
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price-asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("name-desc"), SortKey::NameDesc);
        assert_eq!(SortKey::parse("bogus"), SortKey::Default);
        assert_eq!(SortKey::parse(""), SortKey::Default);
    }
}
