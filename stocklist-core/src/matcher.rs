//! Accent-insensitive substring matching over product code and name.

use stocklist_model::Product;

use crate::normalize::normalize;

/// Minimum raw query length (in characters) before filtering kicks in.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Whether `query` is long enough to filter on. Counted on the raw input,
/// before normalization.
pub fn query_is_active(query: &str, min_chars: usize) -> bool {
    query.chars().count() >= min_chars
}

/// `normalized_query` must already have gone through [`normalize`].
pub fn matches_query(product: &Product, normalized_query: &str) -> bool {
    normalize(&product.product_code).contains(normalized_query)
        || normalize(&product.name).contains(normalized_query)
}

/// Recompute the visible subset from the untouched `original` list.
///
/// Short queries return the full list unfiltered. Order of `original` is
/// preserved.
pub fn filter_products(
    original: &[Product],
    query: &str,
    min_chars: usize,
) -> Vec<Product> {
    if !query_is_active(query, min_chars) {
        return original.to_vec();
    }

    let needle = normalize(query);
    original
        .iter()
        .filter(|product| matches_query(product, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "SP001", "Áo thun").with_price(100.0).with_stock(2, 5),
            Product::new("2", "SP002", "Quần jean").with_price(200.0).with_stock(10, 3),
            Product::new("3", "AO-77", "Mũ lưỡi trai").with_price(50.0).with_stock(7, 1),
        ]
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        assert!(!query_is_active("áo", 3));
        assert!(query_is_active("áo ", 3));
        assert!(query_is_active("quầ", 3));
    }

    #[test]
    fn short_query_returns_everything() {
        let original = catalog();
        for query in ["", "a", "zz", "áo"] {
            assert_eq!(filter_products(&original, query, 3), original);
        }
    }

    #[test]
    fn matches_name_regardless_of_diacritics() {
        let original = catalog();
        for query in ["ao ", "áo ", "ÁO T", "thun"] {
            let hits = filter_products(&original, query, 3);
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].id.as_str(), "1");
        }
    }

    #[test]
    fn matches_product_code() {
        let original = catalog();
        let hits = filter_products(&original, "ao-", 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_code, "AO-77");

        let hits = filter_products(&original, "sp0", 3);
        let ids: Vec<_> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_products(&catalog(), "giày", 3).is_empty());
    }
}
