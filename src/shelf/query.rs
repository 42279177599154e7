//! # Query Pipeline
//!
//! Turns the record snapshot plus the current selections into the ordered
//! list handed to the render engine: filter first, then sort.

use crate::filter::FilterSelection;
use crate::model::Product;
use crate::sort::{sort_products, SortStrategy};
use tracing::debug;

/// Runs the filter stages, then the sort strategy if one is selected.
///
/// An empty result is a normal outcome. `sort` being `None` keeps the
/// filtered order.
pub fn run_query(
    products: &[Product],
    selection: &FilterSelection,
    sort: Option<SortStrategy>,
) -> Vec<Product> {
    let filtered = selection.apply(products);
    let ordered = match sort {
        Some(strategy) => sort_products(&filtered, strategy),
        None => filtered,
    };

    debug!(
        total = products.len(),
        matched = ordered.len(),
        sort = sort.map(SortStrategy::id),
        "query complete"
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name_or_empty()).collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("A")
                .with_brand("X")
                .with_price("10")
                .with_rating(4.0),
            Product::new("B")
                .with_brand("Y")
                .with_price("0")
                .with_rating(5.0),
            Product::new("C")
                .with_brand("X")
                .with_price("3")
                .with_rating(2.0)
                .with_product_type("blush"),
        ]
    }

    #[test]
    fn brand_filter_keeps_invalid_prices_for_non_price_sorts() {
        let products = catalog();
        let selection = FilterSelection::new().with_brand("Y");
        let result = run_query(&products, &selection, Some(SortStrategy::BestRated));
        assert_eq!(names(&result), vec!["B"]);
    }

    #[test]
    fn filter_then_sort() {
        let products = catalog();
        let selection = FilterSelection::new().with_brand("X");
        let result = run_query(&products, &selection, Some(SortStrategy::LowestPrice));
        assert_eq!(names(&result), vec!["C", "A"]);
    }

    #[test]
    fn unknown_sort_keeps_filtered_order() {
        let products = catalog();
        let selection = FilterSelection::new();
        let result = run_query(&products, &selection, SortStrategy::from_label("Popular"));
        assert_eq!(names(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let products = catalog();
        let selection = FilterSelection::new().with_product_type("mascara");
        assert!(run_query(&products, &selection, Some(SortStrategy::AToZ)).is_empty());
    }

    #[test]
    fn snapshot_is_left_untouched() {
        let products = catalog();
        let before = products.clone();
        let _ = run_query(
            &products,
            &FilterSelection::new(),
            Some(SortStrategy::HighestPrice),
        );
        assert_eq!(products, before);
    }
}
