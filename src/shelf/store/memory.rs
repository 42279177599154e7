use super::ProductSource;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use std::cell::Cell;

/// Serves a fixed product list. Does NOT touch the network.
///
/// Counts fetches so tests can check caching behaviour.
#[derive(Debug, Default)]
pub struct InMemorySource {
    products: Vec<Product>,
    fail: bool,
    fetches: Cell<usize>,
}

impl InMemorySource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// A source whose every fetch fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl ProductSource for InMemorySource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail {
            return Err(ShelfError::Fetch("in-memory source set to fail".into()));
        }
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.products.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A small catalog covering valid, zero and missing prices, ratings of
    /// every shape and products without names.
    pub fn sample_products() -> Vec<Product> {
        vec![
            Product::new("Matte Lipstick")
                .with_brand("nyx")
                .with_price("6.0")
                .with_rating(4.5)
                .with_category("lipstick")
                .with_product_type("lipstick")
                .with_image_link("https://cdn.example/nyx-matte.png"),
            Product::new("Lash Paradise")
                .with_brand("l'oreal")
                .with_price("11.99")
                .with_rating(4.8)
                .with_product_type("mascara"),
            Product::new("Sample Blush")
                .with_brand("nyx")
                .with_price("0.0")
                .with_rating(5.0)
                .with_product_type("blush"),
            Product::new("butter gloss")
                .with_brand("nyx")
                .with_price("5.5")
                .with_product_type("lipstick"),
            Product::new("Dior Addict")
                .with_brand("dior")
                .with_price("34")
                .with_rating("3.9")
                .with_category("lipstick")
                .with_product_type("lipstick"),
            Product::default()
                .with_brand("dior")
                .with_price("12")
                .with_product_type("foundation"),
        ]
    }

    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(sample_products()),
            }
        }
    }
}
