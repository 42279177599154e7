//! # Sort Engine
//!
//! Every strategy takes a slice and returns a freshly ordered `Vec`. All sorts
//! are stable, so records that compare equal keep their input order.
//!
//! Strategies are identified by [`SortStrategy`]. User-facing labels are
//! mapped to strategies at the boundary with [`SortStrategy::from_label`];
//! the engine itself never sees a label.

use crate::model::Product;
use crate::validity::{coerce_price, is_valid_price, PriceValue};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    #[default]
    BestRated,
    LowestPrice,
    HighestPrice,
    AToZ,
    ZToA,
}

impl SortStrategy {
    pub fn all() -> &'static [SortStrategy] {
        &[
            SortStrategy::BestRated,
            SortStrategy::LowestPrice,
            SortStrategy::HighestPrice,
            SortStrategy::AToZ,
            SortStrategy::ZToA,
        ]
    }

    /// The label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortStrategy::BestRated => "Melhor Avaliados",
            SortStrategy::LowestPrice => "Menores Preços",
            SortStrategy::HighestPrice => "Maiores Preços",
            SortStrategy::AToZ => "A-Z",
            SortStrategy::ZToA => "Z-A",
        }
    }

    /// The short identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            SortStrategy::BestRated => "best-rated",
            SortStrategy::LowestPrice => "lowest-price",
            SortStrategy::HighestPrice => "highest-price",
            SortStrategy::AToZ => "a-z",
            SortStrategy::ZToA => "z-a",
        }
    }

    /// Maps a UI label or identifier to a strategy. Unknown input yields
    /// `None`, which the query pipeline treats as "keep the filtered order".
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.label() == label || s.id().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Orders `products` with `strategy`. Price strategies also drop records
/// whose price fails the validity rules.
pub fn sort_products(products: &[Product], strategy: SortStrategy) -> Vec<Product> {
    match strategy {
        SortStrategy::BestRated => {
            let mut sorted = products.to_vec();
            sorted.sort_by(compare_rating_desc);
            sorted
        }
        SortStrategy::LowestPrice => {
            let mut priced = with_valid_price(products);
            priced.sort_by(compare_price_asc);
            priced
        }
        SortStrategy::HighestPrice => {
            let mut priced = with_valid_price(products);
            priced.sort_by(|a, b| compare_price_asc(b, a));
            priced
        }
        SortStrategy::AToZ => {
            let mut sorted = products.to_vec();
            sorted.sort_by(compare_name);
            sorted
        }
        SortStrategy::ZToA => {
            let mut sorted = products.to_vec();
            sorted.sort_by(|a, b| compare_name(b, a));
            sorted
        }
    }
}

fn with_valid_price(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| is_valid_price(p.price.as_ref()))
        .cloned()
        .collect()
}

// Missing or non-numeric ratings go last.
fn compare_rating_desc(a: &Product, b: &Product) -> Ordering {
    let ra = a.rating.as_ref().and_then(|r| r.as_number());
    let rb = b.rating.as_ref().and_then(|r| r.as_number());
    match (ra, rb) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Unparseable prices rank above every number.
fn compare_price_asc(a: &Product, b: &Product) -> Ordering {
    match (coerce_price(a.price.as_ref()), coerce_price(b.price.as_ref())) {
        (PriceValue::Number(x), PriceValue::Number(y)) => x.total_cmp(&y),
        (PriceValue::Number(_), PriceValue::Unparseable) => Ordering::Less,
        (PriceValue::Unparseable, PriceValue::Number(_)) => Ordering::Greater,
        (PriceValue::Unparseable, PriceValue::Unparseable) => Ordering::Equal,
    }
}

fn compare_name(a: &Product, b: &Product) -> Ordering {
    a.name_or_empty()
        .to_lowercase()
        .cmp(&b.name_or_empty().to_lowercase())
}
