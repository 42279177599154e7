//! # Filter Engine
//!
//! Filters narrow a record list by one field at a time. Each filter is
//! non-destructive: it returns a fresh `Vec` and never touches its input.
//!
//! The field is picked by [`FilterField`], not by a runtime string key, so
//! each field carries its own typed accessor and matching rule:
//!
//! - `Brand`, `ProductType`: exact, case-sensitive equality
//! - `Name`: case-insensitive substring; a blank needle matches everything
//!
//! A record missing the filtered field never matches an active filter.
//!
//! [`FilterSelection`] holds the current brand/type/name constraints and
//! composes them in a fixed order: brand, then type, then name.

use crate::model::Product;

/// The UI spelling of "no constraint" for brand and type choices.
pub const ALL_SENTINEL: &str = "Todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    ProductType,
    Name,
}

impl FilterField {
    fn value_of(self, product: &Product) -> Option<&str> {
        match self {
            FilterField::Brand => product.brand.as_deref(),
            FilterField::ProductType => product.product_type.as_deref(),
            FilterField::Name => product.name.as_deref(),
        }
    }

    fn matches(self, product: &Product, value: &str) -> bool {
        match self {
            FilterField::Name => {
                if value.trim().is_empty() {
                    return true;
                }
                let needle = value.to_lowercase();
                self.value_of(product)
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            }
            FilterField::Brand | FilterField::ProductType => {
                self.value_of(product) == Some(value)
            }
        }
    }
}

/// Keeps the records whose `field` matches `value`.
pub fn apply_filter(products: &[Product], value: &str, field: FilterField) -> Vec<Product> {
    products
        .iter()
        .filter(|p| field.matches(p, value))
        .cloned()
        .collect()
}

/// A brand or type selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parses a raw UI value. Empty input and the sentinel both mean `All`.
    pub fn from_input(value: &str) -> Self {
        if value.is_empty() || value == ALL_SENTINEL {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    pub fn active(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::All => write!(f, "{}", ALL_SENTINEL),
            Choice::Only(v) => write!(f, "{}", v),
        }
    }
}

/// The combined brand/type/name constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub brand: Choice,
    pub product_type: Choice,
    pub name: Option<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, value: &str) -> Self {
        self.brand = Choice::from_input(value);
        self
    }

    pub fn with_product_type(mut self, value: &str) -> Self {
        self.product_type = Choice::from_input(value);
        self
    }

    pub fn with_name(mut self, value: &str) -> Self {
        self.name = Some(value.to_string());
        self
    }

    fn active_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.brand.active().is_none()
            && self.product_type.active().is_none()
            && self.active_name().is_none()
    }

    /// Applies brand, type and name filters in that order. Each stage runs
    /// only when its selection is active.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered = products.to_vec();

        if let Some(brand) = self.brand.active() {
            filtered = apply_filter(&filtered, brand, FilterField::Brand);
        }
        if let Some(product_type) = self.product_type.active() {
            filtered = apply_filter(&filtered, product_type, FilterField::ProductType);
        }
        if let Some(name) = self.active_name() {
            filtered = apply_filter(&filtered, name, FilterField::Name);
        }

        filtered
    }
}
