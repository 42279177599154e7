//! # Record Store
//!
//! Products come from a [`ProductSource`] and are kept in a [`RecordStore`]
//! for the rest of the session.
//!
//! ## Sources
//!
//! - [`http::HttpSource`]: the remote JSON endpoint (production)
//! - [`file::FileSource`]: a local JSON file with the same shape
//! - [`memory::InMemorySource`]: fixed records for tests
//!
//! All sources return the same product shape; fields outside it are dropped
//! during deserialization.
//!
//! ## Caching
//!
//! The store is filled at most once. [`RecordStore::load`] checks the cache
//! before asking the source, so repeated queries never fetch twice. Once
//! filled, the snapshot is only ever read; every query works on a copy.
//!
//! A failed fetch is logged and yields an empty slice. Nothing is cached in
//! that case, so the next load tries again.

use crate::error::Result;
use crate::model::Product;
use tracing::{info, warn};

pub mod file;
pub mod http;
pub mod memory;

/// Where product records come from.
pub trait ProductSource {
    /// Fetch the full product list.
    fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Short human-readable description, for logs.
    fn describe(&self) -> String;
}

impl<T: ProductSource + ?Sized> ProductSource for Box<T> {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        (**self).fetch_products()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The session's snapshot of product records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Option<Vec<Product>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// The cached records, or `None` before the first successful load.
    pub fn snapshot(&self) -> Option<&[Product]> {
        self.records.as_deref()
    }

    /// Returns the cached records, fetching them from `source` first if
    /// this is the first successful load of the session.
    pub fn load<S: ProductSource + ?Sized>(&mut self, source: &S) -> &[Product] {
        if self.records.is_none() {
            match source.fetch_products() {
                Ok(products) => {
                    info!(
                        source = %source.describe(),
                        count = products.len(),
                        "loaded product records"
                    );
                    self.records = Some(products);
                }
                Err(e) => {
                    warn!(source = %source.describe(), error = %e, "error fetching products");
                }
            }
        }
        self.records.as_deref().unwrap_or(&[])
    }
}
