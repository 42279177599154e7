use super::ProductSource;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use tracing::debug;

/// Product payloads are a few MB; allow headroom over ureq's default limit.
const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// Fetches products from a remote JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProductSource for HttpSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        debug!(url = %self.url, "requesting product list");
        let response = ureq::get(self.url.as_str())
            .call()
            .map_err(|err| ShelfError::Fetch(format!("request to {} failed: {err}", self.url)))?;

        let body = response
            .into_body()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_string()
            .map_err(|err| ShelfError::Fetch(format!("failed reading response body: {err}")))?;

        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
