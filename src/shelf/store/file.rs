use super::ProductSource;
use crate::error::Result;
use crate::model::Product;
use std::fs;
use std::path::PathBuf;

/// Reads products from a local JSON file shaped like the remote endpoint.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
