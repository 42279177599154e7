use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_ENDPOINT: &str = "https://makeup-api.herokuapp.com/api/v1/products.json";
const DEFAULT_CONVERSION_RATE: f64 = 5.5;
const DEFAULT_CURRENCY_PREFIX: &str = "R$ ";
const DEFAULT_FALLBACK_IMAGE: &str = "img/unavailable.png";
const DEFAULT_SORT: &str = "Melhor Avaliados";

/// Configuration for shelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelfConfig {
    /// Where the product list is fetched from
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Multiplier applied to source prices for display
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,

    /// Text placed before every displayed price
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// Image shown when a product image fails to load
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Sort label or identifier used when none is given
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_conversion_rate() -> f64 {
    DEFAULT_CONVERSION_RATE
}

fn default_currency_prefix() -> String {
    DEFAULT_CURRENCY_PREFIX.to_string()
}

fn default_fallback_image() -> String {
    DEFAULT_FALLBACK_IMAGE.to_string()
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            conversion_rate: default_conversion_rate(),
            currency_prefix: default_currency_prefix(),
            fallback_image: default_fallback_image(),
            default_sort: default_sort(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 5] = [
        "endpoint",
        "conversion-rate",
        "currency-prefix",
        "fallback-image",
        "default-sort",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint.clone()),
            "conversion-rate" => Ok(self.conversion_rate.to_string()),
            "currency-prefix" => Ok(self.currency_prefix.clone()),
            "fallback-image" => Ok(self.fallback_image.clone()),
            "default-sort" => Ok(self.default_sort.clone()),
            other => Err(ShelfError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.endpoint = value.to_string(),
            "conversion-rate" => {
                let rate: f64 = value.parse().map_err(|_| {
                    ShelfError::Config(format!("conversion-rate must be a number, got {}", value))
                })?;
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(ShelfError::Config(
                        "conversion-rate must be a positive number".to_string(),
                    ));
                }
                self.conversion_rate = rate;
            }
            "currency-prefix" => self.currency_prefix = value.to_string(),
            "fallback-image" => self.fallback_image = value.to_string(),
            "default-sort" => self.default_sort = value.to_string(),
            other => return Err(ShelfError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
