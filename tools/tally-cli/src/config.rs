//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tally_commerce::Currency;

/// Overrides the catalog file location.
pub const CATALOG_FILE_ENV: &str = "TALLY_CATALOG_FILE";
/// Overrides the cart file location.
pub const CART_FILE_ENV: &str = "TALLY_CART_FILE";

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["tally.toml", ".tally.toml", "tally.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Where state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// How amounts are shown.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl TallyConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(CATALOG_FILE_ENV) {
            if !path.trim().is_empty() {
                self.storage.catalog_file = path;
            }
        }
        if let Ok(path) = std::env::var(CART_FILE_ENV) {
            if !path.trim().is_empty() {
                self.storage.cart_file = path;
            }
        }
        self
    }

    /// Currency all prices are expressed in.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.display.currency)
            .ok_or_else(|| anyhow!("Unknown currency in config: {}", self.display.currency))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render config")
    }
}

/// Storage locations. Relative paths resolve against the config file's directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Catalog file (default: products.json).
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Cart file (default: cart.json).
    #[serde(default = "default_cart_file")]
    pub cart_file: String,
}

fn default_catalog_file() -> String {
    "products.json".to_string()
}

fn default_cart_file() -> String {
    "cart.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            cart_file: default_cart_file(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code (default: INR).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::INR.code().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Generate a default tally.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Tally shopping cart configuration

[storage]
# Relative paths are resolved against the directory holding this file.
catalog_file = "{catalog}"
cart_file = "{cart}"

[display]
# One of: INR, USD, EUR, GBP
currency = "{currency}"
"#,
        catalog = default_catalog_file(),
        cart = default_cart_file(),
        currency = default_currency(),
    )
}
