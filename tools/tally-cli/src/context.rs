//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tally_commerce::Currency;
use tally_store::{CartLedger, CatalogStore};

use crate::config::{TallyConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: TallyConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (TallyConfig::load(path)?, Some(resolve(&cwd, path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (TallyConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(TallyConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = TallyConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative storage paths are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolved catalog file path.
    pub fn catalog_path(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.storage.catalog_file)
    }

    /// Resolved cart file path.
    pub fn cart_path(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.storage.cart_file)
    }

    /// Configured currency.
    pub fn currency(&self) -> Result<Currency> {
        self.config.currency()
    }

    /// Open the persistent catalog.
    pub fn catalog_store(&self) -> Result<CatalogStore> {
        let path = self.catalog_path();
        self.output.debug(&format!("Catalog file: {}", path.display()));
        CatalogStore::open(&path, self.currency()?)
            .with_context(|| format!("Failed to open catalog {}", path.display()))
    }

    /// Open the persistent cart.
    pub fn cart_ledger(&self) -> Result<CartLedger> {
        let path = self.cart_path();
        self.output.debug(&format!("Cart file: {}", path.display()));
        CartLedger::open(&path).with_context(|| format!("Failed to open cart {}", path.display()))
    }
}

/// Resolve a path relative to a base directory.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
