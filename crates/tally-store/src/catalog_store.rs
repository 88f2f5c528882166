//! Persistent catalog.

use std::path::{Path, PathBuf};

use tally_commerce::{Catalog, Currency, Money, Product, VariantKey};
use tracing::{info, warn};

use crate::catalog_file::{decode_catalog, encode_catalog, CatalogDocument};
use crate::{JsonFile, StoreError};

/// The catalog together with the file it is persisted to.
///
/// Every mutation is saved before it becomes visible. If the save fails the
/// in-memory catalog keeps its last-saved state and the error is returned.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    file: JsonFile,
    catalog: Catalog,
}

impl CatalogStore {
    /// Open the catalog file, falling back to the built-in catalog if it does not exist.
    ///
    /// A file that still uses the legacy one-price-per-name shape is
    /// migrated and written back in the current shape.
    pub fn open(path: impl Into<PathBuf>, currency: Currency) -> Result<Self, StoreError> {
        let file = JsonFile::new(path);
        let (catalog, migrated) = Self::read(&file, currency)?;
        let store = Self { file, catalog };

        if migrated > 0 {
            warn!(
                path = %store.path().display(),
                entries = migrated,
                "migrating legacy catalog entries to per-variant shape"
            );
            store.save()?;
        }
        Ok(store)
    }

    /// Load a catalog without keeping the store around.
    pub fn load(path: impl Into<PathBuf>, currency: Currency) -> Result<Catalog, StoreError> {
        Self::read(&JsonFile::new(path), currency).map(|(catalog, _)| catalog)
    }

    fn read(file: &JsonFile, currency: Currency) -> Result<(Catalog, usize), StoreError> {
        match file.load::<CatalogDocument>()? {
            Some(doc) => decode_catalog(doc, currency, file.path()),
            None => Ok((Catalog::builtin(currency), 0)),
        }
    }

    /// Path of the catalog file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Write the whole catalog to disk.
    pub fn save(&self) -> Result<(), StoreError> {
        self.file.save(&encode_catalog(&self.catalog))
    }

    /// Insert or overwrite a product variant price and persist.
    ///
    /// Returns the previous price of that variant, if any.
    pub fn add_product(
        &mut self,
        name: &str,
        variant: VariantKey,
        price: Money,
    ) -> Result<Option<Money>, StoreError> {
        let mut next = self.catalog.clone();
        let previous = next.add_product(name, variant, price)?;
        self.commit(next)?;
        info!(product = name.trim(), %variant, price = %price, "product saved");
        Ok(previous)
    }

    /// Remove a product and all its variants and persist.
    ///
    /// Removing an unknown product is a no-op and writes nothing.
    pub fn remove_product(&mut self, name: &str) -> Result<Option<Product>, StoreError> {
        let mut next = self.catalog.clone();
        let Some(removed) = next.remove_product(name) else {
            return Ok(None);
        };
        self.commit(next)?;
        info!(product = %removed.name, "product removed");
        Ok(Some(removed))
    }

    /// Remove one variant of a product and persist.
    ///
    /// The product is removed as well when this was its last variant.
    pub fn remove_variant(
        &mut self,
        name: &str,
        variant: VariantKey,
    ) -> Result<Option<Money>, StoreError> {
        let mut next = self.catalog.clone();
        let Some(removed) = next.remove_variant(name, variant) else {
            return Ok(None);
        };
        self.commit(next)?;
        info!(product = name.trim(), %variant, "variant removed");
        Ok(Some(removed))
    }

    fn commit(&mut self, next: Catalog) -> Result<(), StoreError> {
        self.file.save(&encode_catalog(&next))?;
        self.catalog = next;
        Ok(())
    }
}
