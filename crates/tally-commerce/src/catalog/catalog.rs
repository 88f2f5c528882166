//! The product catalog.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::defaults::DEFAULT_PRODUCTS;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductName, VariantKey};
use crate::money::{Currency, Money};

/// Mapping from product name to product, all priced in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    currency: Currency,
    products: BTreeMap<ProductName, Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            products: BTreeMap::new(),
        }
    }

    /// The built-in catalog used when nothing has been saved yet.
    ///
    /// Prices in the table are whole major units of `currency`.
    pub fn builtin(currency: Currency) -> Self {
        let mut catalog = Self::new(currency);
        for (name, variants) in DEFAULT_PRODUCTS {
            for &(key, price) in *variants {
                let (Ok(name), Ok(key), Some(price)) = (
                    ProductName::new(name),
                    VariantKey::new(i64::from(key)),
                    Money::try_from_major(price, currency),
                ) else {
                    continue;
                };
                catalog.insert_variant(name, key, price);
            }
        }
        catalog
    }

    /// Currency every price in this catalog is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Insert or overwrite the price of one product variant.
    ///
    /// Creates the product if it does not exist yet. Returns the previous price
    /// of that variant, if any. Rejects an empty name, a non-positive price or
    /// a price in another currency; the catalog is unchanged on error.
    pub fn add_product(
        &mut self,
        name: &str,
        variant: VariantKey,
        price: Money,
    ) -> Result<Option<Money>, CommerceError> {
        let name = ProductName::new(name)?;
        if !price.is_positive() {
            return Err(CommerceError::InvalidPrice(price.display()));
        }
        if price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }

        debug!(product = %name, %variant, price = %price, "upserting catalog variant");
        Ok(self.insert_variant(name, variant, price))
    }

    /// Insert a variant without validation. Used by loaders and defaults.
    pub fn insert_variant(
        &mut self,
        name: ProductName,
        variant: VariantKey,
        price: Money,
    ) -> Option<Money> {
        match self.products.get_mut(name.as_str()) {
            Some(product) => product.set_price(variant, price),
            None => {
                self.products
                    .insert(name.clone(), Product::new(name, variant, price));
                None
            }
        }
    }

    /// Remove a product and all of its variants.
    ///
    /// Returns `None` when the product was not in the catalog.
    pub fn remove_product(&mut self, name: &str) -> Option<Product> {
        self.products.remove(name.trim())
    }

    /// Remove a single variant. The product goes too when its last variant is removed.
    pub fn remove_variant(&mut self, name: &str, variant: VariantKey) -> Option<Money> {
        let name = name.trim();
        let product = self.products.get_mut(name)?;
        let removed = product.remove_variant(variant)?;
        if product.variant_count() == 0 {
            self.products.remove(name);
        }
        Some(removed)
    }

    /// Get a product by name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name.trim())
    }

    /// Resolve the unit price of a product variant.
    pub fn price_of(&self, name: &str, variant: VariantKey) -> Result<Money, CommerceError> {
        let name = name.trim();
        let product = self
            .products
            .get(name)
            .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))?;
        product
            .price_of(variant)
            .ok_or_else(|| CommerceError::VariantNotFound {
                product: name.to_string(),
                variant: variant.get(),
            })
    }

    /// Check whether a (product, variant) pair resolves.
    pub fn contains(&self, name: &str, variant: VariantKey) -> bool {
        self.products
            .get(name.trim())
            .is_some_and(|p| p.has_variant(variant))
    }

    /// Iterate over products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
