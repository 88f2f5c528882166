//! Product and variant pricing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ids::{ProductName, VariantKey};
use crate::money::Money;

/// A product in the catalog.
///
/// Always has at least one variant. Variants are kept in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Product name.
    pub name: ProductName,
    /// Price per variant key.
    variants: BTreeMap<VariantKey, Money>,
}

impl Product {
    /// Create a product with a single variant.
    pub fn new(name: ProductName, variant: VariantKey, price: Money) -> Self {
        Self {
            name,
            variants: BTreeMap::from([(variant, price)]),
        }
    }

    /// Price of a variant, if this product sells it.
    pub fn price_of(&self, variant: VariantKey) -> Option<Money> {
        self.variants.get(&variant).copied()
    }

    /// Check whether this product sells the given variant.
    pub fn has_variant(&self, variant: VariantKey) -> bool {
        self.variants.contains_key(&variant)
    }

    /// Insert or overwrite a variant price, returning the previous price.
    pub fn set_price(&mut self, variant: VariantKey, price: Money) -> Option<Money> {
        self.variants.insert(variant, price)
    }

    /// Remove a variant, returning its price.
    ///
    /// Callers must drop the product when this removes the last variant.
    pub(crate) fn remove_variant(&mut self, variant: VariantKey) -> Option<Money> {
        self.variants.remove(&variant)
    }

    /// Iterate over (variant, price) pairs in ascending key order.
    pub fn variants(&self) -> impl Iterator<Item = (VariantKey, Money)> + '_ {
        self.variants.iter().map(|(k, p)| (*k, *p))
    }

    /// Number of variants.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Display label for one variant of this product (e.g., "Honey 500").
    pub fn label(&self, variant: VariantKey) -> String {
        format!("{} {}", self.name, variant)
    }
}
