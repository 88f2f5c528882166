//! Cart and cart line types.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::cart::{compute_bill, Bill};
use crate::error::CommerceError;
use crate::ids::{ProductName, VariantKey};

/// One unit of one product variant in the cart.
///
/// Serialized as a two-element `[product, variant]` array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(ProductName, VariantKey)", into = "(ProductName, VariantKey)")]
pub struct CartLine {
    /// Product name.
    pub product: ProductName,
    /// Variant key.
    pub variant: VariantKey,
}

impl CartLine {
    /// Create a cart line.
    pub fn new(product: ProductName, variant: VariantKey) -> Self {
        Self { product, variant }
    }

    /// Check whether this line refers to the given product and variant.
    pub fn matches(&self, product: &str, variant: VariantKey) -> bool {
        self.product.as_str() == product.trim() && self.variant == variant
    }

    /// Display label (e.g., "Honey 1000").
    pub fn label(&self) -> String {
        format!("{} {}", self.product, self.variant)
    }
}

impl From<(ProductName, VariantKey)> for CartLine {
    fn from((product, variant): (ProductName, VariantKey)) -> Self {
        Self::new(product, variant)
    }
}

impl From<CartLine> for (ProductName, VariantKey) {
    fn from(line: CartLine) -> Self {
        (line.product, line.variant)
    }
}

/// A shopping cart.
///
/// Lines are kept in the order they were added. Repeating a line is how
/// quantity is expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, one per unit.
    pub lines: Vec<CartLine>,
    /// Whether the flat discount applies.
    pub discount: bool,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product variant.
    ///
    /// Returns an error if the pair does not resolve in the catalog; the
    /// cart is unchanged in that case.
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product: &str,
        variant: VariantKey,
    ) -> Result<CartLine, CommerceError> {
        catalog.price_of(product, variant)?;
        let line = CartLine::new(ProductName::new(product)?, variant);
        self.lines.push(line.clone());
        Ok(line)
    }

    /// Remove the first line matching the product and variant.
    ///
    /// Returns the removed line, or `None` when nothing matched.
    pub fn remove_line(&mut self, product: &str, variant: VariantKey) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.matches(product, variant))?;
        Some(self.lines.remove(index))
    }

    /// Turn the flat discount on or off.
    pub fn set_discount(&mut self, enabled: bool) {
        self.discount = enabled;
    }

    /// Clear all lines and the discount flag.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.discount = false;
    }

    /// Number of units in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// How many times a given line occurs.
    pub fn quantity_of(&self, product: &str, variant: VariantKey) -> usize {
        self.lines
            .iter()
            .filter(|l| l.matches(product, variant))
            .count()
    }

    /// Lines that no longer resolve in the catalog, in cart order.
    pub fn stale_lines<'a>(&'a self, catalog: &Catalog) -> Vec<&'a CartLine> {
        self.lines
            .iter()
            .filter(|l| !catalog.contains(l.product.as_str(), l.variant))
            .collect()
    }

    /// Compute the bill for this cart.
    pub fn bill(&self, catalog: &Catalog) -> Result<Bill, CommerceError> {
        compute_bill(catalog, self)
    }
}
