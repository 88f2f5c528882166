//! Persistent cart.

use std::path::{Path, PathBuf};

use tally_commerce::{compute_bill, Bill, Cart, CartLine, Catalog, CommerceError, VariantKey};
use tracing::{info, warn};

use crate::cart_file::{decode_cart, encode_cart, CartDocument};
use crate::{JsonFile, StoreError};

/// Result of removing a line from the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first matching line was removed.
    Removed(CartLine),
    /// No line matched; nothing changed.
    NotInCart,
}

/// The cart together with the file it is persisted to.
///
/// Same commit rule as [`crate::CatalogStore`]: save first, then update memory.
#[derive(Debug, Clone)]
pub struct CartLedger {
    file: JsonFile,
    cart: Cart,
}

impl CartLedger {
    /// Open the cart file, starting with an empty cart if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file = JsonFile::new(path);
        let (cart, legacy) = Self::read(&file)?;
        let ledger = Self { file, cart };

        if legacy {
            warn!(path = %ledger.path().display(), "migrating legacy cart file");
            ledger.save()?;
        }
        Ok(ledger)
    }

    /// Load a cart without keeping the ledger around.
    pub fn load(path: impl Into<PathBuf>) -> Result<Cart, StoreError> {
        Self::read(&JsonFile::new(path)).map(|(cart, _)| cart)
    }

    fn read(file: &JsonFile) -> Result<(Cart, bool), StoreError> {
        match file.load::<CartDocument>()? {
            Some(doc) => decode_cart(doc, file.path()),
            None => Ok((Cart::new(), false)),
        }
    }

    /// Path of the cart file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Write the whole cart to disk.
    pub fn save(&self) -> Result<(), StoreError> {
        self.file.save(&encode_cart(&self.cart))
    }

    /// Append one unit of a product variant and persist.
    ///
    /// The pair must resolve in `catalog`.
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product: &str,
        variant: VariantKey,
    ) -> Result<CartLine, StoreError> {
        let mut next = self.cart.clone();
        let line = next.add_item(catalog, product, variant)?;
        self.commit(next)?;
        info!(line = %line.label(), "added to cart");
        Ok(line)
    }

    /// Remove the first line matching the product and variant and persist.
    ///
    /// A line that is not in the cart is a no-op, not an error.
    pub fn remove_from_cart(
        &mut self,
        product: &str,
        variant: VariantKey,
    ) -> Result<RemoveOutcome, StoreError> {
        let mut next = self.cart.clone();
        let Some(line) = next.remove_line(product, variant) else {
            return Ok(RemoveOutcome::NotInCart);
        };
        self.commit(next)?;
        info!(line = %line.label(), "removed from cart");
        Ok(RemoveOutcome::Removed(line))
    }

    /// Set the discount flag and persist.
    pub fn set_discount(&mut self, enabled: bool) -> Result<(), StoreError> {
        let mut next = self.cart.clone();
        next.set_discount(enabled);
        self.commit(next)?;
        info!(enabled, "discount flag set");
        Ok(())
    }

    /// Clear all lines and the discount flag and persist.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let mut next = self.cart.clone();
        next.reset();
        self.commit(next)?;
        info!("cart reset");
        Ok(())
    }

    /// Compute the bill for the current cart.
    pub fn bill(&self, catalog: &Catalog) -> Result<Bill, CommerceError> {
        compute_bill(catalog, &self.cart)
    }

    fn commit(&mut self, next: Cart) -> Result<(), StoreError> {
        self.file.save(&encode_cart(&next))?;
        self.cart = next;
        Ok(())
    }
}
