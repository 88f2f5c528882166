//! Flat-file persistence for the tally catalog and cart.
//!
//! State lives in two JSON files that are always loaded and saved whole.
//! Saves go through a temporary file and an atomic rename, so a crash never
//! leaves a truncated file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use tally_commerce::{Currency, Money, VariantKey};
//! use tally_store::{CartLedger, CatalogStore};
//!
//! # fn main() -> Result<(), tally_store::StoreError> {
//! let mut catalog = CatalogStore::open("products.json", Currency::INR)?;
//! let mut ledger = CartLedger::open("cart.json")?;
//!
//! let kg = VariantKey::new(1000)?;
//! catalog.add_product("Honey", kg, Money::from_major(736, Currency::INR))?;
//! ledger.add_to_cart(catalog.catalog(), "Honey", kg)?;
//!
//! let bill = ledger.bill(catalog.catalog())?;
//! println!("{}", bill.render());
//! # Ok(())
//! # }
//! ```

mod cart_file;
mod cart_ledger;
mod catalog_file;
mod catalog_store;
mod error;
mod file;

pub use cart_file::{decode_cart, encode_cart, CartDocument};
pub use cart_ledger::{CartLedger, RemoveOutcome};
pub use catalog_file::{decode_catalog, encode_catalog, CatalogDocument};
pub use catalog_store::CatalogStore;
pub use error::StoreError;
pub use file::JsonFile;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartLedger, CatalogStore, JsonFile, RemoveOutcome, StoreError};
}
