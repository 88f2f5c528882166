//! Domain types and logic for the tally shopping cart.
//!
//! This crate has no I/O. It provides:
//!
//! - **Catalog**: products, each with one or more sized variants and a price per variant
//! - **Cart**: an ordered list of one-unit cart lines plus a flat discount flag
//! - **Bill**: subtotal, discount and total computed from a cart against a catalog
//!
//! # Example
//!
//! ```
//! use tally_commerce::prelude::*;
//!
//! let mut catalog = Catalog::new(Currency::INR);
//! let kg = VariantKey::new(1000).unwrap();
//! let half = VariantKey::new(500).unwrap();
//! catalog.add_product("Honey", kg, Money::from_major(736, Currency::INR)).unwrap();
//! catalog.add_product("Honey", half, Money::from_major(428, Currency::INR)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(&catalog, "Honey", kg).unwrap();
//! cart.add_item(&catalog, "Honey", kg).unwrap();
//! cart.add_item(&catalog, "Honey", half).unwrap();
//!
//! let bill = compute_bill(&catalog, &cart).unwrap();
//! assert_eq!(bill.total.display(), "Rs 1900.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;

pub use cart::{compute_bill, Bill, BillLine, Cart, CartLine, Discount};
pub use catalog::{Catalog, Product};
pub use error::CommerceError;
pub use ids::{ProductName, VariantKey};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductName, VariantKey};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{split_sized_name, Catalog, Product};

    // Cart
    pub use crate::cart::{compute_bill, Bill, BillLine, Cart, CartLine, Discount};
}
