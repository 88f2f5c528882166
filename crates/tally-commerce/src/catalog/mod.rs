//! Product catalog module.
//!
//! Contains products, their sized variants, the built-in default catalog
//! and the parser for legacy "Name 500 g" style entries.

mod catalog;
mod defaults;
mod product;
mod sized_name;

pub use catalog::Catalog;
pub use defaults::DEFAULT_PRODUCTS;
pub use product::Product;
pub use sized_name::split_sized_name;
