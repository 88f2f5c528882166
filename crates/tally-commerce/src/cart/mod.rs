//! Shopping cart module.
//!
//! Contains the cart, its lines, the flat discount and bill computation.

mod bill;
mod cart;
mod discount;

pub use bill::{compute_bill, Bill, BillLine};
pub use cart::{Cart, CartLine};
pub use discount::{Discount, STANDARD_DISCOUNT_PERCENT};
