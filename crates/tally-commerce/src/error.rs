//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, cart and bill operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product name is empty or whitespace.
    #[error("Product name must not be empty")]
    InvalidProductName,

    /// Variant key is zero, negative or out of range.
    #[error("Invalid variant key: {0} (must be a positive whole number)")]
    InvalidVariantKey(i64),

    /// Price is not a positive amount, or could not be parsed.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but does not sell this variant.
    #[error("Variant {variant} not found for product {product}")]
    VariantNotFound { product: String, variant: u32 },

    /// A cart line no longer resolves in the catalog.
    #[error("Stale cart item: {product} {variant} is no longer in the catalog")]
    StaleCartLine { product: String, variant: u32 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
