//! Newtype identifiers for catalog entries.
//!
//! A product is identified by its name and a sellable size by its variant key.
//! Both are validated on construction so the rest of the crate can rely on
//! them being well formed.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Unique, case-sensitive product name.
///
/// Surrounding whitespace is trimmed; the remaining text must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a product name, rejecting empty input.
    pub fn new(name: impl AsRef<str>) -> Result<Self, CommerceError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommerceError::InvalidProductName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = CommerceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl FromStr for ProductName {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by ProductName be queried with &str.
impl Borrow<str> for ProductName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A sellable size of a product, e.g. grams or millilitres.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct VariantKey(u32);

impl VariantKey {
    /// Key used for products that were stored without any size information.
    pub const IMPLICIT: VariantKey = VariantKey(1);

    /// Create a variant key, rejecting zero, negative and oversized values.
    pub fn new(key: i64) -> Result<Self, CommerceError> {
        match u32::try_from(key) {
            Ok(k) if k > 0 => Ok(Self(k)),
            _ => Err(CommerceError::InvalidVariantKey(key)),
        }
    }

    /// Get the raw key.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for VariantKey {
    type Error = CommerceError;

    fn try_from(key: i64) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl From<VariantKey> for u32 {
    fn from(key: VariantKey) -> Self {
        key.0
    }
}

impl FromStr for VariantKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| CommerceError::InvalidVariantKey(0))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_trims() {
        let name = ProductName::new("  Honey ").unwrap();
        assert_eq!(name.as_str(), "Honey");
    }

    #[test]
    fn test_product_name_rejects_blank() {
        assert_eq!(ProductName::new(""), Err(CommerceError::InvalidProductName));
        assert_eq!(ProductName::new("   "), Err(CommerceError::InvalidProductName));
    }

    #[test]
    fn test_product_name_case_sensitive() {
        let a = ProductName::new("honey").unwrap();
        let b = ProductName::new("Honey").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_variant_key_bounds() {
        assert!(VariantKey::new(1).is_ok());
        assert_eq!(VariantKey::new(0), Err(CommerceError::InvalidVariantKey(0)));
        assert_eq!(VariantKey::new(-5), Err(CommerceError::InvalidVariantKey(-5)));
        assert!(VariantKey::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_variant_key_from_str() {
        let key: VariantKey = "500".parse().unwrap();
        assert_eq!(key.get(), 500);
        assert!("abc".parse::<VariantKey>().is_err());
    }

    #[test]
    fn test_serde_validates() {
        let key: VariantKey = serde_json::from_str("1000").unwrap();
        assert_eq!(key.get(), 1000);
        assert!(serde_json::from_str::<VariantKey>("0").is_err());
        assert!(serde_json::from_str::<ProductName>("\"\"").is_err());
    }
}
