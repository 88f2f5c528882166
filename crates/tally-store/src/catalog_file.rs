//! On-disk shape of the catalog file.
//!
//! Current shape, one object per product keyed by variant:
//!
//! ```json
//! { "Honey": { "1000": 736, "500": 428 } }
//! ```
//!
//! Legacy shape, one price per sized name:
//!
//! ```json
//! { "Honey 1 kg": 736, "Honey 500 g": 428 }
//! ```
//!
//! Each entry is classified on its own, so a file may mix both. Legacy
//! names are split with [`split_sized_name`]; a name without a size becomes
//! its own product with [`VariantKey::IMPLICIT`]. When a legacy entry and a
//! current entry land on the same product variant, the current entry wins.
//! Two legacy entries that land on the same variant must agree on the price;
//! otherwise the file is rejected rather than silently dropping one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tally_commerce::catalog::split_sized_name;
use tally_commerce::{Catalog, Currency, Money, ProductName, VariantKey};

use crate::StoreError;

/// Parsed catalog file: product name (or legacy sized name) to entry.
pub type CatalogDocument = BTreeMap<String, CatalogEntry>;

/// One top-level entry of the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    /// Variant key (as a string) to price.
    Variants(BTreeMap<String, Number>),
    /// A single price for a sized name.
    Legacy(Number),
}

/// Convert a parsed file into a catalog.
///
/// Returns the catalog and the number of legacy entries that were migrated.
pub fn decode_catalog(
    doc: CatalogDocument,
    currency: Currency,
    path: &Path,
) -> Result<(Catalog, usize), StoreError> {
    let invalid = |reason: String| StoreError::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    let mut catalog = Catalog::new(currency);
    let mut legacy = Vec::new();

    for (name, entry) in doc {
        match entry {
            CatalogEntry::Variants(variants) => {
                let product = ProductName::new(&name)
                    .map_err(|e| invalid(format!("product {name:?}: {e}")))?;
                if variants.is_empty() {
                    return Err(invalid(format!("product {name:?} has no variants")));
                }
                for (key, price) in variants {
                    let key: VariantKey = key
                        .parse()
                        .map_err(|e| invalid(format!("product {name:?} variant {key:?}: {e}")))?;
                    let price = decode_price(&price, currency)
                        .map_err(|reason| invalid(format!("{name} {key}: {reason}")))?;
                    catalog.insert_variant(product.clone(), key, price);
                }
            }
            CatalogEntry::Legacy(price) => legacy.push((name, price)),
        }
    }

    let migrated = legacy.len();
    let mut seen: BTreeMap<(ProductName, VariantKey), (String, Money)> = BTreeMap::new();
    for (name, price) in legacy {
        let price =
            decode_price(&price, currency).map_err(|reason| invalid(format!("{name}: {reason}")))?;
        let (product, key) = match split_sized_name(&name) {
            Some(split) => split,
            None => (
                ProductName::new(&name).map_err(|e| invalid(format!("{name:?}: {e}")))?,
                VariantKey::IMPLICIT,
            ),
        };
        if let Some((other, other_price)) = seen.get(&(product.clone(), key)) {
            if *other_price != price {
                return Err(invalid(format!(
                    "legacy entries {other:?} ({other_price}) and {name:?} ({price}) \
                     both map to {product} {key} with different prices"
                )));
            }
            continue;
        }
        seen.insert((product.clone(), key), (name, price));
        if !catalog.contains(product.as_str(), key) {
            catalog.insert_variant(product, key, price);
        }
    }

    Ok((catalog, migrated))
}

/// Convert a catalog into the current file shape.
pub fn encode_catalog(catalog: &Catalog) -> CatalogDocument {
    catalog
        .products()
        .map(|product| {
            let variants = product
                .variants()
                .map(|(key, price)| (key.to_string(), encode_price(&price)))
                .collect();
            (product.name.to_string(), CatalogEntry::Variants(variants))
        })
        .collect()
}

/// Prices are written in major units: whole amounts as integers, others as decimals.
fn encode_price(price: &Money) -> Number {
    match price.whole_major() {
        Some(whole) => Number::from(whole),
        None => Number::from_f64(price.to_decimal()).unwrap_or_else(|| Number::from(0)),
    }
}

fn decode_price(number: &Number, currency: Currency) -> Result<Money, String> {
    let price = match number.as_i64() {
        Some(whole) => Money::try_from_major(whole, currency).ok_or("price out of range")?,
        None => {
            let value = number.as_f64().ok_or("price is not a number")?;
            Money::from_decimal(value, currency).map_err(|e| e.to_string())?
        }
    };
    if !price.is_positive() {
        return Err(format!("price {} is not positive", price.display()));
    }
    Ok(price)
}
