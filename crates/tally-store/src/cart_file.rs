//! On-disk shape of the cart file.
//!
//! Current shape keeps the lines and the discount flag together:
//!
//! ```json
//! { "lines": [["Honey", 1000], ["Honey", 500]], "discount": false }
//! ```
//!
//! A bare array is the legacy shape and implies the discount is off. Its
//! elements may be `[name, variant]` pairs or bare sized names such as
//! `"Honey 1 kg"`, which are split the same way legacy catalog entries are.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_commerce::catalog::split_sized_name;
use tally_commerce::{Cart, CartLine, ProductName, VariantKey};

use crate::StoreError;

/// Parsed cart file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartDocument {
    /// Lines plus discount flag.
    Current {
        lines: Vec<LineEntry>,
        #[serde(default)]
        discount: bool,
    },
    /// Lines only.
    Legacy(Vec<LineEntry>),
}

/// One element of the `lines` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineEntry {
    /// `[name, variant]`
    Pair(String, i64),
    /// `"Name 500 g"`
    Bare(String),
}

/// Convert a parsed file into a cart.
///
/// Returns the cart and whether the file used any legacy shape.
pub fn decode_cart(doc: CartDocument, path: &Path) -> Result<(Cart, bool), StoreError> {
    let (entries, discount, mut legacy) = match doc {
        CartDocument::Current { lines, discount } => (lines, discount, false),
        CartDocument::Legacy(lines) => (lines, false, true),
    };

    let invalid = |reason: String| StoreError::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    let mut cart = Cart::new();
    cart.discount = discount;
    for (i, entry) in entries.into_iter().enumerate() {
        let line = match entry {
            LineEntry::Pair(name, variant) => {
                let product = ProductName::new(&name)
                    .map_err(|e| invalid(format!("line {i}: {e}")))?;
                let variant = VariantKey::new(variant)
                    .map_err(|e| invalid(format!("line {i}: {e}")))?;
                CartLine::new(product, variant)
            }
            LineEntry::Bare(name) => {
                legacy = true;
                match split_sized_name(&name) {
                    Some((product, variant)) => CartLine::new(product, variant),
                    None => CartLine::new(
                        ProductName::new(&name).map_err(|e| invalid(format!("line {i}: {e}")))?,
                        VariantKey::IMPLICIT,
                    ),
                }
            }
        };
        cart.lines.push(line);
    }

    Ok((cart, legacy))
}

/// Convert a cart into the current file shape.
pub fn encode_cart(cart: &Cart) -> CartDocument {
    CartDocument::Current {
        lines: cart
            .lines
            .iter()
            .map(|l| LineEntry::Pair(l.product.to_string(), i64::from(l.variant.get())))
            .collect(),
        discount: cart.discount,
    }
}
