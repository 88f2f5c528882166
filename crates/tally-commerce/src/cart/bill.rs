//! Bill computation.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::cart::{Cart, CartLine, Discount};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::{ProductName, VariantKey};
use crate::money::Money;

/// A computed bill. Derived from the cart and catalog, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    /// One entry per distinct (product, variant), in order of first appearance.
    pub lines: Vec<BillLine>,
    /// Sum of unit prices over every cart line.
    pub subtotal: Money,
    /// Whether the discount flag was set.
    pub discount_applied: bool,
    /// Discount amount (zero when not applied).
    pub discount: Money,
    /// Subtotal minus discount.
    pub total: Money,
}

impl Bill {
    /// Total number of units billed.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Render the bill as plain text.
    pub fn render(&self) -> String {
        let mut out = String::from("Bill\n");
        for line in &self.lines {
            let _ = writeln!(
                out,
                "- {} {} x{}: {}",
                line.product, line.variant, line.quantity, line.line_total
            );
        }
        let _ = write!(
            out,
            "\nSubtotal: {}\nDiscount: -{}\nTotal: {}",
            self.subtotal, self.discount, self.total
        );
        out
    }
}

/// Bill entry for one distinct cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillLine {
    /// Product name.
    pub product: ProductName,
    /// Variant key.
    pub variant: VariantKey,
    /// Number of occurrences in the cart.
    pub quantity: u64,
    /// Unit price.
    pub unit_price: Money,
    /// quantity * unit_price.
    pub line_total: Money,
}

/// Compute the bill for a cart.
///
/// Every line must resolve in the catalog. The first line that does not
/// aborts the computation with `CommerceError::StaleCartLine`, so a removed
/// product can never contribute a zero or wrong cost.
pub fn compute_bill(catalog: &Catalog, cart: &Cart) -> Result<Bill, CommerceError> {
    let currency = catalog.currency();
    let mut lines: Vec<BillLine> = Vec::new();
    let mut index: HashMap<&CartLine, usize> = HashMap::new();

    for line in &cart.lines {
        if let Some(&i) = index.get(line) {
            lines[i].quantity += 1;
            continue;
        }
        let unit_price = catalog
            .price_of(line.product.as_str(), line.variant)
            .map_err(|_| CommerceError::StaleCartLine {
                product: line.product.to_string(),
                variant: line.variant.get(),
            })?;
        index.insert(line, lines.len());
        lines.push(BillLine {
            product: line.product.clone(),
            variant: line.variant,
            quantity: 1,
            unit_price,
            line_total: unit_price,
        });
    }

    for line in &mut lines {
        let quantity = i64::try_from(line.quantity).map_err(|_| CommerceError::Overflow)?;
        line.line_total = line.unit_price.try_multiply(quantity)?;
    }

    let subtotal = Money::try_sum(lines.iter().map(|l| &l.line_total), currency)?;
    let discount = if cart.discount {
        Discount::standard().calculate(&subtotal)?
    } else {
        Money::zero(currency)
    };
    let total = subtotal.try_subtract(&discount)?;

    Ok(Bill {
        lines,
        subtotal,
        discount_applied: cart.discount,
        discount,
        total,
    })
}
