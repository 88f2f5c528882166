//! Flat cart discount.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// Percentage taken off the subtotal when the cart's discount flag is set.
pub const STANDARD_DISCOUNT_PERCENT: u32 = 10;

/// A whole-cart percentage discount. Not per item and not stackable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Percentage off (0 - 100).
    pub percent: u32,
}

impl Discount {
    /// Create a discount of the given percentage, capped at 100.
    pub fn flat_percent(percent: u32) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    /// The discount applied by the cart's discount flag.
    pub fn standard() -> Self {
        Self::flat_percent(STANDARD_DISCOUNT_PERCENT)
    }

    /// Calculate the discount amount for a given subtotal.
    ///
    /// Rounded to the currency's minor unit exactly once.
    pub fn calculate(&self, subtotal: &Money) -> Result<Money, CommerceError> {
        subtotal.percentage(self.percent)
    }

    /// Display label (e.g., "10% off").
    pub fn label(&self) -> String {
        format!("{}% off", self.percent)
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::standard()
    }
}
