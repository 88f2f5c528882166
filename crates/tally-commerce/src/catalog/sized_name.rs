//! Parsing of legacy entries that encode the size in the name.
//!
//! Older data stored one price per name, with the size written into the
//! name itself ("Honey 1 kg", "Castor Oil 200 ml").

use crate::ids::{ProductName, VariantKey};

/// Split "Honey 1 kg" into ("Honey", 1000).
///
/// The last two whitespace-separated tokens must be an amount and a unit
/// (g, kg, ml, l and common spellings). Kilograms and litres are scaled to
/// grams and millilitres. Returns `None` when the name carries no size.
pub fn split_sized_name(raw: &str) -> Option<(ProductName, VariantKey)> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [head @ .., amount, unit] = tokens.as_slice() else {
        return None;
    };
    if head.is_empty() {
        return None;
    }

    let scale = unit_scale(unit)?;
    let amount: f64 = amount.parse().ok()?;
    let scaled = amount * scale;
    if !scaled.is_finite() || scaled < 1.0 || (scaled - scaled.round()).abs() > 1e-6 {
        return None;
    }

    let name = ProductName::new(head.join(" ")).ok()?;
    let key = VariantKey::new(scaled.round() as i64).ok()?;
    Some((name, key))
}

fn unit_scale(unit: &str) -> Option<f64> {
    match unit.to_lowercase().as_str() {
        "g" | "gm" | "gms" | "gram" | "grams" | "ml" => Some(1.0),
        "kg" | "kgs" | "l" | "ltr" | "litre" | "liter" | "litres" | "liters" => Some(1000.0),
        _ => None,
    }
}
