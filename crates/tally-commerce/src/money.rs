//! Money type for representing monetary values.
//!
//! Amounts are held in the currency's minor unit (paise, cents) as integers,
//! so sums and line totals are exact. Rounding happens only when a
//! percentage is taken.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

const MINOR_DIGITS: u32 = 2;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Text printed in front of an amount (e.g., "Rs ").
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::INR => "Rs ",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of decimal places. Every supported currency has two, so a
    /// discount rounded to the minor unit is rounded to 2 decimals.
    pub fn decimal_places(&self) -> u32 {
        MINOR_DIGITS
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a whole major-unit amount.
    ///
    /// # Panics
    /// Panics on overflow. Use `try_from_major` for untrusted input.
    pub fn from_major(major: i64, currency: Currency) -> Self {
        Self::try_from_major(major, currency).expect("Overflow converting major units")
    }

    /// Create a Money value from a whole major-unit amount, checking for overflow.
    pub fn try_from_major(major: i64, currency: Currency) -> Option<Self> {
        major
            .checked_mul(currency.minor_per_major())
            .map(|minor| Self::new(minor, currency))
    }

    /// Create a Money value from a decimal major-unit amount.
    ///
    /// The value is rounded half away from zero to the currency's precision.
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Parse a decimal string such as "736" or "12.50" without going through floats.
    ///
    /// ```
    /// use tally_commerce::money::{Money, Currency};
    /// let price = Money::parse("49.9", Currency::INR).unwrap();
    /// assert_eq!(price.amount_minor, 4990);
    /// ```
    pub fn parse(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidPrice(input.to_string());
        let text = input.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let places = currency.decimal_places() as usize;
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
            || fraction.len() > places
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{:0<places$}", fraction);
            padded.parse().map_err(|_| invalid())?
        };

        let minor = whole
            .checked_mul(currency.minor_per_major())
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self::new(if negative { -minor } else { minor }, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Convert to a decimal major-unit value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Whole major units, if the amount has no fractional part.
    pub fn whole_major(&self) -> Option<i64> {
        let per = self.currency.minor_per_major();
        (self.amount_minor % per == 0).then(|| self.amount_minor / per)
    }

    /// Format as a display string (e.g., "Rs 49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.prefix(), self.display_amount())
    }

    /// Format as a display string without prefix (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let per = self.currency.minor_per_major();
        let places = self.currency.decimal_places() as usize;
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let whole = abs / per as u64;
        if places == 0 {
            return format!("{}{}", sign, whole);
        }
        let fraction = abs % per as u64;
        format!("{}{}.{:0places$}", sign, whole, fraction)
    }

    /// Add another Money value.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.same_currency(other)?;
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.same_currency(other)?;
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Take a whole-number percentage, rounding half away from zero to the minor unit.
    pub fn percentage(&self, percent: u32) -> Result<Money, CommerceError> {
        let scaled = self
            .amount_minor
            .checked_mul(i64::from(percent))
            .ok_or(CommerceError::Overflow)?;
        let magnitude = (scaled.unsigned_abs() + 50) / 100;
        let amount = i64::try_from(magnitude).map_err(|_| CommerceError::Overflow)?;
        Ok(Money::new(
            if scaled < 0 { -amount } else { amount },
            self.currency,
        ))
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    fn same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(736, Currency::INR);
        assert_eq!(m.amount_minor, 73600);
        assert_eq!(Money::from_major(100, Currency::GBP).amount_minor, 10000);
    }

    #[test]
    fn test_money_parse() {
        assert_eq!(Money::parse("736", Currency::INR).unwrap().amount_minor, 73600);
        assert_eq!(Money::parse("12.5", Currency::INR).unwrap().amount_minor, 1250);
        assert_eq!(Money::parse("0.01", Currency::INR).unwrap().amount_minor, 1);
        assert_eq!(Money::parse(".75", Currency::INR).unwrap().amount_minor, 75);
        assert_eq!(Money::parse("-3", Currency::INR).unwrap().amount_minor, -300);
    }

    #[test]
    fn test_money_parse_rejects_garbage() {
        for bad in ["", ".", "abc", "1.234", "1,50", "1e3", "--1"] {
            assert!(Money::parse(bad, Currency::INR).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD).unwrap();
        assert_eq!(m.amount_minor, 4999);
        assert!(Money::from_decimal(f64::NAN, Currency::USD).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(190000, Currency::INR).display(), "Rs 1900.00");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(-5, Currency::USD).display_amount(), "-0.05");
        assert_eq!(Money::new(150, Currency::EUR).display(), "\u{20ac}1.50");
    }

    #[test]
    fn test_money_whole_major() {
        assert_eq!(Money::new(73600, Currency::INR).whole_major(), Some(736));
        assert_eq!(Money::new(1250, Currency::INR).whole_major(), None);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(300, Currency::INR);
        assert_eq!(a.try_add(&b).unwrap().amount_minor, 1300);
        assert_eq!(a.try_subtract(&b).unwrap().amount_minor, 700);
        assert_eq!(a.try_multiply(3).unwrap().amount_minor, 3000);
    }

    #[test]
    fn test_money_overflow() {
        let max = Money::new(i64::MAX, Currency::INR);
        assert_eq!(max.try_multiply(2), Err(CommerceError::Overflow));
        assert_eq!(
            max.try_add(&Money::new(1, Currency::INR)),
            Err(CommerceError::Overflow)
        );
    }

    #[test]
    fn test_money_percentage_rounds_once() {
        assert_eq!(Money::new(190000, Currency::INR).percentage(10).unwrap().amount_minor, 19000);
        // 10% of 19.99 is 1.999, which rounds to 2.00
        assert_eq!(Money::new(1999, Currency::INR).percentage(10).unwrap().amount_minor, 200);
        // 10% of 0.05 is 0.005, which rounds half up to 0.01
        assert_eq!(Money::new(5, Currency::INR).percentage(10).unwrap().amount_minor, 1);
        assert_eq!(Money::new(4, Currency::INR).percentage(10).unwrap().amount_minor, 0);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let usd = Money::new(1000, Currency::USD);
        assert!(matches!(
            inr.try_add(&usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
        assert_eq!(Currency::from_code("JPY"), None);
    }

    #[test]
    fn test_every_currency_keeps_two_decimals() {
        for currency in [Currency::INR, Currency::USD, Currency::EUR, Currency::GBP] {
            assert_eq!(currency.minor_per_major(), 100);
            let price = Money::from_decimal(428.5, currency).unwrap();
            assert_eq!(price.amount_minor, 42850);
            // 10% of 15.00 is 1.50, not rounded to a whole unit
            let discount = Money::from_major(15, currency).percentage(10).unwrap();
            assert_eq!(discount.amount_minor, 150);
        }
    }

    #[test]
    fn test_try_sum() {
        let prices = [Money::new(73600, Currency::INR), Money::new(42800, Currency::INR)];
        assert_eq!(
            Money::try_sum(prices.iter(), Currency::INR).unwrap().amount_minor,
            116400
        );
        assert!(Money::try_sum([].iter(), Currency::INR).unwrap().is_zero());
    }
}
