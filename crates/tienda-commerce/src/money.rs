//! Money type for representing monetary values.
//!
//! Amounts are kept in minor units (cents) so totals are exact sums of
//! integers. Unit prices keep the Order API's sub-cent precision as
//! [`UnitPrice`] and are rounded to cents only once a total is formed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    MXN,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::MXN => "MXN",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::MXN => "MX$",
            Currency::CAD => "CA$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "MXN" => Some(Currency::MXN),
            "CAD" => Some(Currency::CAD),
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
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    ///
    /// Built from the integer amount so every value renders with exactly
    /// the currency's number of decimals.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places).unsigned_abs();
        let magnitude = self.amount_cents.unsigned_abs();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        if places == 0 {
            return format!("{}{}", sign, magnitude);
        }
        format!(
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Millionths of a major unit per major unit.
const MICROS_PER_UNIT: i64 = 1_000_000;

/// A unit price at sub-cent precision, in millionths of the major unit.
///
/// Prices such as `0.333` are kept exactly; multiplying and summing happen
/// at this precision and [`UnitPrice::round`] produces the cent amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UnitPrice {
    /// Amount in millionths of the major unit.
    pub amount_micros: i64,
    /// The currency.
    pub currency: Currency,
}

impl UnitPrice {
    pub fn new(amount_micros: i64, currency: Currency) -> Self {
        Self {
            amount_micros,
            currency,
        }
    }

    /// Convert a decimal amount. Returns None if it is not finite or does
    /// not fit.
    ///
    /// ```
    /// use tienda_commerce::money::{Currency, UnitPrice};
    /// let price = UnitPrice::from_decimal(0.333, Currency::USD).unwrap();
    /// assert_eq!(price.amount_micros, 333_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = (amount * MICROS_PER_UNIT as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<UnitPrice> {
        self.amount_micros
            .checked_mul(factor)
            .map(|micros| UnitPrice::new(micros, self.currency))
    }

    /// Add another price, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &UnitPrice) -> Option<UnitPrice> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_micros
            .checked_add(other.amount_micros)
            .map(|micros| UnitPrice::new(micros, self.currency))
    }

    /// Sum prices, returning None on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a UnitPrice>,
        currency: Currency,
    ) -> Option<UnitPrice> {
        iter.try_fold(UnitPrice::zero(currency), |acc, p| acc.try_add(p))
    }

    /// Round half away from zero to the currency's minor unit.
    pub fn round(&self) -> Money {
        let per_minor = MICROS_PER_UNIT / 10_i64.pow(self.currency.decimal_places());
        let whole = self.amount_micros / per_minor;
        let rest = self.amount_micros % per_minor;
        let cents = if rest.abs() * 2 >= per_minor {
            whole + self.amount_micros.signum()
        } else {
            whole
        };
        Money::new(cents, self.currency)
    }

    /// Rounded amount formatted for display (e.g. "$12.50").
    pub fn display(&self) -> String {
        self.round().display()
    }
}

impl From<Money> for UnitPrice {
    fn from(money: Money) -> Self {
        let per_minor = MICROS_PER_UNIT / 10_i64.pow(money.currency.decimal_places());
        Self::new(money.amount_cents.saturating_mul(per_minor), money.currency)
    }
}

/// A decimal amount as the Order API sends it: either a JSON number or a
/// numeric string such as `"12.50"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAmount {
    Number(f64),
    Text(String),
}

impl WireAmount {
    /// Numeric value, if the amount is finite.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            WireAmount::Number(n) => *n,
            WireAmount::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Convert to a unit price in the given currency.
    pub fn to_unit_price(&self, currency: Currency) -> Option<UnitPrice> {
        UnitPrice::from_decimal(self.to_f64()?, currency)
    }

    /// Convert to Money in the given currency, rounded to the minor unit.
    pub fn to_money(&self, currency: Currency) -> Option<Money> {
        self.to_unit_price(currency).map(|p| p.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_two_decimals() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(500, Currency::USD).display(), "$5.00");
        assert_eq!(Money::new(7, Currency::USD).display(), "$0.07");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
        assert_eq!(Money::new(-150, Currency::USD).display(), "$-1.50");
    }

    #[test]
    fn test_money_display_symbols() {
        assert_eq!(Money::new(1250, Currency::EUR).display(), "\u{20ac}12.50");
        assert_eq!(Money::new(1250, Currency::MXN).to_string(), "MX$12.50");
    }

    #[test]
    fn test_try_sum() {
        let values = [
            UnitPrice::new(1_000_000, Currency::USD),
            UnitPrice::new(2_500_000, Currency::USD),
        ];
        let total = UnitPrice::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(total.round().amount_cents, 350);
        assert!(UnitPrice::try_sum(values.iter(), Currency::EUR).is_none());

        let huge = [UnitPrice::new(i64::MAX, Currency::USD), UnitPrice::new(1, Currency::USD)];
        assert!(UnitPrice::try_sum(huge.iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_wire_amount_number_and_text() {
        let n: WireAmount = serde_json::from_str("12.5").unwrap();
        assert_eq!(n.to_money(Currency::USD).unwrap().amount_cents, 1250);

        let t: WireAmount = serde_json::from_str("\" 3.99 \"").unwrap();
        assert_eq!(t.to_money(Currency::USD).unwrap().amount_cents, 399);

        let bad: WireAmount = serde_json::from_str("\"abc\"").unwrap();
        assert!(bad.to_money(Currency::USD).is_none());
    }

    #[test]
    fn test_unit_price_rounds_once() {
        let price = UnitPrice::from_decimal(0.333, Currency::USD).unwrap();
        assert_eq!(price.round().amount_cents, 33);

        let line = price.try_multiply(3).unwrap();
        assert_eq!(line.amount_micros, 999_000);
        assert_eq!(line.display(), "$1.00");
    }

    #[test]
    fn test_unit_price_rounding_half_away_from_zero() {
        assert_eq!(UnitPrice::new(5_000, Currency::USD).round().amount_cents, 1);
        assert_eq!(UnitPrice::new(4_999, Currency::USD).round().amount_cents, 0);
        assert_eq!(UnitPrice::new(-5_000, Currency::USD).round().amount_cents, -1);
        assert_eq!(UnitPrice::new(12_345_678, Currency::USD).round().amount_cents, 1235);
    }

    #[test]
    fn test_unit_price_rejects_out_of_range() {
        assert!(UnitPrice::from_decimal(1e17, Currency::USD).is_none());
        assert!(UnitPrice::from_decimal(f64::NAN, Currency::USD).is_none());
        assert!(UnitPrice::new(i64::MAX / 2 + 1, Currency::USD).try_multiply(2).is_none());
    }

    #[test]
    fn test_unit_price_from_money() {
        let price = UnitPrice::from(Money::new(1990, Currency::USD));
        assert_eq!(price.amount_micros, 19_900_000);
        assert_eq!(price.round(), Money::new(1990, Currency::USD));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
