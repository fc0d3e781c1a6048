use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal separator used when rendering and parsing price text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecimalSeparator {
    /// "12,34", the app's default locale.
    #[default]
    Comma,
    /// "12.34".
    Point,
}

impl DecimalSeparator {
    fn as_char(self) -> char {
        match self {
            DecimalSeparator::Comma => ',',
            DecimalSeparator::Point => '.',
        }
    }
}

/// Normalizes raw price keystrokes into fixed-point display text.
///
/// Every non-digit is stripped and the remaining digits are read as minor
/// currency units: "1234" becomes "12,34" and "R$ 5" becomes "0,05". An
/// input with no digits at all yields `None`; callers show their
/// placeholder instead of a bogus amount.
pub fn normalize_price_input(raw: &str, separator: DecimalSeparator) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let (integer, cents) = if digits.len() <= 2 {
        ("0".to_string(), format!("{:0>2}", digits))
    } else {
        let split = digits.len() - 2;
        let trimmed = digits[..split].trim_start_matches('0');
        let integer = if trimmed.is_empty() { "0" } else { trimmed };
        (integer.to_string(), digits[split..].to_string())
    };

    Some(format!("{}{}{}", integer, separator.as_char(), cents))
}

/// Parses display text produced by [`normalize_price_input`] back into a
/// decimal amount ("12,34" -> 12.34). `None` for text that is not a number
/// under the given separator.
pub fn parse_price(display: &str, separator: DecimalSeparator) -> Option<Decimal> {
    let normalized = display.trim().replace(separator.as_char(), ".");
    Decimal::from_str(&normalized).ok()
}

/// Relative position of a candidate price against a reference price.
///
/// The presentation layer maps the outcome to a color; this module only
/// classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceComparison {
    Higher,
    Lower,
    Equal,
}

/// Classifies `candidate` against `reference` with strict ordering.
pub fn compare_prices(candidate: Decimal, reference: Decimal) -> PriceComparison {
    if candidate > reference {
        PriceComparison::Higher
    } else if candidate < reference {
        PriceComparison::Lower
    } else {
        PriceComparison::Equal
    }
}
