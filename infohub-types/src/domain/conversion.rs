//! Currency codes and conversion results.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error returned when a currency code fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid currency code: {0}")]
pub struct InvalidCurrencyCode(pub String);

/// A validated ISO-like currency code.
///
/// Always uppercase and exactly three ASCII letters. Construction normalizes
/// the input (trim + uppercase) so "usd" and " USD " both become `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = "USD")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a raw query-parameter value.
    pub fn parse(input: &str) -> Result<Self, InvalidCurrencyCode> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.len() == 3 && normalized.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(normalized))
        } else {
            Err(InvalidCurrencyCode(input.trim().to_string()))
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one currency conversion.
///
/// Invariants: `rate > 0`, `amount >= 0`, `converted = amount * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    /// Source currency code
    pub from: CurrencyCode,
    /// Target currency code
    pub to: CurrencyCode,
    /// Units of `to` per one unit of `from`
    #[schema(example = 0.012)]
    pub rate: f64,
    /// Input amount in `from` currency
    #[schema(example = 100.0)]
    pub amount: f64,
    /// `amount * rate` in `to` currency
    #[schema(example = 1.2)]
    pub converted: f64,
}

impl ConversionResult {
    /// Builds a conversion result from a validated amount and a provider rate.
    pub fn new(from: CurrencyCode, to: CurrencyCode, rate: f64, amount: f64) -> Self {
        Self {
            from,
            to,
            rate,
            amount,
            converted: amount * rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(CurrencyCode::parse("usd").unwrap().as_str(), "USD");
        assert_eq!(CurrencyCode::parse(" inr ").unwrap().as_str(), "INR");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert!(CurrencyCode::parse("").is_err());
        assert!(CurrencyCode::parse("US").is_err());
        assert!(CurrencyCode::parse("EURO").is_err());
        assert!(CurrencyCode::parse("U5D").is_err());
    }

    #[test]
    fn test_conversion_multiplies_amount_by_rate() {
        let result = ConversionResult::new(
            CurrencyCode::parse("INR").unwrap(),
            CurrencyCode::parse("USD").unwrap(),
            0.012,
            100.0,
        );
        assert_eq!(result.converted, 1.2);
    }

    #[test]
    fn test_serializes_as_plain_strings() {
        let result = ConversionResult::new(
            CurrencyCode::parse("INR").unwrap(),
            CurrencyCode::parse("USD").unwrap(),
            0.012,
            100.0,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["from"], "INR");
        assert_eq!(json["to"], "USD");
        assert_eq!(json["converted"], 1.2);
    }
}
