//! Price extraction from exchange ticker bodies

use crate::fetch::ParseError;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parse a ticker body and pull the price found at `pointer`
///
/// Exchanges quote prices either as JSON strings (`"450.25"`) or as plain
/// numbers; both are accepted. The price must be strictly positive.
pub fn extract_price(body: &str, pointer: &str) -> Result<Decimal, ParseError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    let field = json
        .pointer(pointer)
        .ok_or_else(|| ParseError::MissingField(pointer.to_string()))?;

    let price = match field {
        Value::String(s) => parse_decimal(s.trim()),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
    .ok_or_else(|| ParseError::NotNumeric {
        path: pointer.to_string(),
        value: field.to_string(),
    })?;

    if price <= Decimal::ZERO {
        return Err(ParseError::NonPositive(price));
    }

    Ok(price)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
