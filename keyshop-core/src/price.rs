//! Display-price parsing and formatting.
//!
//! Catalog prices travel as display strings (`"$9.99"`). The cart keeps the
//! string for rendering and a parsed amount for totals; a price that cannot
//! be read contributes nothing instead of failing the cart.

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency symbol stripped from display prices.
pub const CURRENCY_SYMBOL: char = '$';

static LEADING_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("price pattern should compile")
});

/// Parse a currency-formatted display string into an amount.
///
/// One leading `$` is stripped, then the longest leading decimal literal is
/// read. Signed amounts are kept as written; anything that does not yield a
/// finite amount parses as `0.0`.
#[must_use]
pub fn parse_price(display: &str) -> f64 {
    let trimmed = display.trim();
    let body = trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim_start();

    let Some(literal) = LEADING_DECIMAL.find(body) else {
        return 0.0;
    };

    match literal.as_str().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

/// Parse an optional display price, treating absence as zero.
#[must_use]
pub fn parse_price_opt(display: Option<&str>) -> f64 {
    display.map_or(0.0, parse_price)
}

/// Render an amount as `$X.YY`, negatives as `$-X.YY`. Non-finite amounts
/// render as `$0.00`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    let cents = if amount.is_finite() {
        (amount * 100.0).round()
    } else {
        0.0
    };
    // avoid "-0.00" for amounts that round to zero
    let amount = if cents == 0.0 { 0.0 } else { cents / 100.0 };
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_prices() {
        assert!((parse_price("$9.99") - 9.99).abs() < f64::EPSILON);
        assert!((parse_price("$29.99") - 29.99).abs() < f64::EPSILON);
        assert!((parse_price("  $ 7.5 ") - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_without_symbol() {
        assert!((parse_price("19.99") - 19.99).abs() < f64::EPSILON);
        assert!((parse_price(".5") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn reads_leading_number_like_parse_float() {
        assert!((parse_price("$9.99 USD") - 9.99).abs() < f64::EPSILON);
        assert!((parse_price("$1e2") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_prices_degrade_to_zero() {
        assert!(parse_price("$invalidPrice").abs() < f64::EPSILON);
        assert!(parse_price("Free ninety nine").abs() < f64::EPSILON);
        assert!(parse_price("Twenty Dollars").abs() < f64::EPSILON);
        assert!(parse_price("").abs() < f64::EPSILON);
        assert!(parse_price("$").abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(parse_price("inf").abs() < f64::EPSILON);
        assert!(parse_price("NaN").abs() < f64::EPSILON);
        assert!(parse_price("$1e400").abs() < f64::EPSILON);
    }

    #[test]
    fn keeps_sign_of_negative_prices() {
        assert!((parse_price("$-5.00") - -5.0).abs() < f64::EPSILON);
        assert!((parse_price("-2.5 off") - -2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn only_one_symbol_is_stripped() {
        assert!(parse_price("$$9.99").abs() < f64::EPSILON);
    }

    #[test]
    fn absent_price_is_zero() {
        assert!(parse_price_opt(None).abs() < f64::EPSILON);
        assert!((parse_price_opt(Some("$3.00")) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_price(19.98), "$19.98");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(7.5), "$7.50");
        assert_eq!(format_price(f64::NAN), "$0.00");
        assert_eq!(format_price(f64::INFINITY), "$0.00");
        assert_eq!(format_price(-3.0), "$-3.00");
        assert_eq!(format_price(-0.001), "$0.00");
    }
}
