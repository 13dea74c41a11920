//! Amount parsing for statement columns.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a statement amount (e.g., "$1,234.56", "-4.50", "1234.56").
///
/// Thousands separators and the dollar sign are removed first; a field that
/// is empty after that counts as zero. Returns `None` if what remains is not
/// a number.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace([',', '$'], "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(parse_amount("$1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("-$4.50"), Some(dec("-4.50")));
        assert_eq!(parse_amount(" 12,345,678.90 "), Some(dec("12345678.90")));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_amount("-4.50"), Some(dec("-4.50")));
        assert_eq!(parse_amount("+4.50"), Some(dec("4.50")));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
        assert_eq!(parse_amount("$"), Some(Decimal::ZERO));
        assert_eq!(parse_amount(" , "), Some(Decimal::ZERO));
    }

    #[test]
    fn test_rejects_text() {
        assert_eq!(parse_amount("COFFEE"), None);
        assert_eq!(parse_amount("4.50 CR"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }
}
