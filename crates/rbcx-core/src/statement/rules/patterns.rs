//! Common regex patterns for statement field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numeric dates without a year: 03/01, 3-1
    pub static ref DATE_SHORT: Regex = Regex::new(
        r"^(\d{1,2})[/\-](\d{1,2})$"
    ).unwrap();

    // Numeric dates with a year: 03/01/2024, 3.1.24
    pub static ref DATE_FULL: Regex = Regex::new(
        r"^(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2}|\d{4})$"
    ).unwrap();

    // ISO-style dates: 2024-03-01, 2024/03/01
    pub static ref DATE_YMD: Regex = Regex::new(
        r"^(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})$"
    ).unwrap();

    // Day before month name: 01 MAR, 01MAR, 01-Mar-2024, 2nd March, 1 Feb 23
    pub static ref DATE_DAY_MONTH: Regex = Regex::new(
        r"^(\d{1,2})(?i:st|nd|rd|th)?[\s\-/.]*([A-Za-z]{3,9})\.?(?:[,\s\-/.]+(\d{4}|\d{2}))?$"
    ).unwrap();

    // Month name before day: MAR 01, Mar-01, Mar 1st, Jan. 15, 24
    pub static ref DATE_MONTH_DAY: Regex = Regex::new(
        r"^([A-Za-z]{3,9})\.?[\s\-/.]*(\d{1,2})(?i:st|nd|rd|th)?(?:[,\s\-/.]+(\d{4}|\d{2}))?$"
    ).unwrap();

    // Day number alone: 15, 2nd
    pub static ref DATE_DAY: Regex = Regex::new(
        r"^(\d{1,2})(?i:st|nd|rd|th)?$"
    ).unwrap();

    // Month name alone: MAR, March, Sept.
    pub static ref DATE_MONTH: Regex = Regex::new(
        r"^([A-Za-z]{3,9})\.?$"
    ).unwrap();

    // Foreign-currency detail lines printed under credit-card transactions
    pub static ref EXCHANGE_RATE: Regex = Regex::new(
        r"(?m)Exchange rate-([0-9]+\.[0-9]+)"
    ).unwrap();

    pub static ref FOREIGN_CURRENCY: Regex = Regex::new(
        r"(?m)Foreign Currency-([A-Z]+) ([0-9]+\.[0-9]+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_date_shapes() {
        assert!(DATE_SHORT.is_match("03/01"));
        assert!(DATE_SHORT.is_match("3-1"));
        assert!(DATE_FULL.is_match("03/01/2024"));
        assert!(DATE_FULL.is_match("03.01.24"));
        assert!(!DATE_SHORT.is_match("12.34"));
        assert!(!DATE_FULL.is_match("12.34"));
        assert!(!DATE_FULL.is_match("1,234.56"));
    }

    #[test]
    fn test_month_name_date_shapes() {
        assert!(DATE_DAY_MONTH.is_match("01-Mar-2024"));
        assert!(DATE_DAY_MONTH.is_match("3rd/Mar/24"));
        assert!(DATE_MONTH_DAY.is_match("Mar 1st"));
        assert!(DATE_MONTH_DAY.is_match("Jan. 15, 24"));
        assert!(DATE_DAY.is_match("2nd"));
        assert!(!DATE_DAY.is_match("123"));
        assert!(DATE_MONTH.is_match("Sept."));
        assert!(!DATE_MONTH.is_match("NEW BALANCE"));
    }

    #[test]
    fn test_foreign_currency_lines() {
        let caps = FOREIGN_CURRENCY.captures("Foreign Currency-USD 12.34").unwrap();
        assert_eq!(&caps[1], "USD");
        assert_eq!(&caps[2], "12.34");

        let caps = EXCHANGE_RATE.captures("Exchange rate-1.3521").unwrap();
        assert_eq!(&caps[1], "1.3521");
    }
}
