//! Calendar-date parsing for statement columns.
//!
//! Statement rows print dates in several shapes (`03/01`, `MAR 01`,
//! `01-Mar-2024`, `Mar 1st`, `2024-03-01`, even a lone `MAR` or `15`).
//! Fields missing from the text are filled from a reference date; a day
//! taken from the reference is clamped to the end of the parsed month. Text
//! that is not a whole date is rejected; nothing is guessed out of
//! surrounding words.

use chrono::{Datelike, Local, NaiveDate};

use super::patterns::{
    DATE_DAY, DATE_DAY_MONTH, DATE_FULL, DATE_MONTH, DATE_MONTH_DAY, DATE_SHORT, DATE_YMD,
};

/// Date parser with a reference date for partial dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser {
    reference: NaiveDate,
}

impl DateParser {
    /// Create a parser that fills missing fields from `reference`.
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// Create a parser anchored at today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The date partial dates are completed from.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Parse a date field. Returns `None` if the text is not a date.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();

        if let Some(caps) = DATE_YMD.captures(text) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = DATE_FULL.captures(text) {
            let (month, day) = month_first(caps[1].parse().ok()?, caps[2].parse().ok()?);
            return NaiveDate::from_ymd_opt(parse_year(&caps[3])?, month, day);
        }

        if let Some(caps) = DATE_SHORT.captures(text) {
            let (month, day) = month_first(caps[1].parse().ok()?, caps[2].parse().ok()?);
            return NaiveDate::from_ymd_opt(self.reference.year(), month, day);
        }

        if let Some(caps) = DATE_MONTH_DAY.captures(text) {
            let month = month_from_name(&caps[1])?;
            let day: u32 = caps[2].parse().ok()?;
            let year = match caps.get(3) {
                Some(y) => parse_year(y.as_str())?,
                None => self.reference.year(),
            };
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = DATE_DAY_MONTH.captures(text) {
            let day: u32 = caps[1].parse().ok()?;
            let month = month_from_name(&caps[2])?;
            let year = match caps.get(3) {
                Some(y) => parse_year(y.as_str())?,
                None => self.reference.year(),
            };
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = DATE_DAY.captures(text) {
            let day: u32 = caps[1].parse().ok()?;
            return NaiveDate::from_ymd_opt(self.reference.year(), self.reference.month(), day);
        }

        if let Some(caps) = DATE_MONTH.captures(text) {
            let month = month_from_name(&caps[1])?;
            let year = self.reference.year();
            let day = self.reference.day().min(last_day_of_month(year, month)?);
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        None
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::today()
    }
}

/// Month first unless the first number cannot be a month.
fn month_first(first: u32, second: u32) -> (u32, u32) {
    if first > 12 && second <= 12 {
        (second, first)
    } else {
        (first, second)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 {
        // Two-digit year: 00-50 are 2000s, 51-99 are 1900s
        if year <= 50 {
            Some(2000 + year)
        } else {
            Some(1900 + year)
        }
    } else {
        Some(year)
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_ascii_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}
