//! Loosely typed spreadsheet cells and their conversions.
//!
//! Field workbooks are filled in by hand, so a numeric column may hold text
//! such as `" 4.5"` and a flag column may hold `1`, `TRUE` or `yes`. The
//! accessors here accept all of those and return `None` for anything that
//! cannot be read, leaving the recovery policy to the decoder.

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Text date formats accepted for survey dates, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m/%d/%y", "%d.%m.%Y"];

/// Largest serial number Excel renders as a date (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    /// Cell from raw text; blank text becomes [`Cell::Empty`].
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(raw.to_string())
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) | Self::Date(_) => false,
        }
    }

    /// Numeric value. Text is parsed after trimming; non-finite values are rejected.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Empty | Self::Bool(_) | Self::Date(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Trimmed text rendering. Whole numbers render without a fraction, so a
    /// transect labelled `1` reads back as `"1"`, not `"1.0"`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Number(n) => Some(format_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }

    /// Survey date rendered as ISO `YYYY-MM-DD` when it can be read as a date.
    ///
    /// Numbers are treated as Excel serial dates. Text that matches none of the
    /// accepted formats is returned trimmed, so it still forms a usable key.
    #[must_use]
    pub fn as_date_text(&self) -> Option<String> {
        match self {
            Self::Date(date) => Some(iso(*date)),
            Self::Number(n) => excel_serial_to_date(*n).map(iso).or_else(|| self.as_text()),
            Self::Text(text) => parse_date(text).map(iso).or_else(|| self.as_text()),
            Self::Empty | Self::Bool(_) => self.as_text(),
        }
    }

    /// Native-status flag.
    ///
    /// Accepts `1`/`0`, booleans, and the usual yes/no spellings. Anything
    /// else (including blanks) is unknown.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(n) if (*n - 1.0).abs() < f64::EPSILON => Some(true),
            Self::Number(n) if n.abs() < f64::EPSILON => Some(false),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "1.0" | "true" | "t" | "yes" | "y" | "native" => Some(true),
                "0" | "0.0" | "false" | "f" | "no" | "n" | "non-native" | "nonnative"
                | "non native" | "introduced" | "exotic" => Some(false),
                _ => None,
            },
            Self::Number(_) | Self::Empty | Self::Date(_) => None,
        }
    }
}

/// Parse a text date in any accepted format, including ISO date-times.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
                .ok()
                .map(|dt| dt.date())
        })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.floor() as u64))
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(Cell::from_text(" 4.5 ").as_f64(), Some(4.5));
        assert_eq!(Cell::from_text("n/a").as_f64(), None);
        assert_eq!(Cell::from_text("NaN").as_f64(), None);
        assert_eq!(Cell::Empty.as_f64(), None);
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(3.0).as_text().as_deref(), Some("3"));
        assert_eq!(Cell::Number(3.5).as_text().as_deref(), Some("3.5"));
        assert_eq!(Cell::from_text("  T1 ").as_text().as_deref(), Some("T1"));
    }

    #[rstest]
    #[case(Cell::from_text("2023-06-01"), "2023-06-01")]
    #[case(Cell::from_text("6/1/2023"), "2023-06-01")]
    #[case(Cell::from_text("2023-06-01 00:00:00"), "2023-06-01")]
    #[case(Cell::Number(45078.0), "2023-06-01")]
    #[case(Cell::Date(NaiveDate::from_ymd_opt(2023, 6, 1).expect("date")), "2023-06-01")]
    #[case(Cell::from_text("Spring survey"), "Spring survey")]
    fn dates_normalize_to_iso(#[case] cell: Cell, #[case] expected: &str) {
        assert_eq!(cell.as_date_text().as_deref(), Some(expected));
    }

    #[rstest]
    #[case(Cell::Number(1.0), Some(true))]
    #[case(Cell::Number(0.0), Some(false))]
    #[case(Cell::Bool(true), Some(true))]
    #[case(Cell::from_text("Yes"), Some(true))]
    #[case(Cell::from_text(" N "), Some(false))]
    #[case(Cell::from_text("non-native"), Some(false))]
    #[case(Cell::from_text("?"), None)]
    #[case(Cell::Number(2.0), None)]
    #[case(Cell::Empty, None)]
    fn flags_accept_common_spellings(#[case] cell: Cell, #[case] expected: Option<bool>) {
        assert_eq!(cell.as_flag(), expected);
    }
}
