//! Pay-date and timestamp formatting.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::DateFormatStyle;

/// Formats a pay date in the requested style.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payslip_engine::format::format_pay_date;
/// use payslip_engine::models::DateFormatStyle;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(format_pay_date(date, DateFormatStyle::OrdinalShort), "1st-Jan-26");
/// assert_eq!(format_pay_date(date, DateFormatStyle::Alt), "01-Jan-2026");
/// ```
pub fn format_pay_date(date: NaiveDate, style: DateFormatStyle) -> String {
    match style {
        DateFormatStyle::OrdinalShort => format!(
            "{}{}-{}",
            date.day(),
            ordinal_suffix(date.day()),
            date.format("%b-%y")
        ),
        DateFormatStyle::Alt => date.format("%d-%b-%Y").to_string(),
    }
}

/// Formats the generated-at timestamp shown in the payslip footer.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinal_short_style() {
        assert_eq!(
            format_pay_date(date(2026, 1, 1), DateFormatStyle::OrdinalShort),
            "1st-Jan-26"
        );
        assert_eq!(
            format_pay_date(date(2026, 2, 22), DateFormatStyle::OrdinalShort),
            "22nd-Feb-26"
        );
        assert_eq!(
            format_pay_date(date(2025, 12, 3), DateFormatStyle::OrdinalShort),
            "3rd-Dec-25"
        );
        assert_eq!(
            format_pay_date(date(2026, 8, 31), DateFormatStyle::OrdinalShort),
            "31st-Aug-26"
        );
    }

    #[test]
    fn test_teen_days_use_th() {
        assert_eq!(
            format_pay_date(date(2026, 3, 11), DateFormatStyle::OrdinalShort),
            "11th-Mar-26"
        );
        assert_eq!(
            format_pay_date(date(2026, 3, 12), DateFormatStyle::OrdinalShort),
            "12th-Mar-26"
        );
        assert_eq!(
            format_pay_date(date(2026, 3, 13), DateFormatStyle::OrdinalShort),
            "13th-Mar-26"
        );
    }

    #[test]
    fn test_alt_style_zero_pads_day() {
        assert_eq!(
            format_pay_date(date(2026, 1, 1), DateFormatStyle::Alt),
            "01-Jan-2026"
        );
        assert_eq!(
            format_pay_date(date(2026, 11, 30), DateFormatStyle::Alt),
            "30-Nov-2026"
        );
    }

    #[test]
    fn test_timestamp_format() {
        let ts = DateTime::parse_from_rfc3339("2026-01-31T09:05:07Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(ts), "2026-01-31 09:05:07 UTC");
    }
}
