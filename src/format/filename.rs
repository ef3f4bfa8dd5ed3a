//! Download filename derivation.

use chrono::NaiveDate;

use crate::models::DateFormatStyle;

use super::format_pay_date;

/// Derives the PDF download filename from the employee name and pay date.
///
/// Every character of the name that is not ASCII alphanumeric is replaced
/// with `-`, one for one, so the result is always filesystem- and
/// header-safe.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payslip_engine::format::payslip_filename;
/// use payslip_engine::models::DateFormatStyle;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(
///     payslip_filename("Jane Doe", date, DateFormatStyle::OrdinalShort),
///     "Payslip-Jane-Doe-31st-Jan-26.pdf"
/// );
/// ```
pub fn payslip_filename(full_name: &str, pay_date: NaiveDate, style: DateFormatStyle) -> String {
    let safe_name: String = full_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    format!(
        "Payslip-{}-{}.pdf",
        safe_name,
        format_pay_date(pay_date, style)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
    }

    #[test]
    fn test_spaces_become_dashes() {
        assert_eq!(
            payslip_filename("Jane Doe", date(), DateFormatStyle::OrdinalShort),
            "Payslip-Jane-Doe-31st-Jan-26.pdf"
        );
    }

    #[test]
    fn test_punctuation_replaced_one_for_one() {
        assert_eq!(
            payslip_filename("O'Brien, Jr.", date(), DateFormatStyle::Alt),
            "Payslip-O-Brien--Jr--31-Jan-2026.pdf"
        );
    }

    #[test]
    fn test_non_ascii_characters_replaced() {
        assert_eq!(
            payslip_filename("Zoë", date(), DateFormatStyle::Alt),
            "Payslip-Zo--31-Jan-2026.pdf"
        );
    }
}
