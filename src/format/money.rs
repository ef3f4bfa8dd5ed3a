//! Money display formatting.

/// Formats an integer minor-unit amount for display.
///
/// Major units are grouped with commas; the two-digit minor part is shown
/// only when `use_decimals` is set, matching the calculator mode that
/// produced the amount.
///
/// # Examples
///
/// ```
/// use payslip_engine::format::format_money;
///
/// assert_eq!(format_money(10_000_000, false), "100,000");
/// assert_eq!(format_money(1_234_56, true), "1,234.56");
/// ```
pub fn format_money(amount_minor: i64, use_decimals: bool) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let major = group_thousands(abs / 100);

    if use_decimals {
        format!("{sign}{major}.{:02}", abs % 100)
    } else {
        format!("{sign}{major}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - position;
        if position > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
