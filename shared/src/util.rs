//! Display formatting helpers

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert an ISO `YYYY-MM-DD` date into the `DD/MM/YYYY` display form.
/// Empty input stays empty; unparseable input passes through unchanged.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Format an amount string (possibly comma-formatted) as NGN currency:
/// `"15,000.00"` → `"₦15,000.00"`. Empty or unparseable input → `"₦0"`.
pub fn format_naira(value: &str) -> String {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return "₦0".to_string();
    }
    let Ok(amount) = Decimal::from_str(trimmed) else {
        return "₦0".to_string();
    };
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}₦{}.{fraction}", group_thousands(integer))
}

/// Insert comma separators into a bare digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
