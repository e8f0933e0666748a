//! Display formatting shared by the page models. Every helper accepts
//! missing or malformed input and returns a placeholder instead.

use chrono::{DateTime, Duration, Utc};

pub const MISSING_TEXT: &str = "—";
pub const MISSING_DATE: &str = "Date unavailable";

/// `₦12,500` style price: thousands separators, at most two decimals,
/// trailing zeros dropped. Non-finite amounts render as zero.
pub fn format_price(amount: f64, currency_symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}{currency_symbol}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{currency_symbol}{grouped}.{}", f / 10),
        f => format!("{sign}{currency_symbol}{grouped}.{f:02}"),
    }
}

/// `Mar 14, 2025`
pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| MISSING_DATE.to_string(), |at| at.format("%b %-d, %Y").to_string())
}

/// `Mar 14, 2025, 09:30 AM`
pub fn format_date_time(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || MISSING_DATE.to_string(),
        |at| at.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

/// `#` followed by the last eight characters of the id, uppercased.
pub fn short_reference(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        return format!("#{MISSING_TEXT}");
    }
    let chars: Vec<char> = id.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(8)..].iter().collect();
    format!("#{}", tail.to_uppercase())
}

/// Listed no more than `days` days before `now`. Undated listings are never new.
/// A window too large to represent counts every dated listing as new.
pub fn is_new(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> bool {
    let Some(at) = created_at else {
        return false;
    };
    match Duration::try_days(days) {
        Some(window) => now.signed_duration_since(at) <= window,
        None => true,
    }
}

pub fn text_or(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder.to_string() } else { trimmed.to_string() }
}
