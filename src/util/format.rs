//! Display formatting helpers for dates, counters, and quota usage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render server-supplied numbers and RFC 3339 timestamps; these
//! helpers keep that formatting consistent and out of view code.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// Render an RFC 3339 timestamp as a short date, e.g. `Feb 3, 2026`.
/// Unparseable input is shown as-is rather than hidden.
pub fn format_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => rfc3339.to_owned(),
    }
}

/// Thousands-separated rendering of a counter, e.g. `1,234,567`.
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One-decimal percentage rendering, e.g. `42.5%`.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Quota bar width as a whole percentage, capped at 100.
/// A non-positive limit with any usage reads as fully consumed.
#[allow(clippy::cast_sign_loss)]
pub fn quota_percent(used: i32, max: i32) -> u32 {
    if max <= 0 {
        return if used > 0 { 100 } else { 0 };
    }
    let used = used.max(0) as u32;
    let max = max as u32;
    (used.saturating_mul(100) / max).min(100)
}
