//! Display formatting shared by every screen.

use chrono::{TimeZone, Utc};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;

/// Current wall-clock time in Unix milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a dollar amount as `$1,234.50`.
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, rem)
}

/// Mask an identifier down to its last four characters.
///
/// Empty input renders as an em dash placeholder.
pub fn mask(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return "\u{2014}".to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return value.to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("\u{2022}\u{2022}\u{2022}\u{2022} {}", tail)
}

/// Human relative time, falling back to a calendar date after a week.
pub fn relative_time(now: i64, at: i64) -> String {
    let delta = now - at;
    if delta < MINUTE_MS {
        return "just now".to_string();
    }
    if delta < HOUR_MS {
        return format!("{}m ago", delta / MINUTE_MS);
    }
    if delta < DAY_MS {
        return format!("{}h ago", delta / HOUR_MS);
    }
    if delta < 7 * DAY_MS {
        return format!("{}d ago", delta / DAY_MS);
    }
    calendar_date(at)
}

/// Calendar date such as `Mar 4, 2026`.
pub fn calendar_date(at: i64) -> String {
    match Utc.timestamp_millis_opt(at).single() {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "\u{2014}".to_string(),
    }
}

/// Date and time such as `Mar 4, 2026 · 18:05`.
pub fn date_time(at: i64) -> String {
    match Utc.timestamp_millis_opt(at).single() {
        Some(dt) => dt.format("%b %-d, %Y \u{00B7} %H:%M").to_string(),
        None => "\u{2014}".to_string(),
    }
}
