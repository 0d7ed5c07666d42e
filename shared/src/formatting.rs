//! Currency and date formatting for the dashboard (en-GB conventions).

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub const CURRENCY_SYMBOL: &str = "£";

/// Format the absolute value of `amount` as pounds, e.g. `1234.5` -> `£1,234.50`.
///
/// The sign is never included; callers decide how to present debits.
pub fn format_currency(amount: f64) -> String {
    let pennies = if amount.is_finite() {
        (amount.abs() * 100.0).round() as u64
    } else {
        0
    };
    let pounds = pennies / 100;
    let pence = pennies % 100;
    format!("{}{}.{:02}", CURRENCY_SYMBOL, group_thousands(pounds), pence)
}

/// `-£4.25` for debits, `+£12,500.00` for credits
pub fn format_signed_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, format_currency(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// "Today", "Yesterday", or a short "9 Oct" style label.
///
/// Compares calendar dates, not elapsed time: 23:59 yesterday is "Yesterday"
/// even when it is only a minute ago.
pub fn format_relative_date(timestamp: NaiveDateTime, today: NaiveDate) -> String {
    let date = timestamp.date();
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_string()
    } else {
        format!("{} {}", date.day(), short_month(date))
    }
}

/// en-GB short month names; September is "Sept", not chrono's "Sep"
fn short_month(date: NaiveDate) -> String {
    match date.month() {
        9 => "Sept".to_string(),
        _ => date.format("%b").to_string(),
    }
}

/// 24-hour clock time, e.g. "09:05"
pub fn format_clock_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}
