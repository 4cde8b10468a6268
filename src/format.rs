//! Display formatting for amounts and timestamps rendered by page script.
//!
//! Output follows `en-US` conventions: `$1,234.50`, `Mar 5, 2024`,
//! `Mar 5, 2024, 02:30 PM`. Unparseable dates render as `Invalid Date`
//! rather than failing, so a bad value shows up in the page instead of
//! breaking the caller.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::consts::INVALID_DATE;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATETIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Offset-free date-time layouts, most specific first.
const NAIVE_DATETIME_LAYOUTS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Offset-bearing layouts not covered by RFC 3339 parsing, with `+HH:MM`
/// and `+HHMM` offsets.
const ZONED_LAYOUTS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// Format an amount as US dollars with thousands grouping and two decimals.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_owned();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let abs = amount.abs();
    let (whole, cents) = round_to_cents(&format!("{abs}"));
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Round a plain decimal string (no exponent) to two places, ties away from
/// zero. Working on the shortest decimal form keeps `1.005` a tie instead of
/// the `1.00499..` its binary value expands to.
fn round_to_cents(decimal: &str) -> (String, String) {
    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<u8> = whole.bytes().chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2)).collect();
    let round_up = frac.as_bytes().get(2).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let cents = digits.split_off(digits.len() - 2);
    (String::from_utf8_lossy(&digits).into_owned(), String::from_utf8_lossy(&cents).into_owned())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a date string as `Mar 5, 2024`.
pub fn format_date(input: &str) -> String {
    parse_timestamp(input).map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format(DATE_FORMAT).to_string())
}

/// Render a date-time string as `Mar 5, 2024, 02:30 PM`. A date without a
/// time renders as midnight.
pub fn format_datetime(input: &str) -> String {
    parse_timestamp(input).map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format(DATETIME_FORMAT).to_string())
}

/// Parse an ISO-like timestamp into the wall-clock time to display.
///
/// Offset-free input is taken as written. Input with an offset is converted
/// to the viewer's local time.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for layout in ZONED_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(input, layout) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
    }
    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(dt);
        }
    }
    parse_date_only(input).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM-DD`, `YYYY-MM` (first of the month) or `YYYY` (January 1).
fn parse_date_only(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let year_digits = bytes.len() >= 4 && bytes[..4].iter().all(u8::is_ascii_digit);
    match bytes.len() {
        4 if year_digits => match input.parse::<i32>() {
            Ok(year) => NaiveDate::from_ymd_opt(year, 1, 1),
            Err(_) => None,
        },
        7 if year_digits && bytes[4] == b'-' => date_from_layout(&format!("{input}-01")),
        _ => date_from_layout(input),
    }
}

fn date_from_layout(input: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => None,
    }
}
