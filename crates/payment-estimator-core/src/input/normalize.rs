//! Permissive parsing of free-text numeric fields.
//!
//! Users type `$32,500`, `6.5%` or `36 months` into the form. None of these
//! functions fail: anything that cannot be read as a number becomes zero and
//! the calculators decide whether zero is acceptable.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::{Money, Months};

/// Parses a money field (`"$12,345.67"` -> `12345.67`).
///
/// Every character other than ASCII digits, `.` and `-` is discarded, then
/// the longest leading number of what remains is read. Empty or unreadable
/// input yields zero.
pub fn parse_money(text: &str) -> Money {
    parse_stripped_decimal(text)
}

/// Parses a percentage field (`"6.5%"` -> `6.5`).
///
/// Same stripping rule as [`parse_money`]. The result is still a percentage;
/// callers divide by 100.
pub fn parse_percent(text: &str) -> Decimal {
    parse_stripped_decimal(text)
}

/// Parses a whole-number field (`"36 months"` -> `36`).
///
/// Only ASCII digits survive, so a minus sign is dropped. Empty input or a
/// value that does not fit in a `u32` yields zero.
pub fn parse_int_only(text: &str) -> Months {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or_else(|e| {
        tracing::debug!(input = %text, "integer field out of range: {}", e);
        0
    })
}

fn parse_stripped_decimal(text: &str) -> Decimal {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match leading_number(&stripped) {
        Some(number) => Decimal::from_str(&number).unwrap_or_else(|e| {
            tracing::debug!(input = %text, "numeric field not representable: {}", e);
            Decimal::ZERO
        }),
        None => {
            if !stripped.is_empty() {
                tracing::debug!(input = %text, "numeric field has no leading number");
            }
            Decimal::ZERO
        }
    }
}

/// Extracts the longest prefix shaped like `-?digits(.digits)?` and returns
/// it in a form `Decimal::from_str` accepts (`".5"` -> `"0.5"`, `"7."` -> `"7"`).
/// Returns `None` when the prefix holds no digit at all.
fn leading_number(s: &str) -> Option<String> {
    let mut chars = s.chars().peekable();
    let negative = chars.peek() == Some(&'-');
    if negative {
        chars.next();
    }

    let mut whole = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        whole.push(c);
        chars.next();
    }

    let mut fraction = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            fraction.push(c);
            chars.next();
        }
    }

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut number = String::with_capacity(whole.len() + fraction.len() + 3);
    if negative {
        number.push('-');
    }
    if whole.is_empty() {
        number.push('0');
    } else {
        number.push_str(&whole);
    }
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(&fraction);
    }
    Some(number)
}
