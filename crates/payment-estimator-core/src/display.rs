//! Rendering of numeric values for display in US dollar / en-US style.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calculator::CalculationResult;
use crate::input::normalize::{parse_int_only, parse_money, parse_percent};
use crate::types::{Money, Months};

/// Distance from the nearest integer under which a value displays as whole.
const WHOLE_TOLERANCE: Decimal = dec!(0.000000001);

// ---------------------------------------------------------------------------
// Scalar formatters
// ---------------------------------------------------------------------------

/// `$12,345.67`, always two decimals; negatives as `-$12.50`.
pub fn fmt_money(x: Money) -> String {
    let cents = x.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", cents.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}${}.{}", sign(cents), group_thousands(whole), fraction)
}

/// Like [`fmt_money`] but drops `.00` from whole-dollar amounts (`$500`).
pub fn fmt_money_compact(x: Money) -> String {
    if !is_whole(x) {
        return fmt_money(x);
    }
    let whole = x.round();
    format!("{}${}", sign(whole), group_thousands(&whole.abs().to_string()))
}

/// `6%` for whole percentages, otherwise two decimals (`6.25%`).
pub fn fmt_percent(x: Decimal) -> String {
    if is_whole(x) {
        return format!("{}%", x.round().normalize());
    }
    let rounded = x.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

/// `36 months`; zero renders as an empty string.
pub fn fmt_months(n: Months) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("{n} months")
    }
}

fn is_whole(x: Decimal) -> bool {
    (x - x.round()).abs() < WHOLE_TOLERANCE
}

fn sign(x: Decimal) -> &'static str {
    if x.is_sign_negative() && !x.is_zero() {
        "-"
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Field reformatting
// ---------------------------------------------------------------------------

/// Input field families, each with its own parser and display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Money,
    Percent,
    Months,
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "money" => Ok(FieldKind::Money),
            "percent" => Ok(FieldKind::Percent),
            "months" | "int" => Ok(FieldKind::Months),
            other => Err(format!("unknown field kind '{other}'")),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Money => "money",
            FieldKind::Percent => "percent",
            FieldKind::Months => "months",
        };
        f.write_str(name)
    }
}

/// Re-renders a field the way the form does when it loses focus: parse,
/// then format. A value that parses to zero clears the field.
pub fn reformat_field(kind: FieldKind, text: &str) -> String {
    match kind {
        FieldKind::Money => {
            let value = parse_money(text);
            if value.is_zero() {
                String::new()
            } else {
                fmt_money_compact(value)
            }
        }
        FieldKind::Percent => {
            let value = parse_percent(text);
            if value.is_zero() {
                String::new()
            } else {
                fmt_percent(value)
            }
        }
        FieldKind::Months => fmt_months(parse_int_only(text)),
    }
}

// ---------------------------------------------------------------------------
// Result slots
// ---------------------------------------------------------------------------

/// One named output slot and its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySlot {
    pub slot: String,
    pub text: String,
}

impl DisplaySlot {
    fn money(slot: &str, value: Money) -> Self {
        DisplaySlot {
            slot: slot.to_string(),
            text: fmt_money(value),
        }
    }
}

/// Renders the three output slots of a quote.
pub fn render_result(result: &CalculationResult) -> Vec<DisplaySlot> {
    match result {
        CalculationResult::Lease(lease) => vec![
            DisplaySlot::money("residual_value", lease.residual_value),
            DisplaySlot::money("monthly_payment", lease.monthly_payment),
            DisplaySlot::money("due_at_signing", lease.due_at_signing),
        ],
        CalculationResult::Finance(loan) => vec![
            DisplaySlot::money("loan_amount", loan.principal),
            DisplaySlot::money("monthly_payment", loan.monthly_payment),
            DisplaySlot::money("due_at_signing", loan.due_at_signing),
        ],
    }
}
