//! Raw text fields as a UI collects them, and their conversion into
//! calculator inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::normalize::{parse_int_only, parse_money, parse_percent};
use crate::pricing::finance::FinanceInput;
use crate::pricing::lease::LeaseInput;
use crate::types::Rate;

/// Lease fields exactly as typed. Missing fields read as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseForm {
    pub msrp: String,
    pub discount: String,
    /// Sales tax, as a percentage
    pub tax_pct: String,
    /// Residual, as a percentage of MSRP
    pub residual_pct: String,
    pub money_factor: String,
    pub rebates: String,
    pub down: String,
}

/// Finance fields exactly as typed. Missing fields read as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceForm {
    pub msrp: String,
    pub discount: String,
    /// Sales tax, as a percentage
    pub tax_pct: String,
    pub term_months: String,
    /// Annual interest rate, as a percentage
    pub rate_pct: String,
    pub rebates: String,
    pub down: String,
    pub trade_in: String,
}

fn percent_to_rate(text: &str) -> Rate {
    parse_percent(text) / Decimal::ONE_HUNDRED
}

impl LeaseForm {
    /// Normalizes every field. Never fails; validation happens in
    /// [`crate::pricing::lease::compute_lease`].
    pub fn to_input(&self) -> LeaseInput {
        LeaseInput {
            msrp: parse_money(&self.msrp),
            discount: parse_money(&self.discount),
            tax_rate: percent_to_rate(&self.tax_pct),
            residual_rate: percent_to_rate(&self.residual_pct),
            money_factor: parse_money(&self.money_factor),
            rebates: parse_money(&self.rebates),
            down_payment: parse_money(&self.down),
        }
    }
}

impl FinanceForm {
    /// Normalizes every field. Never fails; validation happens in
    /// [`crate::pricing::finance::compute_finance`].
    pub fn to_input(&self) -> FinanceInput {
        FinanceInput {
            msrp: parse_money(&self.msrp),
            discount: parse_money(&self.discount),
            tax_rate: percent_to_rate(&self.tax_pct),
            term_months: parse_int_only(&self.term_months),
            annual_rate: percent_to_rate(&self.rate_pct),
            rebates: parse_money(&self.rebates),
            down_payment: parse_money(&self.down),
            trade_in: parse_money(&self.trade_in),
        }
    }
}
