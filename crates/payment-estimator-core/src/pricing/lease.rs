//! Closed-end vehicle lease quote.
//!
//! Monthly payment is depreciation plus rent charge over a fixed 36-month
//! term. Sales tax on the whole payment stream is capitalized up front: the
//! pre-tax payment is taxed across the term, the tax is added to the
//! capitalized cost, and the payment is recomputed on the taxed cap cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fees::{
    lease_term, ACQUISITION_FEE, DOC_FEE, MAX_MONEY_FACTOR, MONEY_FACTOR_MARKUP, PLATE_FEE,
};
use crate::error::{OrOverflow, PaymentError};
use crate::types::{Money, Rate};
use crate::PaymentResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Normalized lease quote inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseInput {
    /// Manufacturer's suggested retail price
    pub msrp: Money,
    /// Dealer discount off MSRP
    #[serde(default)]
    pub discount: Money,
    /// Sales tax rate (e.g. 0.07 = 7%)
    #[serde(default)]
    pub tax_rate: Rate,
    /// Residual as a fraction of MSRP, strictly between 0 and 1
    pub residual_rate: Rate,
    /// Buy-rate money factor (e.g. 0.00188)
    pub money_factor: Decimal,
    /// Manufacturer rebates applied as cap cost reduction
    #[serde(default)]
    pub rebates: Money,
    /// Cash down, applied as cap cost reduction
    #[serde(default)]
    pub down_payment: Money,
}

/// Lease quote figures, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseResult {
    pub residual_value: Money,
    pub monthly_payment: Money,
    pub due_at_signing: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Quote a lease. Fails on validation, or with [`PaymentError::Overflow`]
/// when amounts leave the `Decimal` range.
pub fn compute_lease(input: &LeaseInput) -> PaymentResult<LeaseResult> {
    validate_input(input).inspect_err(|e| {
        tracing::warn!(msrp = %input.msrp, residual_rate = %input.residual_rate,
            money_factor = %input.money_factor, "lease rejected: {e}");
    })?;

    let term = lease_term();
    let money_factor = input.money_factor + MONEY_FACTOR_MARKUP;
    let selling_price = input.msrp.checked_sub(input.discount).or_overflow("selling price")?;
    let residual_value = input
        .msrp
        .checked_mul(input.residual_rate)
        .or_overflow("residual value")?;

    let adjusted_cap_cost = input
        .rebates
        .checked_add(input.down_payment)
        .and_then(|cap_reduction| {
            selling_price
                .checked_add(ACQUISITION_FEE + DOC_FEE)?
                .checked_sub(cap_reduction)
        })
        .or_overflow("adjusted cap cost")?;

    let pre_tax_payment = base_payment(adjusted_cap_cost, residual_value, money_factor, term)?;
    let total_lease_tax = pre_tax_payment
        .checked_mul(input.tax_rate)
        .and_then(|t| t.checked_mul(term))
        .or_overflow("lease tax")?;
    let cap_cost_with_tax = adjusted_cap_cost
        .checked_add(total_lease_tax)
        .or_overflow("taxed cap cost")?;

    let monthly_payment = base_payment(cap_cost_with_tax, residual_value, money_factor, term)?;
    let due_at_signing = input
        .down_payment
        .checked_mul(input.tax_rate)
        .and_then(|tax_on_down| {
            monthly_payment
                .checked_add(input.down_payment)?
                .checked_add(tax_on_down)?
                .checked_add(PLATE_FEE)
        })
        .or_overflow("due at signing")?;

    tracing::debug!(
        %adjusted_cap_cost,
        %pre_tax_payment,
        %total_lease_tax,
        %monthly_payment,
        "lease computed"
    );

    Ok(LeaseResult {
        residual_value,
        monthly_payment,
        due_at_signing,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &LeaseInput) -> PaymentResult<()> {
    if input.msrp <= Decimal::ZERO {
        return Err(PaymentError::InvalidMsrpOrResidual);
    }
    if input.residual_rate <= Decimal::ZERO || input.residual_rate >= Decimal::ONE {
        return Err(PaymentError::InvalidMsrpOrResidual);
    }
    if input.money_factor <= Decimal::ZERO || input.money_factor > MAX_MONEY_FACTOR {
        return Err(PaymentError::InvalidMoneyFactor);
    }
    Ok(())
}

/// Depreciation plus rent charge for one month.
fn base_payment(
    cap_cost: Money,
    residual_value: Money,
    money_factor: Decimal,
    term: Decimal,
) -> PaymentResult<Money> {
    let depreciation = cap_cost.checked_sub(residual_value).and_then(|d| d.checked_div(term));
    let rent_charge = cap_cost
        .checked_add(residual_value)
        .and_then(|c| c.checked_mul(money_factor));
    depreciation
        .zip(rent_charge)
        .and_then(|(d, r)| d.checked_add(r))
        .or_overflow("monthly payment")
}
