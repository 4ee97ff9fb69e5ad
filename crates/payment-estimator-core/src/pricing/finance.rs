//! Retail installment (loan) quote.
//!
//! Sales tax is charged on the selling price less trade-in credit. Rebates
//! and cash down reduce the amount financed but not the tax base.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::fees::{DOC_FEE, PLATE_FEE};
use crate::error::{OrOverflow, PaymentError};
use crate::time_value::level_payment;
use crate::types::{Money, Months, Rate};
use crate::PaymentResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Normalized loan quote inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceInput {
    /// Manufacturer's suggested retail price
    pub msrp: Money,
    /// Dealer discount off MSRP
    #[serde(default)]
    pub discount: Money,
    /// Sales tax rate (e.g. 0.06 = 6%)
    #[serde(default)]
    pub tax_rate: Rate,
    /// Loan term in months
    pub term_months: Months,
    /// Annual percentage rate as a decimal (e.g. 0.049)
    #[serde(default)]
    pub annual_rate: Rate,
    #[serde(default)]
    pub rebates: Money,
    #[serde(default)]
    pub down_payment: Money,
    /// Trade-in credit; the only reduction that also lowers the tax base
    #[serde(default)]
    pub trade_in: Money,
}

/// Loan quote figures, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceResult {
    /// Amount financed
    pub principal: Money,
    pub monthly_payment: Money,
    pub due_at_signing: Money,
}

/// Quote a loan.
///
/// Besides input validation, fails with [`PaymentError::NegativePrincipal`]
/// when reductions exceed the taxed selling price, and with
/// [`PaymentError::Overflow`] when amounts leave the `Decimal` range. A
/// principal of exactly zero is a valid (zero-payment) quote.
pub fn compute_finance(input: &FinanceInput) -> PaymentResult<FinanceResult> {
    validate_input(input).inspect_err(|e| {
        tracing::warn!(msrp = %input.msrp, term_months = input.term_months,
            annual_rate = %input.annual_rate, "finance rejected: {e}");
    })?;

    let selling_price = input
        .msrp
        .checked_sub(input.discount)
        .and_then(|p| p.checked_add(DOC_FEE))
        .or_overflow("selling price")?;
    let taxable_base = selling_price.checked_sub(input.trade_in).or_overflow("taxable base")?;
    let total_tax = sales_tax(taxable_base, input.tax_rate)?;

    let principal = taxable_base
        .checked_sub(input.down_payment)
        .and_then(|p| p.checked_sub(input.rebates))
        .and_then(|p| p.checked_add(total_tax))
        .or_overflow("amount financed")?;
    if principal < Decimal::ZERO {
        tracing::warn!(%principal, "finance rejected: negative amount financed");
        return Err(PaymentError::NegativePrincipal);
    }

    let monthly_rate = input.annual_rate / MONTHS_PER_YEAR;
    let monthly_payment = level_payment(monthly_rate, input.term_months, principal)?;
    let due_at_signing = monthly_payment
        .checked_add(PLATE_FEE)
        .and_then(|d| d.checked_add(input.down_payment))
        .or_overflow("due at signing")?;

    tracing::debug!(%selling_price, %total_tax, %principal, %monthly_payment, "finance computed");

    Ok(FinanceResult {
        principal,
        monthly_payment,
        due_at_signing,
    })
}

fn validate_input(input: &FinanceInput) -> PaymentResult<()> {
    if input.msrp <= Decimal::ZERO || input.term_months == 0 {
        return Err(PaymentError::InvalidMsrpOrTerm);
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(PaymentError::InvalidRate);
    }
    Ok(())
}

/// Tax on a non-positive base is zero, never a credit.
fn sales_tax(taxable_base: Money, tax_rate: Rate) -> PaymentResult<Money> {
    if taxable_base > Decimal::ZERO {
        taxable_base.checked_mul(tax_rate).or_overflow("sales tax")
    } else {
        Ok(Decimal::ZERO)
    }
}
