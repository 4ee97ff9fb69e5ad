use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::pricing::fees::FeeSchedule;
use crate::pricing::finance::{compute_finance, FinanceInput, FinanceResult};
use crate::pricing::lease::{compute_lease, LeaseInput, LeaseResult};
use crate::types::{ComputationOutput, Money, Rate};
use crate::PaymentResult;

/// A quote request, tagged by `"kind"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationRequest {
    Lease(LeaseInput),
    Finance(FinanceInput),
}

/// The quote matching a [`CalculationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationResult {
    Lease(LeaseResult),
    Finance(FinanceResult),
}

impl CalculationResult {
    pub fn monthly_payment(&self) -> Money {
        match self {
            CalculationResult::Lease(r) => r.monthly_payment,
            CalculationResult::Finance(r) => r.monthly_payment,
        }
    }
}

/// Run the calculator matching `request` and wrap its result with the fee
/// schedule and any warnings.
pub fn calculate(request: &CalculationRequest) -> PaymentResult<ComputationOutput<CalculationResult>> {
    let start = Instant::now();

    let (methodology, fees, tax_rate, result) = match request {
        CalculationRequest::Lease(input) => (
            "Closed-end lease: depreciation + rent charge over 36 months, sales tax capitalized",
            FeeSchedule::lease(),
            input.tax_rate,
            CalculationResult::Lease(compute_lease(input)?),
        ),
        CalculationRequest::Finance(input) => (
            "Retail installment: level-payment amortization, tax on price less trade-in",
            FeeSchedule::finance(),
            input.tax_rate,
            CalculationResult::Finance(compute_finance(input)?),
        ),
    };

    let warnings = collect_warnings(&result, tax_rate);
    for w in &warnings {
        tracing::warn!("{w}");
    }

    ComputationOutput::wrap(methodology, &fees, warnings, start, result)
}

fn collect_warnings(result: &CalculationResult, tax_rate: Rate) -> Vec<String> {
    let mut warnings = Vec::new();

    if result.monthly_payment() < Decimal::ZERO {
        warnings.push(format!(
            "Monthly payment is negative ({}); reductions exceed the financed cost",
            result.monthly_payment().round_dp(2)
        ));
    }
    if tax_rate > Decimal::ONE {
        let shown = match tax_rate.checked_mul(Decimal::ONE_HUNDRED) {
            Some(pct) => format!("{}%", pct.normalize()),
            None => format!("{}", tax_rate.normalize()),
        };
        warnings.push(format!("Tax rate of {shown} exceeds 100%"));
    }

    warnings
}
