use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::{OrOverflow, PaymentError};
use crate::types::{Money, Months, Rate};
use crate::PaymentResult;

/// Level payment that retires `principal` over `periods` at `periodic_rate`.
///
/// payment = P * r * (1+r)^n / ((1+r)^n - 1)
///
/// A zero rate falls back to straight-line repayment, P / n. When (1+r)^n
/// exceeds the `Decimal` range, g / (g - 1) equals 1 at 28 significant
/// digits and the payment is interest only, P * r.
pub fn level_payment(periodic_rate: Rate, periods: Months, principal: Money) -> PaymentResult<Money> {
    if periods == 0 {
        return Err(PaymentError::DivisionByZero {
            context: "level payment with zero periods".into(),
        });
    }

    if periodic_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let one_plus_rate = Decimal::ONE
        .checked_add(periodic_rate)
        .or_overflow("level payment growth factor")?;

    let payment_rate = match one_plus_rate.checked_powu(u64::from(periods)) {
        Some(growth) => {
            let denominator = growth - Decimal::ONE;
            if denominator.is_zero() {
                return Err(PaymentError::DivisionByZero {
                    context: "level payment growth factor".into(),
                });
            }
            growth
                .checked_div(denominator)
                .and_then(|annuity| periodic_rate.checked_mul(annuity))
                .or_overflow("level payment")?
        }
        None => {
            tracing::debug!(%periodic_rate, periods, "growth factor out of range, paying interest only");
            periodic_rate
        }
    };

    principal.checked_mul(payment_rate).or_overflow("level payment")
}
