//! Fixed dealer fees and lease terms applied to every quote.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{Money, Months, Rate};

/// Lease length used for every lease quote.
pub const LEASE_TERM_MONTHS: Months = 36;

/// Bank acquisition fee, capitalized into a lease.
pub const ACQUISITION_FEE: Money = dec!(925);

/// Dealer documentation fee, charged on both leases and loans.
pub const DOC_FEE: Money = dec!(387);

/// Added to the buy-rate money factor before the rent charge is computed.
/// The quote never shows it.
pub const MONEY_FACTOR_MARKUP: Rate = dec!(0.0004);

/// Upper bound on an acceptable buy-rate money factor.
pub const MAX_MONEY_FACTOR: Rate = dec!(0.02);

/// Registration and plate fee, due at signing.
pub const PLATE_FEE: Money = dec!(75);

/// Fees reported as the assumptions of a quote. The money-factor markup is
/// never reported.
#[derive(Debug, Clone, Serialize)]
pub struct FeeSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_term_months: Option<Months>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_fee: Option<Money>,
    pub doc_fee: Money,
    pub plate_fee: Money,
}

impl FeeSchedule {
    pub fn lease() -> Self {
        FeeSchedule {
            lease_term_months: Some(LEASE_TERM_MONTHS),
            acquisition_fee: Some(ACQUISITION_FEE),
            doc_fee: DOC_FEE,
            plate_fee: PLATE_FEE,
        }
    }

    pub fn finance() -> Self {
        FeeSchedule {
            lease_term_months: None,
            acquisition_fee: None,
            doc_fee: DOC_FEE,
            plate_fee: PLATE_FEE,
        }
    }
}

pub(crate) fn lease_term() -> Decimal {
    Decimal::from(LEASE_TERM_MONTHS)
}
