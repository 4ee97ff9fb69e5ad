use payment_estimator_core::display::{fmt_money_compact, reformat_field, FieldKind};
use payment_estimator_core::input::parse_money;
use payment_estimator_core::pricing::finance::{compute_finance, FinanceInput};
use payment_estimator_core::pricing::lease::{compute_lease, LeaseInput};
use payment_estimator_core::PaymentError;
use quickcheck_macros::quickcheck;
use rust_decimal::Decimal;

// ===========================================================================
// Normalizer / formatter round trips
// ===========================================================================

#[quickcheck]
fn compact_money_round_trips_whole_dollars(dollars: u32) -> bool {
    let x = Decimal::from(dollars);
    parse_money(&fmt_money_compact(x)) == x
}

#[quickcheck]
fn reformatted_money_field_is_stable(dollars: u32) -> bool {
    let once = reformat_field(FieldKind::Money, &dollars.to_string());
    reformat_field(FieldKind::Money, &once) == once
}

// ===========================================================================
// Lease outputs are non-negative over realistic inputs
// ===========================================================================

#[quickcheck]
fn lease_outputs_non_negative(
    msrp_thousands: u8,
    residual_pct: u8,
    mf_basis: u8,
    tax_pct: u8,
    down_pct: u8,
) -> bool {
    // MSRP 15k..270k, residual 30..75%, MF 0.0001..0.0200, tax 0..12%, down 0..19% of MSRP
    let msrp = Decimal::from(15_000u32 + u32::from(msrp_thousands) * 1_000);
    let residual_rate = Decimal::new(30 + i64::from(residual_pct % 46), 2);
    let money_factor = Decimal::new(1 + i64::from(mf_basis % 200), 4);
    let tax_rate = Decimal::new(i64::from(tax_pct % 13), 2);
    let down_payment = msrp * Decimal::new(i64::from(down_pct % 20), 2);

    let input = LeaseInput {
        msrp,
        discount: Decimal::ZERO,
        tax_rate,
        residual_rate,
        money_factor,
        rebates: Decimal::ZERO,
        down_payment,
    };

    match compute_lease(&input) {
        Ok(r) => r.monthly_payment >= Decimal::ZERO && r.due_at_signing >= Decimal::ZERO,
        Err(_) => false,
    }
}

// ===========================================================================
// Any term and any magnitude: a quote or an error, never a panic
// ===========================================================================

#[quickcheck]
fn finance_any_term_quotes_or_rejects(term_months: u32, apr_bp: u16, msrp: u32) -> bool {
    let input = FinanceInput {
        msrp: Decimal::from(msrp),
        discount: Decimal::ZERO,
        tax_rate: Decimal::new(6, 2),
        term_months,
        annual_rate: Decimal::new(i64::from(apr_bp), 4),
        rebates: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        trade_in: Decimal::ZERO,
    };

    match compute_finance(&input) {
        Ok(r) => term_months > 0 && msrp > 0 && r.monthly_payment >= Decimal::ZERO,
        Err(e) => (term_months == 0 || msrp == 0) && e == PaymentError::InvalidMsrpOrTerm,
    }
}

#[quickcheck]
fn finance_any_magnitude_never_panics(msrp: i64, scale: u8, term_months: u32, apr_pct: u16) -> bool {
    // |msrp| up to ~9.2e27; principal times a high monthly rate overflows
    let msrp = Decimal::from(msrp) * Decimal::from(10u64.pow(u32::from(scale % 10)));
    let input = FinanceInput {
        msrp,
        discount: Decimal::ZERO,
        tax_rate: Decimal::new(7, 2),
        term_months,
        annual_rate: Decimal::new(i64::from(apr_pct), 2),
        rebates: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        trade_in: Decimal::ZERO,
    };

    match compute_finance(&input) {
        Ok(r) => r.monthly_payment >= Decimal::ZERO,
        Err(e) => e.is_validation(),
    }
}

#[quickcheck]
fn lease_any_magnitude_never_panics(msrp: u64, scale: u8, tax_pct: u16, residual_pct: u8) -> bool {
    let msrp = Decimal::from(msrp) * Decimal::from(10u64.pow(u32::from(scale % 10)));
    let input = LeaseInput {
        msrp,
        discount: Decimal::ZERO,
        tax_rate: Decimal::new(i64::from(tax_pct), 2),
        residual_rate: Decimal::new(1 + i64::from(residual_pct % 99), 2),
        money_factor: Decimal::new(2, 3),
        rebates: Decimal::ZERO,
        down_payment: Decimal::ZERO,
    };

    match compute_lease(&input) {
        Ok(_) => true,
        Err(e) => e.is_validation(),
    }
}
