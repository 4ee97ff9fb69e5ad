use payment_estimator_core::input::FinanceForm;
use payment_estimator_core::pricing::finance::{compute_finance, FinanceInput};
use payment_estimator_core::PaymentError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Loan quotes
// ===========================================================================

fn zero_rate_loan() -> FinanceInput {
    FinanceInput {
        msrp: dec!(20000),
        discount: Decimal::ZERO,
        tax_rate: dec!(0.06),
        term_months: 60,
        annual_rate: Decimal::ZERO,
        rebates: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        trade_in: Decimal::ZERO,
    }
}

#[test]
fn test_zero_rate_loan() {
    let result = compute_finance(&zero_rate_loan()).unwrap();

    // Selling 20387, tax 1223.22
    assert_eq!(result.principal, dec!(21610.22));
    assert_eq!(result.monthly_payment.round_dp(2), dec!(360.17));
    assert_eq!(result.due_at_signing.round_dp(2), dec!(435.17));
}

#[test]
fn test_amortized_loan_from_form() {
    let form = FinanceForm {
        msrp: "$30,000".into(),
        discount: "$1,000".into(),
        tax_pct: "6%".into(),
        term_months: "60".into(),
        rate_pct: "5%".into(),
        rebates: "500".into(),
        down: "$3,000".into(),
        trade_in: "$2,000".into(),
    };
    let result = compute_finance(&form.to_input()).unwrap();

    // Selling 29387; tax on 27387 = 1643.22; principal 29387 - 2000 - 3000 - 500 + 1643.22
    assert_eq!(result.principal, dec!(25530.22));
    assert_eq!(result.monthly_payment.round_dp(2), dec!(481.79));
    assert_eq!(result.due_at_signing.round_dp(2), dec!(3556.79));
}

#[test]
fn test_long_term_loan() {
    let input = FinanceInput {
        msrp: dec!(36000),
        discount: Decimal::ZERO,
        tax_rate: dec!(0.0725),
        term_months: 72,
        annual_rate: dec!(0.069),
        rebates: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        trade_in: Decimal::ZERO,
    };
    let result = compute_finance(&input).unwrap();
    assert_eq!(result.principal, dec!(39025.0575));
    assert_eq!(result.monthly_payment.round_dp(2), dec!(663.47));
    assert_eq!(result.due_at_signing.round_dp(2), dec!(738.47));
}

#[test]
fn test_trade_in_above_price_means_no_tax() {
    let mut input = zero_rate_loan();
    input.trade_in = dec!(20387);
    let result = compute_finance(&input).unwrap();

    // Taxable base is exactly zero, so principal is zero: accepted
    assert_eq!(result.principal, Decimal::ZERO);
    assert_eq!(result.monthly_payment, Decimal::ZERO);
    assert_eq!(result.due_at_signing, dec!(75));
}

#[test]
fn test_zero_principal_with_rate_is_accepted() {
    let mut input = zero_rate_loan();
    input.tax_rate = Decimal::ZERO;
    input.annual_rate = dec!(0.05);
    input.down_payment = dec!(20387);
    let result = compute_finance(&input).unwrap();
    assert_eq!(result.principal, Decimal::ZERO);
    assert_eq!(result.monthly_payment, Decimal::ZERO);
    assert_eq!(result.due_at_signing, dec!(20462));
}

#[test]
fn test_negative_principal_rejected() {
    let mut input = zero_rate_loan();
    input.down_payment = dec!(25000);
    let err = compute_finance(&input).unwrap_err();
    assert_eq!(err, PaymentError::NegativePrincipal);
    assert_eq!(err.to_string(), "Loan amount is negative. Check inputs.");
}

#[test]
fn test_missing_term_rejected() {
    let form = FinanceForm {
        msrp: "25000".into(),
        term_months: "".into(),
        ..Default::default()
    };
    let err = compute_finance(&form.to_input()).unwrap_err();
    assert_eq!(err, PaymentError::InvalidMsrpOrTerm);
    assert_eq!(err.to_string(), "Please check MSRP and Term.");
}

#[test]
fn test_negative_rate_rejected() {
    let form = FinanceForm {
        msrp: "25000".into(),
        term_months: "48".into(),
        rate_pct: "-2.9%".into(),
        ..Default::default()
    };
    let err = compute_finance(&form.to_input()).unwrap_err();
    assert_eq!(err, PaymentError::InvalidRate);
    assert_eq!(err.to_string(), "Rate % cannot be negative.");
}

// ===========================================================================
// Extremes of the accepted input domain
// ===========================================================================

#[test]
fn test_mistyped_long_term_is_interest_only() {
    let form = FinanceForm {
        msrp: "30000".into(),
        term_months: "5000".into(),
        rate_pct: "24".into(),
        ..Default::default()
    };
    let result = compute_finance(&form.to_input()).unwrap();

    // 30387 at 2% a month; (1.02)^5000 leaves the Decimal range
    assert_eq!(result.principal, dec!(30387));
    assert_eq!(result.monthly_payment, dec!(607.74));
    assert_eq!(result.due_at_signing, dec!(682.74));
}

#[test]
fn test_max_term_at_low_rate() {
    let mut input = zero_rate_loan();
    input.term_months = u32::MAX;
    input.annual_rate = dec!(0.012);
    let result = compute_finance(&input).unwrap();
    assert_eq!(result.monthly_payment, dec!(21610.22) * dec!(0.001));
}

#[test]
fn test_max_term_at_zero_rate() {
    let mut input = zero_rate_loan();
    input.term_months = u32::MAX;
    let result = compute_finance(&input).unwrap();
    assert!(result.monthly_payment > Decimal::ZERO);
    assert!(result.monthly_payment < dec!(0.01));
}

#[test]
fn test_oversized_msrp_from_form() {
    let form = FinanceForm {
        msrp: "79,228,162,514,264,337,593,543,950,335".into(),
        term_months: "60".into(),
        rate_pct: "5".into(),
        ..Default::default()
    };
    let err = compute_finance(&form.to_input()).unwrap_err();
    assert!(matches!(err, PaymentError::Overflow { .. }));
    assert!(err.is_validation());
}

#[test]
fn test_unreadable_msrp_from_form_is_missing() {
    // Too many digits for a Decimal, so the field reads as zero
    let form = FinanceForm {
        msrp: "999999999999999999999999999999".into(),
        term_months: "60".into(),
        ..Default::default()
    };
    assert_eq!(
        compute_finance(&form.to_input()).unwrap_err(),
        PaymentError::InvalidMsrpOrTerm
    );
}
