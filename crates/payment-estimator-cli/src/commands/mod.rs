pub mod calculate;
pub mod finance;
pub mod format;
pub mod lease;
pub mod theme;

use serde_json::Value;

use payment_estimator_core::display::render_result;
use payment_estimator_core::{calculate, CalculationRequest};

/// Run a quote and attach its formatted output slots as `display`.
pub(crate) fn quote(request: &CalculationRequest) -> Result<Value, Box<dyn std::error::Error>> {
    let output = calculate(request)?;
    let display = render_result(&output.result);

    let mut value = serde_json::to_value(&output)?;
    if let Value::Object(map) = &mut value {
        map.insert("display".to_string(), serde_json::to_value(display)?);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payment_estimator_core::pricing::finance::FinanceInput;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn quote_includes_result_and_display() {
        let request = CalculationRequest::Finance(FinanceInput {
            msrp: dec!(20000),
            discount: Decimal::ZERO,
            tax_rate: dec!(0.06),
            term_months: 60,
            annual_rate: Decimal::ZERO,
            rebates: Decimal::ZERO,
            down_payment: Decimal::ZERO,
            trade_in: Decimal::ZERO,
        });
        let value = quote(&request).unwrap();

        assert_eq!(value["result"]["kind"], "finance");
        assert_eq!(value["result"]["principal"], "21610.22");
        assert_eq!(value["display"][0]["slot"], "loan_amount");
        assert_eq!(value["display"][0]["text"], "$21,610.22");
        assert_eq!(value["display"][1]["text"], "$360.17");
        assert_eq!(value["display"][2]["text"], "$435.17");
    }
}
