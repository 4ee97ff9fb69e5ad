use clap::Args;
use serde_json::Value;

use payment_estimator_core::input::FinanceForm;
use payment_estimator_core::pricing::finance::FinanceInput;
use payment_estimator_core::CalculationRequest;

use crate::input;

/// Loan fields, typed the way a customer would (`$32,500`, `4.9%`).
#[derive(Args, Default)]
#[command(allow_hyphen_values = true)]
pub struct FinanceArgs {
    /// Vehicle MSRP
    #[arg(long)]
    pub msrp: Option<String>,

    /// Dealer discount off MSRP
    #[arg(long)]
    pub discount: Option<String>,

    /// Sales tax percentage (e.g. 6 or 6%)
    #[arg(long)]
    pub tax_pct: Option<String>,

    /// Loan term in months (e.g. 60)
    #[arg(long, alias = "term")]
    pub term_months: Option<String>,

    /// Annual interest rate percentage (e.g. 4.9)
    #[arg(long, alias = "apr")]
    pub rate_pct: Option<String>,

    /// Manufacturer rebates
    #[arg(long)]
    pub rebates: Option<String>,

    /// Cash down payment
    #[arg(long)]
    pub down: Option<String>,

    /// Trade-in credit
    #[arg(long)]
    pub trade_in: Option<String>,

    /// Path to JSON finance input (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl FinanceArgs {
    fn to_form(&self) -> FinanceForm {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        FinanceForm {
            msrp: text(&self.msrp),
            discount: text(&self.discount),
            tax_pct: text(&self.tax_pct),
            term_months: text(&self.term_months),
            rate_pct: text(&self.rate_pct),
            rebates: text(&self.rebates),
            down: text(&self.down),
            trade_in: text(&self.trade_in),
        }
    }
}

pub fn run_finance(args: FinanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let finance_input: FinanceInput = match input::json_input(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => args.to_form().to_input(),
    };
    super::quote(&CalculationRequest::Finance(finance_input))
}
