use clap::Args;
use serde_json::Value;

use payment_estimator_core::input::LeaseForm;
use payment_estimator_core::pricing::lease::LeaseInput;
use payment_estimator_core::CalculationRequest;

use crate::input;

/// Lease fields, typed the way a customer would (`$32,500`, `7%`).
#[derive(Args, Default)]
#[command(allow_hyphen_values = true)]
pub struct LeaseArgs {
    /// Vehicle MSRP
    #[arg(long)]
    pub msrp: Option<String>,

    /// Dealer discount off MSRP
    #[arg(long)]
    pub discount: Option<String>,

    /// Sales tax percentage (e.g. 7 or 7%)
    #[arg(long)]
    pub tax_pct: Option<String>,

    /// Residual percentage of MSRP (e.g. 55)
    #[arg(long)]
    pub residual_pct: Option<String>,

    /// Buy-rate money factor (e.g. 0.00188)
    #[arg(long, alias = "mf")]
    pub money_factor: Option<String>,

    /// Manufacturer rebates
    #[arg(long)]
    pub rebates: Option<String>,

    /// Cash down payment
    #[arg(long)]
    pub down: Option<String>,

    /// Path to JSON lease input (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl LeaseArgs {
    fn to_form(&self) -> LeaseForm {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        LeaseForm {
            msrp: text(&self.msrp),
            discount: text(&self.discount),
            tax_pct: text(&self.tax_pct),
            residual_pct: text(&self.residual_pct),
            money_factor: text(&self.money_factor),
            rebates: text(&self.rebates),
            down: text(&self.down),
        }
    }
}

pub fn run_lease(args: LeaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let lease_input: LeaseInput = match input::json_input(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => args.to_form().to_input(),
    };
    super::quote(&CalculationRequest::Lease(lease_input))
}
