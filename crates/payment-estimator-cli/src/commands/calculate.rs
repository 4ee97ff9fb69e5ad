use clap::Args;
use serde_json::Value;

use payment_estimator_core::CalculationRequest;

use crate::input;

/// Arguments for a tagged JSON quote request
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON request (`{"kind": "lease" | "finance", ...}`); stdin if omitted
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: CalculationRequest = input::json_input(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for calculate")?;
    super::quote(&request)
}
