use clap::{Args, ValueEnum};
use serde_json::{json, Value};

use payment_estimator_core::display::{reformat_field, FieldKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldKindArg {
    Money,
    Percent,
    Months,
}

impl From<FieldKindArg> for FieldKind {
    fn from(arg: FieldKindArg) -> Self {
        match arg {
            FieldKindArg::Money => FieldKind::Money,
            FieldKindArg::Percent => FieldKind::Percent,
            FieldKindArg::Months => FieldKind::Months,
        }
    }
}

/// Arguments for reformatting a single input field
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Kind of field the text was typed into
    pub kind: FieldKindArg,

    /// Raw field text
    pub text: String,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let kind = FieldKind::from(args.kind);
    let formatted = reformat_field(kind, &args.text);
    Ok(json!({
        "kind": kind.to_string(),
        "input": args.text,
        "formatted": formatted,
    }))
}
