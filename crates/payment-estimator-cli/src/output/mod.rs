pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::preferences::Theme;
use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, theme: Theme) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value, theme),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Scalar JSON value as plain text.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(plain_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// `(slot, text)` pairs from a quote's `display` array, if it has one.
pub(crate) fn display_slots(value: &Value) -> Option<Vec<(String, String)>> {
    let slots = value.get("display")?.as_array()?;
    Some(
        slots
            .iter()
            .filter_map(|s| {
                let slot = s.get("slot")?.as_str()?;
                let text = s.get("text")?.as_str()?;
                Some((slot.to_string(), text.to_string()))
            })
            .collect(),
    )
}
