use serde_json::Value;
use tabled::settings::Style;
use tabled::{builder::Builder, Table};

use super::{display_slots, plain_text};
use crate::preferences::Theme;

/// Format output as a table. Quotes show their formatted slots; anything
/// else shows its fields. The theme picks the border style.
pub fn print_table(value: &Value, theme: Theme) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);

    if let Some(slots) = display_slots(value) {
        for (slot, text) in slots {
            builder.push_record([slot, text]);
        }
    } else {
        let body = value.get("result").unwrap_or(value);
        if let Value::Object(map) = body {
            for (key, val) in map {
                builder.push_record([key.clone(), plain_text(val)]);
            }
        } else {
            builder.push_record(["value".to_string(), plain_text(body)]);
        }
    }

    let mut table = Table::from(builder);
    match theme {
        Theme::Light => table.with(Style::ascii()),
        Theme::Dark => table.with(Style::rounded()),
    };
    println!("{}", table);

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
