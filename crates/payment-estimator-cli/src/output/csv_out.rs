use serde_json::Value;
use std::io;

use super::{display_slots, plain_text};

/// Write output as two-column CSV (`field,value`) to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    for record in csv_records(value) {
        let _ = wtr.write_record([record.0.as_str(), record.1.as_str()]);
    }
    let _ = wtr.flush();
}

/// Header row, then the raw result fields, then the formatted display slots.
fn csv_records(value: &Value) -> Vec<(String, String)> {
    let mut records = vec![("field".to_string(), "value".to_string())];

    let body = value.get("result").unwrap_or(value);
    match body {
        Value::Object(map) => {
            for (key, val) in map {
                if key != "display" {
                    records.push((key.clone(), plain_text(val)));
                }
            }
        }
        other => records.push(("value".to_string(), plain_text(other))),
    }

    if let Some(slots) = display_slots(value) {
        for (slot, text) in slots {
            records.push((format!("{slot}_display"), text));
        }
    }

    records
}
