use serde_json::Value;

use super::{display_slots, plain_text};

/// Fields printed by `--output minimal`, most important first.
const PRIORITY_KEYS: [&str; 4] = ["monthly_payment", "formatted", "theme", "principal"];

/// Print just the headline answer: the formatted monthly payment for a
/// quote, otherwise the first priority field present.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    if let Some(slots) = display_slots(value) {
        if let Some((_, text)) = slots.iter().find(|(slot, _)| slot == "monthly_payment") {
            return text.clone();
        }
    }

    let result_obj = value.get("result").unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return plain_text(val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, plain_text(val));
        }
    }

    plain_text(result_obj)
}
