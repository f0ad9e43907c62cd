//! Conversion between board values and `serde_json::Value`.
//!
//! JSON is how board fixtures are written and how snapshots are
//! rendered for diagnostics. Plain JSON cannot carry the opaque leaf
//! wrappers, so `to_json` renders them in their string form; parsing
//! layers that produce dates and file references construct those
//! variants directly.

use std::rc::Rc;

use crate::value::{Map, Value};

/// Build a board value from a JSON value.
///
/// Mapping key order follows the JSON document (serde_json is compiled
/// with `preserve_order`).
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(Rc::new(items.into_iter().map(from_json).collect()))
        }
        serde_json::Value::Object(map) => {
            let converted: Map = map.into_iter().map(|(k, v)| (k, from_json(v))).collect();
            Value::Object(Rc::new(converted))
        }
    }
}

/// Render a board value as JSON.
///
/// Dates render as their ISO string, file references as their link
/// form.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Date(d) => serde_json::Value::String(d.to_iso_string()),
        Value::FileRef(f) => serde_json::Value::String(f.to_link_string()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DateValue, FileRef};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn json_round_trip() {
        let json = json!({
            "children": [{"id": "a1", "data": {"title": "Todo"}}],
            "data": {"settings": {"hideTags": false}},
        });
        let value = from_json(json.clone());
        assert_eq!(to_json(&value), json);
    }

    #[test]
    fn key_order_is_preserved() {
        let value = from_json(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn wrappers_render_as_strings() {
        let date = DateValue::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(to_json(&Value::Date(date)), json!("2024-06-01"));

        let file = FileRef::embedded("diagram.png");
        assert_eq!(to_json(&Value::FileRef(file)), json!("!diagram.png"));
    }

    #[test]
    fn numbers_survive_conversion() {
        let value = from_json(json!([0, -3, 2.5]));
        assert_eq!(to_json(&value), json!([0, -3, 2.5]));
    }
}
