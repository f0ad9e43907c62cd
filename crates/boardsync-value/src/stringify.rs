//! Canonical string form of board values.

use crate::json::to_json;
use crate::value::Value;

/// Canonical compact string form of a value, used as a content
/// identifier for leaf equality and array alignment.
///
/// Scalars and containers serialize as compact JSON text; dates and
/// file references contribute their string form. Two values with equal
/// canonical strings are treated as equal by the differ's leaf
/// comparison and alignment heuristic.
pub fn canonical(value: &Value) -> String {
    serde_json::to_string(&to_json(value)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::from_json;
    use crate::value::{DateValue, FileRef};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn scalars_keep_their_json_form() {
        assert_eq!(canonical(&Value::Null), "null");
        assert_eq!(canonical(&Value::from(true)), "true");
        assert_eq!(canonical(&Value::from(12)), "12");
        assert_eq!(canonical(&Value::from("12")), "\"12\"");
    }

    #[test]
    fn containers_serialize_compactly() {
        let value = from_json(json!({"a": [1, 2], "b": "x"}));
        assert_eq!(canonical(&value), r#"{"a":[1,2],"b":"x"}"#);
    }

    #[test]
    fn equal_structures_share_a_canonical_form() {
        let a = from_json(json!([{"t": "one"}, {"t": "two"}]));
        let b = from_json(json!([{"t": "one"}, {"t": "two"}]));
        assert_eq!(canonical(&a), canonical(&b));
    }

    #[test]
    fn wrappers_use_their_string_form() {
        let date = DateValue::new(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(canonical(&Value::Date(date)), "\"2025-02-14\"");
        assert_eq!(
            canonical(&Value::FileRef(FileRef::new("a.md"))),
            "\"a.md\""
        );
    }
}
