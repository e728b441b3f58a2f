use serde_json::{Map, Value};

/// Returns a copy of `object` with every falsy-valued entry removed, so host
/// callbacks never see noisy empty fields. Truthiness follows the usual JS
/// rule on JSON values: `null`, `false`, numeric zero and the empty string
/// are falsy; arrays and objects (empty ones included) are truthy. Only
/// top-level keys are inspected.
pub fn clean_object(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Appends the active-state style text after the base style. Inline CSS is
/// order-sensitive, so colliding declarations resolve in favor of the
/// active-state override.
pub fn merge_styles(base: &str, active: &str) -> String {
    let base = base.trim();
    let active = active.trim();
    if base.is_empty() {
        return active.to_string();
    }
    if active.is_empty() {
        return base.to_string();
    }
    format!("{}; {}", base.trim_end_matches(';'), active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_clean_object_removes_falsy_values() {
        let object = as_map(json!({
            "a": "value",
            "b": null,
            "d": false,
            "e": 0,
            "f": ""
        }));
        assert_eq!(clean_object(&object), as_map(json!({ "a": "value" })));
    }

    #[test]
    fn test_clean_object_keeps_empty_collections() {
        let object = as_map(json!({
            "list": [],
            "map": {},
            "gone": 0.0
        }));
        assert_eq!(
            clean_object(&object),
            as_map(json!({ "list": [], "map": {} }))
        );
    }

    #[test]
    fn test_clean_object_empty_input() {
        assert_eq!(clean_object(&Map::new()), Map::new());
    }

    #[test]
    fn test_clean_object_no_falsy_values() {
        let object = as_map(json!({
            "a": "value",
            "b": "another value",
            "n": 2
        }));
        assert_eq!(clean_object(&object), object);
    }

    #[test]
    fn test_merge_styles() {
        assert_eq!(merge_styles("", ""), "");
        assert_eq!(merge_styles("color: blue", ""), "color: blue");
        assert_eq!(merge_styles("", "color: red"), "color: red");
        assert_eq!(
            merge_styles("color: blue;", "color: red"),
            "color: blue; color: red"
        );
    }
}
