use serde_json::{json, Number, Value};

use crate::model::ButtonConfig;

/// Pretty-printed design-token document.
///
/// `variants` carries hover, active, focus and disabled only. Neither
/// `default` (it is `base`) nor `loading` is included.
pub fn design_tokens(config: &ButtonConfig) -> String {
    let states = &config.states;
    let mut document = json!({
        "base": {
            "background": &states.default.background,
            "text": &states.default.text_color,
            "border": &states.default.border_color,
        },
        "typography": &config.typography,
        "layout": &config.layout,
        "motion": &config.motion,
        "effects": &config.effects,
        "variants": {
            "hover": &states.hover,
            "active": &states.active,
            "focus": &states.focus,
            "disabled": &states.disabled,
        },
    });
    integral_numbers(&mut document);
    format!("{document:#}")
}

/// Whole floats up to 2^53 print as integers (`14`, not `14.0`).
fn integral_numbers(value: &mut Value) {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match value {
        Value::Number(number) if number.is_f64() => {
            let float = number.as_f64().unwrap_or_default();
            if float.fract() == 0.0 && float.abs() <= MAX_EXACT {
                *number = Number::from(float as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_numbers),
        Value::Object(entries) => entries.values_mut().for_each(integral_numbers),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parsed(config: &ButtonConfig) -> Value {
        serde_json::from_str(&design_tokens(config)).unwrap()
    }

    #[test]
    fn token_document_has_fixed_top_level_keys_in_order() {
        let document = parsed(&ButtonConfig::default());
        let keys: Vec<&str> = document
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            ["base", "typography", "layout", "motion", "effects", "variants"]
        );
    }

    #[test]
    fn variants_exclude_default_and_loading() {
        let document = parsed(&ButtonConfig::default());
        let variants = document["variants"].as_object().unwrap();
        let keys: Vec<&str> = variants.keys().map(String::as_str).collect();
        assert_eq!(keys, ["hover", "active", "focus", "disabled"]);
        assert!(!variants.contains_key("loading"));
        assert!(!variants.contains_key("default"));
    }

    #[test]
    fn base_snapshot_reads_default_state() {
        let document = parsed(&ButtonConfig::default());
        assert_eq!(
            document["base"],
            serde_json::json!({
                "background": { "type": "solid", "value": "#18181b" },
                "text": "#ffffff",
                "border": "#27272a"
            })
        );
    }

    #[test]
    fn variants_are_state_records_verbatim() {
        let config = ButtonConfig::default();
        let document = parsed(&config);
        let focus: crate::model::StateStyle =
            serde_json::from_value(document["variants"]["focus"].clone()).unwrap();
        assert_eq!(focus, config.states.focus);
        assert_eq!(document["variants"]["active"]["transform"]["scale"], 0.98);
        assert_eq!(document["layout"]["padding"]["left"], 24.0);
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        let text = design_tokens(&ButtonConfig::default());
        assert!(text.contains("\"fontSize\": 14,"));
        assert!(text.contains("\"top\": 12,"));
        assert!(text.contains("\"letterSpacing\": 0,"));
        assert!(text.contains("\"scale\": 0.98"));
        assert!(!text.contains(".0,"));
        assert!(!text.contains(".0\n"));
    }

    #[test]
    fn negative_zero_and_fractions_keep_their_value() {
        let mut value = json!({ "a": -0.0, "b": [1.5, 2.0], "c": 3 });
        integral_numbers(&mut value);
        assert_eq!(value.to_string(), r#"{"a":0,"b":[1.5,2],"c":3}"#);
    }

    #[test]
    fn token_document_is_deterministic_and_indented() {
        let config = ButtonConfig::default();
        let text = design_tokens(&config);
        assert_eq!(text, design_tokens(&config));
        assert!(text.starts_with("{\n  \"base\": {\n"));
    }
}
