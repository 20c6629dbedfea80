//! Lenient helpers for reading typed parameters out of a `serde_json::Value`.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value has the wrong type, the default is returned, so a
//! partial parameter object always overlays cleanly on the defaults.

use serde_json::Value;

use crate::color::Rgb;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative integers qualify; values too large for `usize` saturate.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
        .unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing,
/// wrong type, or out of range.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts an [`Rgb`] from `params[name]`.
///
/// Accepts an `[r, g, b]` array of 0-255 integers or a `"#rrggbb"` string.
/// Anything else returns `default`.
pub fn param_rgb(params: &Value, name: &str, default: Rgb) -> Rgb {
    match params.get(name) {
        Some(Value::Array(items)) => items
            .iter()
            .map(Value::as_u64)
            .collect::<Option<Vec<u64>>>()
            .and_then(|c| Rgb::from_components(&c).ok())
            .unwrap_or(default),
        Some(Value::String(hex)) => Rgb::from_hex(hex).unwrap_or(default),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"link_radius": 95.5});
        assert!((param_f64(&params, "link_radius", 120.0) - 95.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"hover_radius": 80});
        assert!((param_f64(&params, "hover_radius", 0.0) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_missing_or_wrong_type() {
        assert_eq!(param_f64(&json!({}), "drift", 0.45), 0.45);
        assert_eq!(param_f64(&json!({"drift": "fast"}), "drift", 0.45), 0.45);
        assert_eq!(param_f64(&json!({"drift": null}), "drift", 0.45), 0.45);
        assert_eq!(param_f64(&json!("not an object"), "drift", 0.45), 0.45);
    }

    // -- param_usize / param_u32 --

    #[test]
    fn param_usize_extracts_existing_integer() {
        assert_eq!(param_usize(&json!({"node_count": 42}), "node_count", 0), 42);
    }

    #[test]
    fn param_usize_rejects_float_and_negative() {
        assert_eq!(param_usize(&json!({"node_count": 2.5}), "node_count", 90), 90);
        assert_eq!(param_usize(&json!({"node_count": -1}), "node_count", 90), 90);
    }

    #[test]
    fn param_u32_rejects_out_of_range() {
        assert_eq!(param_u32(&json!({"octaves": 3}), "octaves", 4), 3);
        assert_eq!(
            param_u32(&json!({"octaves": 5_000_000_000_u64}), "octaves", 4),
            4
        );
    }

    // -- param_string --

    #[test]
    fn param_string_extracts_existing_string() {
        let params = json!({"resize_policy": "reinitialize"});
        assert_eq!(
            param_string(&params, "resize_policy", "preserve"),
            "reinitialize"
        );
    }

    #[test]
    fn param_string_returns_default_for_wrong_type() {
        assert_eq!(
            param_string(&json!({"resize_policy": 1}), "resize_policy", "preserve"),
            "preserve"
        );
    }

    // -- param_rgb --

    #[test]
    fn param_rgb_accepts_triple() {
        let params = json!({"background": [1, 2, 3]});
        assert_eq!(
            param_rgb(&params, "background", Rgb::new(0, 0, 0)),
            Rgb::new(1, 2, 3)
        );
    }

    #[test]
    fn param_rgb_accepts_hex_string() {
        let params = json!({"background": "#0f1116"});
        assert_eq!(
            param_rgb(&params, "background", Rgb::new(0, 0, 0)),
            Rgb::new(15, 17, 22)
        );
    }

    #[test]
    fn param_rgb_falls_back_on_bad_input() {
        let fallback = Rgb::new(9, 9, 9);
        for bad in [
            json!({"background": [1, 2]}),
            json!({"background": [1, 2, 300]}),
            json!({"background": [1, "x", 3]}),
            json!({"background": "#zzzzzz"}),
            json!({"background": 7}),
            json!({}),
        ] {
            assert_eq!(param_rgb(&bad, "background", fallback), fallback, "{bad}");
        }
    }
}
