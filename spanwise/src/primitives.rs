//! Primitive value helpers
//!
//! Small predicates over loosely-typed input, shared by the humanizer's
//! argument checks and unit matching.

use serde_json::Value;

/// Check whether a value is a finite number
///
/// Only JSON numbers qualify. Numeric-looking strings, booleans and null do
/// not. `serde_json` cannot hold NaN or infinity, so every number passes.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// Check whether a string is missing, empty or whitespace only
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// Normalize a nullable boolean
///
/// Returns the boolean when the value is one, `false` for anything else
/// (missing, null, `"true"`, `1`, ...).
#[must_use]
pub fn normalize_bool(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

/// Compare two strings ignoring ASCII case and all whitespace
#[must_use]
pub fn loose_eq(a: &str, b: &str) -> bool {
    let mut left = a.chars().filter(|c| !c.is_whitespace());
    let mut right = b.chars().filter(|c| !c.is_whitespace());
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if l.eq_ignore_ascii_case(&r) => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&json!(1)));
        assert!(is_numeric(&json!(-3)));
        assert!(is_numeric(&json!(0.25)));
        assert!(is_numeric(&json!(u64::MAX)));

        assert!(!is_numeric(&Value::Null));
        assert!(!is_numeric(&json!("12")));
        assert!(!is_numeric(&json!(true)));
        assert!(!is_numeric(&json!({ "value": 1 })));
        assert!(!is_numeric(&json!([1])));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t\n")));
        assert!(!is_blank(Some("ms")));
        assert!(!is_blank(Some(" d ")));
    }

    #[test]
    fn test_normalize_bool() {
        assert!(normalize_bool(Some(&json!(true))));
        assert!(!normalize_bool(Some(&json!(false))));
        assert!(!normalize_bool(None));
        assert!(!normalize_bool(Some(&Value::Null)));
        assert!(!normalize_bool(Some(&json!("true"))));
        assert!(!normalize_bool(Some(&json!(1))));
    }

    #[test]
    fn test_loose_eq() {
        assert!(loose_eq("day", "day"));
        assert!(loose_eq("Day", "dAY"));
        assert!(loose_eq(" milli second ", "millisecond"));
        assert!(loose_eq("", "  "));

        assert!(!loose_eq("day", "days"));
        assert!(!loose_eq("minute", "month"));
        assert!(!loose_eq("d", ""));
    }
}
