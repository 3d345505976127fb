//! Coerce-or-default conversions for loosely typed input.
//!
//! Map-based record construction never fails: each field is pulled out of a
//! `serde_json` map with one of these functions, and anything missing or of
//! an unusable type collapses to the field's zero value. Strict parsing goes
//! through serde instead and does report errors.

use serde_json::{Map, Value};

/// String form of a value.
///
/// Strings pass through, booleans render as `true`/`false`, numbers render
/// in decimal (integral floats without a fractional part). `null`, arrays,
/// objects and absent values yield `""`.
pub fn to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_float).unwrap_or_default()
            }
        }
        _ => String::new(),
    }
}

/// Integer form of a value.
///
/// Integers pass through, floats truncate toward zero, booleans map to
/// `1`/`0`, and decimal strings are parsed (a trailing `.0`, `.00`, ... is
/// accepted). Surrounding whitespace in strings is ignored, as in
/// [`to_bool`]. Everything else, including out-of-range unsigned numbers,
/// yields `0`.
pub fn to_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_f64() {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
                    .unwrap_or(0)
            } else {
                0
            }
        }
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::String(s)) => trim_zero_decimal(s.trim()).parse().unwrap_or(0),
        _ => 0,
    }
}

/// Boolean form of a value.
///
/// Numbers are true when non-zero. Strings accept `1`, `t`, `true` and
/// `0`, `f`, `false` in any case; other strings are false.
pub fn to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true")
        }
        _ => false,
    }
}

/// Object form of a value.
///
/// Objects are cloned, strings holding a JSON object are parsed. Anything
/// else yields an empty map.
pub fn to_map(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((whole, frac))
            if !whole.is_empty() && !frac.is_empty() && frac.bytes().all(|b| b == b'0') =>
        {
            whole
        }
        _ => s,
    }
}
