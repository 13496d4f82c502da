//! Loose coercion over raw JSON values.
//!
//! Form clients send numbers as strings, strings as numbers, and omit fields
//! freely, so request bodies are handled as `serde_json::Value` and coerced
//! here with JS-style truthiness and prefix parsing rather than strict serde
//! deserialization.

use serde_json::Value;

/// Empty strings, zero, `false` and null all count as "missing".
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a value: strings as-is, everything else via its JSON
/// rendering (so a numeric `duration` of `3` becomes `"3"`).
pub fn text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse the leading integer prefix of a value's string form, e.g.
/// `"3 hours"` -> 3, `"-2.9"` -> -2. `None` when there is no digit prefix.
pub fn parse_int(v: &Value) -> Option<i64> {
    let s = text(v);
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Integer coercion with a fallback. Zero also falls back, matching the
/// `parseInt(x) || d` idiom the form clients were built against.
pub fn int_or(v: &Value, default: i64) -> i64 {
    match parse_int(v) {
        Some(0) | None => default,
        Some(n) => n,
    }
}

/// Parse the longest numeric prefix of a value's string form as a float.
pub fn parse_float(v: &Value) -> Option<f64> {
    if let Value::Number(n) = v {
        return n.as_f64();
    }
    let s = text(v);
    let s = s.trim();
    let ends: Vec<usize> = s.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
    for &end in ends.iter().rev() {
        if let Ok(f) = s[..end].parse::<f64>() {
            return Some(f);
        }
    }
    None
}

/// Float coercion with a fallback; zero and NaN fall back (`parseFloat(x) || d`).
pub fn float_or(v: &Value, default: f64) -> f64 {
    match parse_float(v) {
        Some(f) if f != 0.0 && !f.is_nan() => f,
        _ => default,
    }
}
