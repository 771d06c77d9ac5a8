//! Sanitization and coercion helpers for untrusted block attributes.
//!
//! These mirror the escaping primitives a theme expects when interpolating
//! attribute values into markup or inline CSS.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Matches an already-encoded character reference (`&amp;`, `&#39;`, `&#x27;`).
#[allow(clippy::expect_used)]
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
        .expect("valid regex literal")
});

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex literal"));

/// Escape a value for use inside a double-quoted HTML attribute.
///
/// Existing character references are left alone so escaping is idempotent.
pub fn esc_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, ch) in input.char_indices() {
        match ch {
            '&' if ENTITY.is_match(&input[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reduce a string to characters valid in a class name or preset slug.
pub fn sanitize_html_class(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Strip all markup from a text value, collapse whitespace and trim.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(input).to_string();
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Coerce an arbitrary JSON value to a non-negative integer.
///
/// Strings contribute their leading integer (`"768px"` is 768), anything
/// unparseable is 0 and negative values are mirrored.
pub fn absint(value: &Value) -> u32 {
    let raw: i64 = match value {
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    };
    u32::try_from(raw.unsigned_abs()).unwrap_or(u32::MAX)
}

fn leading_integer(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed = digits[..end].parse::<i64>().unwrap_or(0);
    if negative { -parsed } else { parsed }
}

/// Loose truthiness for flags stored as bools, numbers or strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
    }
}
