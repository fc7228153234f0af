//! Delimited text fields into label and numeric sequences.
//!
//! Fields accept both the ASCII comma and the full-width comma (`，`), in any mix.
//! Tokens are trimmed but never dropped, so `"a,,b"` yields three labels.

use regex::Regex;
use std::sync::LazyLock;

/// Separators accepted between tokens.
pub const DELIMITERS: [char; 2] = [',', '，'];

// Longest numeric prefix, the way browsers' `parseFloat` reads it.
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid number regex")
});

/// Split a raw field into trimmed tokens.
pub fn split_fields(raw: &str) -> Vec<String> {
    raw.split(DELIMITERS)
        .map(|t| t.trim().to_string())
        .collect()
}

/// Parse one token as a float, reading its numeric prefix.
///
/// `"12abc"` is 12. A token without a numeric prefix is NaN rather than an error.
pub fn parse_number(token: &str) -> f64 {
    let token = token.trim_start();
    let Some(m) = NUMBER_PREFIX.find(token) else {
        return f64::NAN;
    };
    let s = m.as_str();
    match s.trim_start_matches(['+', '-']) {
        "Infinity" if s.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => s.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Split and parse a numeric field.
pub fn parse_values(raw: &str) -> Vec<f64> {
    split_fields(raw).iter().map(|t| parse_number(t)).collect()
}
