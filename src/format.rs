//! Display-string helpers. All of them are total: a missing or blank value
//! becomes [`PLACEHOLDER`] instead of an error.

use crate::record::{DistanceTier, Duration, PriceMatrix};

pub const PLACEHOLDER: &str = "-";
pub const CURRENCY: &str = "€";
pub const MILLIMETRES: &str = "mm";

/// Trimmed value, or `None` when absent or blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn or_placeholder(value: Option<&str>) -> String {
    present(value).unwrap_or(PLACEHOLDER).to_string()
}

pub fn format_price(matrix: &PriceMatrix, tier: DistanceTier, duration: Duration) -> String {
    match matrix.get(tier, duration) {
        Some(value) => format!("{value}{CURRENCY}"),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_dimension(value: Option<&str>, unit: &str) -> String {
    match present(value) {
        Some(value) => format!("{value}{unit}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Appends `suffix` after a space: `49 L`, `124 g/km`.
pub fn with_suffix(value: Option<&str>, suffix: &str) -> String {
    match present(value) {
        Some(value) => format!("{value} {suffix}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Monthly surcharge suffix; absent amounts produce nothing at all.
pub fn surcharge(value: Option<&str>) -> Option<String> {
    present(value).map(|value| format!("+ {value} {CURRENCY}"))
}

/// es-ES grouping: `.` every three digits, but four-digit values stay
/// ungrouped.
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    if digits.len() <= 4 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (idx + 3 - lead) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
