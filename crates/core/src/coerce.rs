//! Lenient numeric coercion for advisory summary fields.

use serde_json::Value;

/// Coerces a loosely-typed JSON count into a non-negative integer.
///
/// Numbers and numeric strings that parse to a finite value are truncated
/// toward zero and clamped at zero. Anything else, including a missing
/// value, yields 0. Never fails.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite and positive; float-to-int `as` saturates"
)]
pub fn to_number_or_zero(value: Option<&Value>) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => {
            if let Some(exact) = n.as_u64() {
                return exact;
            }
            n.as_f64()
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if let Ok(exact) = trimmed.parse::<u64>() {
                return exact;
            }
            trimmed.parse::<f64>().ok()
        },
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc() as u64,
        _ => 0,
    }
}
