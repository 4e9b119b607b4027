//! "Declared value, else default" helpers.
//!
//! Every optional resource field is resolved through one of these, so the
//! defaulting rule for each primitive lives in exactly one place.

/// Duration strings: an absent or empty value falls back to `default`.
pub fn time_with_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Integers where any declared value, including zero, wins.
pub fn int_with_default(value: Option<u32>, default: u32) -> u32 {
    value.unwrap_or(default)
}

/// Integers where zero means "not declared".
pub fn positive_int_with_default(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}

pub fn bool_with_default(value: Option<bool>, default: bool) -> bool {
    value.unwrap_or(default)
}
