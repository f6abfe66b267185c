//! Deterministic numeric helpers.
//!
//! Every derived figure in a report goes through these functions so that all
//! renderers clamp, round and scale the same way.

#![forbid(unsafe_code)]

/// Upper bound for any percentage figure.
pub const MAX_PERCENT: f64 = 100.0;

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Clamp a percentage into `[0, 100]`. NaN becomes `0.0`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_PERCENT)
}

/// Convert a raw measure into a non-negative count.
///
/// Fractional parts are truncated; negative and NaN values become `0`.
#[must_use]
pub fn clamp_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for huge or infinite values.
    value.trunc() as u64
}

/// Convert a percentage into a 4-decimal rate in `[0, 1]`.
#[must_use]
pub fn percent_to_rate(percent: f64) -> f64 {
    round_f64(clamp_percent(percent) / MAX_PERCENT, 4)
}

/// Return `round(total * percent / 100)`, never exceeding `total`.
#[must_use]
pub fn scaled_count(total: u64, percent: f64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = (total as f64 * clamp_percent(percent) / MAX_PERCENT).round();
    clamp_count(scaled).min(total)
}
