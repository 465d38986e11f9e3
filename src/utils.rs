use tracing_subscriber::EnvFilter;

use crate::error::{CalcError, CalcResult};

/// Rounds to 2 decimal places. From 1e15 up a double has no hundredths left
/// to round, and scaling could overflow to infinity, so the value is kept.
pub fn round2(v: f64) -> f64 {
    if !v.is_finite() || v.abs() >= 1e15 {
        return v;
    }
    (v * 100.0).round() / 100.0
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Drops the fractional part, failing when the result does not fit an `i64`.
pub fn truncate_to_i64(v: f64) -> CalcResult<i64> {
    let t = v.trunc();
    if !t.is_finite() || t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return Err(CalcError::computation(format!(
            "cannot convert {v} to an integer"
        )));
    }
    Ok(t as i64)
}

/// Shortest round-trip rendering that always shows a fractional digit: `20.0`, `1.2`.
/// Exponents carry a sign and at least two digits: `1e+156`, `2.5e-07`.
pub fn display_float(v: f64) -> String {
    let s = format!("{v:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}
