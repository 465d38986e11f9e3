//! Rational display helpers.
//!
//! Results are shown to the user as fractions, but they are computed as `f64`.
//! [`limit_denominator`] picks the fraction closest to the float with a bounded
//! denominator, so the fraction is an approximation whenever the underlying
//! value is irrational (e.g. `sqrt(61) / 6`).

use serde::Serialize;
use std::fmt;

use crate::error::{CalcError, CalcResult};

/// Largest denominator used when turning a decimal into a display fraction.
pub const MAX_DISPLAY_DENOMINATOR: i64 = 1000;

// Binary exponents below this are treated as zero; keeps the search inside i128.
const MAX_EXACT_SHIFT: i32 = 112;

/// A fraction in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Builds `numerator / denominator` reduced to lowest terms, sign on the numerator.
    pub fn reduced(numerator: i64, denominator: i64) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::computation("division by zero"));
        }
        let g = gcd(numerator, denominator) as i128;
        let (mut n, mut d) = (numerator as i128 / g, denominator as i128 / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        from_i128(n, d)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Greatest common divisor of the absolute values. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Closest fraction to `value` whose denominator does not exceed `max_denominator`.
///
/// Works on the exact binary value of the float: walks its continued fraction
/// until the next convergent's denominator would be too large, then compares
/// the last convergent with the best semiconvergent. Ties go to the convergent.
pub fn limit_denominator(value: f64, max_denominator: i64) -> CalcResult<Fraction> {
    if max_denominator < 1 {
        return Err(CalcError::computation("max_denominator should be at least 1"));
    }
    let (num, den) = match exact_ratio(value)? {
        Some(r) => r,
        None => return Ok(Fraction { numerator: 0, denominator: 1 }),
    };
    let max = max_denominator as i128;
    if den <= max {
        return from_i128(num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n.div_euclid(d);
        let q2 = q0 + a * q1;
        if q2 > max {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }

    let k = (max - q0) / q1;
    let semi_den = q0 + k * q1;
    let lhs = d
        .checked_mul(2 * semi_den)
        .ok_or_else(|| CalcError::computation("fraction search overflowed"))?;
    if lhs <= den {
        from_i128(p1, q1)
    } else {
        from_i128(p0 + k * p1, semi_den)
    }
}

/// Exact `numerator / 2^shift` form of a finite float, odd numerator.
/// `None` means the value is too small to matter for any display denominator.
fn exact_ratio(value: f64) -> CalcResult<Option<(i128, i128)>> {
    if !value.is_finite() {
        return Err(CalcError::computation(format!(
            "cannot convert {value} to a fraction"
        )));
    }
    if value == 0.0 {
        return Ok(Some((0, 1)));
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let tz = mantissa.trailing_zeros();
    mantissa >>= tz;
    exponent += tz as i32;

    let signed = |m: i128| if negative { -m } else { m };
    if exponent >= 0 {
        let too_large = || CalcError::computation(format!("{value} is too large for a fraction"));
        if exponent >= 64 {
            return Err(too_large());
        }
        let whole = (mantissa as i128) << exponent;
        if whole > i64::MAX as i128 {
            return Err(too_large());
        }
        Ok(Some((signed(whole), 1)))
    } else if -exponent > MAX_EXACT_SHIFT {
        Ok(None)
    } else {
        Ok(Some((signed(mantissa as i128), 1i128 << (-exponent))))
    }
}

fn from_i128(n: i128, d: i128) -> CalcResult<Fraction> {
    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(numerator), Ok(denominator)) => Ok(Fraction { numerator, denominator }),
        _ => Err(CalcError::computation("fraction out of range")),
    }
}
