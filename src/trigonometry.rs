use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::fraction::{limit_denominator, MAX_DISPLAY_DENOMINATOR};
use crate::utils::round2;

/// Three integer sides with `a² + b² == c²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triplet {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    pub perpendicular: i64,
    pub base: i64,
    /// Rounded to 2 places; display only.
    pub hypotenuse: f64,
}

/// A ratio in both forms. `numerator/denominator` approximates `decimal`
/// with a denominator of at most 1000.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecimalFraction {
    pub numerator: i64,
    pub denominator: i64,
    pub decimal: f64,
}

impl DecimalFraction {
    fn from_decimal(decimal: f64) -> CalcResult<Self> {
        let f = limit_denominator(decimal, MAX_DISPLAY_DENOMINATOR)?;
        Ok(Self {
            numerator: f.numerator,
            denominator: f.denominator,
            decimal,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigResult {
    pub sec_c: DecimalFraction,
    pub cot_a: DecimalFraction,
    pub result: DecimalFraction,
    pub triangle: Triangle,
}

// |i64::MIN|² + |i64::MIN|² is 2^127, which still fits in u128.
fn sum_of_squares(a: i64, b: i64) -> u128 {
    let (a, b) = (a.unsigned_abs() as u128, b.unsigned_abs() as u128);
    a * a + b * b
}

fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // float seed, then correct the last few units
    let mut r = (n as f64).sqrt() as u128;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

pub fn hypotenuse(perpendicular: i64, base: i64) -> f64 {
    (sum_of_squares(perpendicular, base) as f64).sqrt()
}

pub fn find_pythagorean_triplet(a: i64, b: i64) -> Option<Triplet> {
    let c_squared = sum_of_squares(a, b);
    let c = isqrt(c_squared);
    if c * c == c_squared {
        Some(Triplet { a, b, c: i64::try_from(c).ok()? })
    } else {
        None
    }
}

pub fn verify_pythagorean_triplet(a: i64, b: i64, c: i64) -> bool {
    let c = c.unsigned_abs() as u128;
    sum_of_squares(a, b) == c * c
}

/// Sec C + Cot A for a right triangle, with Sec C = hypotenuse / base and
/// Cot A = perpendicular / base.
///
/// Fractions are computed from the unrounded hypotenuse; only the echoed
/// triangle is rounded.
pub fn calculate_sec_cot(perpendicular: i64, base: i64, hypotenuse: f64) -> CalcResult<TrigResult> {
    if base == 0 {
        return Err(CalcError::invalid("base must not be zero"));
    }
    let base_f = base as f64;
    let sec_c = hypotenuse / base_f;
    let cot_a = perpendicular as f64 / base_f;
    let result = sec_c + cot_a;

    Ok(TrigResult {
        sec_c: DecimalFraction::from_decimal(sec_c)?,
        cot_a: DecimalFraction::from_decimal(cot_a)?,
        result: DecimalFraction::from_decimal(result)?,
        triangle: Triangle {
            perpendicular,
            base,
            hypotenuse: round2(hypotenuse),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_triplet() {
        assert_eq!(find_pythagorean_triplet(7, 24), Some(Triplet { a: 7, b: 24, c: 25 }));
        assert_eq!(find_pythagorean_triplet(3, 4), Some(Triplet { a: 3, b: 4, c: 5 }));
        assert_eq!(find_pythagorean_triplet(5, 6), None);
    }

    #[test]
    fn test_find_triplet_large_sides() {
        // 3-4-5 scaled well past f64's exact integer range once squared
        let k = 1_000_000_007;
        assert_eq!(
            find_pythagorean_triplet(3 * k, 4 * k),
            Some(Triplet { a: 3 * k, b: 4 * k, c: 5 * k })
        );
        assert_eq!(find_pythagorean_triplet(3 * k, 4 * k + 1), None);
    }

    #[test]
    fn test_extreme_legs_do_not_overflow() {
        assert_eq!(find_pythagorean_triplet(i64::MIN, i64::MIN), None);
        assert_eq!(find_pythagorean_triplet(i64::MAX, i64::MAX), None);
        // c would be 2^63, one past i64::MAX
        assert_eq!(find_pythagorean_triplet(i64::MIN, 0), None);
        assert_eq!(
            find_pythagorean_triplet(i64::MAX, 0),
            Some(Triplet { a: i64::MAX, b: 0, c: i64::MAX })
        );

        assert!(verify_pythagorean_triplet(i64::MIN, 0, i64::MIN));
        assert!(!verify_pythagorean_triplet(i64::MIN, i64::MIN, i64::MIN));

        let h = hypotenuse(i64::MIN, i64::MIN);
        assert!((h / (i64::MIN as f64).abs() - 2f64.sqrt()).abs() < 1e-12);

        let r = calculate_sec_cot(i64::MIN, i64::MIN, h).unwrap();
        assert!((r.result.decimal - (1.0 - 2f64.sqrt())).abs() < 1e-12);
        assert_eq!((r.cot_a.numerator, r.cot_a.denominator), (1, 1));
    }

    #[test]
    fn test_verify_triplet() {
        assert!(verify_pythagorean_triplet(3, 4, 5));
        assert!(verify_pythagorean_triplet(7, 24, 25));
        assert!(verify_pythagorean_triplet(20, 21, 29));
        assert!(!verify_pythagorean_triplet(5, 6, 8));
        assert!(!verify_pythagorean_triplet(3, 4, 6));

        for a in 1..30 {
            for b in 1..30 {
                for c in 1..45 {
                    assert_eq!(verify_pythagorean_triplet(a, b, c), a * a + b * b == c * c);
                }
            }
        }
    }

    #[test]
    fn test_sec_cot_pythagorean_triangle() {
        let r = calculate_sec_cot(7, 24, 25.0).unwrap();

        assert!((r.result.decimal - (25.0 / 24.0 + 7.0 / 24.0)).abs() < 1e-3);
        assert_eq!((r.sec_c.numerator, r.sec_c.denominator), (25, 24));
        assert_eq!((r.cot_a.numerator, r.cot_a.denominator), (7, 24));
        assert_eq!((r.result.numerator, r.result.denominator), (4, 3));
        assert_eq!(r.triangle, Triangle { perpendicular: 7, base: 24, hypotenuse: 25.0 });
    }

    #[test]
    fn test_sec_cot_irrational_hypotenuse() {
        let h = 61f64.sqrt();
        let r = calculate_sec_cot(5, 6, h).unwrap();

        let expected = h / 6.0 + 5.0 / 6.0;
        assert!((r.result.decimal - expected).abs() < 1e-3);
        assert!((r.result.decimal - 2.135).abs() < 1e-3);
        assert_eq!(r.triangle.hypotenuse, 7.81);
        // decimal keeps the unrounded hypotenuse
        assert_eq!(r.sec_c.decimal, h / 6.0);
        assert!(r.sec_c.denominator <= 1000);
    }

    #[test]
    fn test_zero_base_is_invalid() {
        assert!(matches!(
            calculate_sec_cot(7, 0, 7.0),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let h = hypotenuse(5, 6);
        assert_eq!(calculate_sec_cot(5, 6, h), calculate_sec_cot(5, 6, h));
    }

    #[test]
    fn test_hypotenuse() {
        assert_eq!(hypotenuse(7, 24), 25.0);
        assert!((hypotenuse(5, 6) - 61f64.sqrt()).abs() < 1e-12);
    }
}
