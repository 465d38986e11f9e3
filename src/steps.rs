//! Human-readable working shown next to interest results.
//!
//! Pure formatting over values the calculators already produced.

use serde::Serialize;

use crate::fraction::Fraction;
use crate::utils::{display_float, round2};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationStep {
    pub step: u32,
    pub equation: String,
    pub description: String,
}

fn numbered(steps: Vec<(String, String)>) -> Vec<CalculationStep> {
    steps
        .into_iter()
        .zip(1..)
        .map(|((equation, description), step)| CalculationStep {
            step,
            equation,
            description,
        })
        .collect()
}

/// Five steps isolating `r` in `A = P[1 + r/100]^t`.
///
/// `principal` and `amount` are the already-truncated integers, `simplified`
/// the reduced `amount:principal` ratio.
pub fn rate_steps(
    principal: i64,
    amount: i64,
    time: i64,
    simplified: Fraction,
    rate_percent: f64,
) -> Vec<CalculationStep> {
    let (n, d) = (simplified.numerator, simplified.denominator);
    numbered(vec![
        (
            format!("{principal} = P[1 + r/100]^{time} = {amount}"),
            "Given equation".to_string(),
        ),
        (
            format!("[1 + r/100]^{time} = {amount}/{principal}"),
            "Isolate the bracket term".to_string(),
        ),
        (
            format!("[1 + r/100]^{time} = {n}/{d}"),
            "Simplify the ratio".to_string(),
        ),
        (
            format!("1 + r/100 = ({n}/{d})^(1/{time})"),
            format!("Take {time}th root"),
        ),
        (
            format!("r = {}%", display_float(round2(rate_percent))),
            "Calculate rate".to_string(),
        ),
    ])
}

/// Three steps evaluating `A = P[1 + rate/100]^t`. The rate factor is shown
/// unrounded, the final amount to 2 places.
pub fn amount_steps(principal: i64, rate: f64, time: i64, rate_factor: f64, amount: f64) -> Vec<CalculationStep> {
    numbered(vec![
        (
            format!("A = {principal}[1 + {}/100]^{time}", display_float(rate)),
            "Compound interest formula".to_string(),
        ),
        (
            format!("A = {principal} × {}^{time}", display_float(rate_factor)),
            "Calculate rate factor".to_string(),
        ),
        (
            format!("A = {}", display_float(round2(amount))),
            "Final amount".to_string(),
        ),
    ])
}
