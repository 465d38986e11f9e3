use serde::Serialize;
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::fraction::{limit_denominator, Fraction, MAX_DISPLAY_DENOMINATOR};
use crate::steps::{amount_steps, rate_steps, CalculationStep};
use crate::utils::{round2, truncate_to_i64};

/// `amount:principal` after truncating both to integers, not reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratio {
    pub numerator: i64,
    pub denominator: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResult {
    pub rate_percent: f64,
    pub rate_decimal: f64,
    pub rate_fraction: Fraction,
    pub ratio: Ratio,
    pub simplified_ratio: Fraction,
    pub calculation_steps: Vec<CalculationStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountResult {
    pub principal: f64,
    pub rate: f64,
    pub time: i64,
    pub amount: f64,
    pub interest: f64,
    pub calculation_steps: Vec<CalculationStep>,
}

pub fn validate_rate_inputs(principal: f64, amount: f64, time: i64) -> CalcResult<()> {
    if principal <= 0.0 || amount <= 0.0 || time <= 0 {
        return Err(CalcError::invalid("All values must be positive"));
    }
    Ok(())
}

pub fn validate_amount_inputs(principal: f64, rate: f64, time: i64) -> CalcResult<()> {
    if principal <= 0.0 || rate < 0.0 || time <= 0 {
        return Err(CalcError::invalid("Invalid input values"));
    }
    Ok(())
}

fn finite(v: f64, what: &str) -> CalcResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CalcError::computation(format!("{what} is not a finite number")))
    }
}

/// Solves `A = P(1 + r/100)^t` for `r`.
///
/// A negative rate (amount below principal) is a valid answer. The displayed
/// ratio truncates both money values to integers before reducing, so
/// fractional cents do not show up in `ratio` or `simplified_ratio`.
pub fn find_interest_rate(principal: f64, amount: f64, time: i64) -> CalcResult<RateResult> {
    let growth = (amount / principal).powf(1.0 / time as f64);
    let rate_decimal = finite(growth - 1.0, "rate")?;
    let rate_percent = rate_decimal * 100.0;
    let rate_fraction = limit_denominator(rate_decimal, MAX_DISPLAY_DENOMINATOR)?;

    let ratio = Ratio {
        numerator: truncate_to_i64(amount)?,
        denominator: truncate_to_i64(principal)?,
    };
    if ratio.denominator == 0 {
        return Err(CalcError::computation(format!(
            "principal {principal} truncates to zero"
        )));
    }
    let simplified_ratio = Fraction::reduced(ratio.numerator, ratio.denominator)?;
    debug!(rate_percent, %simplified_ratio, "solved interest rate");

    Ok(RateResult {
        rate_percent: round2(rate_percent),
        rate_decimal,
        rate_fraction,
        ratio,
        simplified_ratio,
        calculation_steps: rate_steps(
            ratio.denominator,
            ratio.numerator,
            time,
            simplified_ratio,
            rate_percent,
        ),
    })
}

/// Evaluates `A = P(1 + rate/100)^t`; `interest = A - P`.
pub fn calculate_compound_amount(principal: f64, rate: f64, time: i64) -> CalcResult<AmountResult> {
    let rate_factor = 1.0 + rate / 100.0;
    let amount = finite(principal * rate_factor.powf(time as f64), "amount")?;
    let interest = amount - principal;
    debug!(amount, interest, "computed compound amount");

    Ok(AmountResult {
        principal,
        rate,
        time,
        amount: round2(amount),
        interest: round2(interest),
        calculation_steps: amount_steps(
            truncate_to_i64(principal)?,
            rate,
            time,
            rate_factor,
            amount,
        ),
    })
}
