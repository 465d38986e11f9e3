use serde::Deserialize;

use crate::error::{CalcError, CalcResult};
use crate::utils::truncate_to_i64;

/// A numeric form field as it may arrive from the web form: number, bool or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumericField {
    /// Integer view: floats truncate toward zero, text must be an integer literal.
    pub fn to_int(&self) -> CalcResult<i64> {
        match self {
            NumericField::Bool(b) => Ok(*b as i64),
            NumericField::Int(i) => Ok(*i),
            NumericField::Float(f) => truncate_to_i64(*f),
            NumericField::Text(s) => parse_int(s),
        }
    }

    pub fn to_float(&self) -> CalcResult<f64> {
        let v = match self {
            NumericField::Bool(b) => *b as i64 as f64,
            NumericField::Int(i) => *i as f64,
            NumericField::Float(f) => *f,
            NumericField::Text(s) => s
                .trim()
                .replace('_', "")
                .parse::<f64>()
                .map_err(|_| CalcError::computation(format!("could not convert string to float: '{s}'")))?,
        };
        if !v.is_finite() {
            return Err(CalcError::computation(format!("{v} is not a finite number")));
        }
        Ok(v)
    }
}

fn parse_int(s: &str) -> CalcResult<i64> {
    s.trim()
        .replace('_', "")
        .parse::<i64>()
        .map_err(|_| CalcError::computation(format!("invalid literal for int(): '{s}'")))
}

fn int_or(field: &Option<NumericField>, default: i64) -> CalcResult<i64> {
    field.as_ref().map_or(Ok(default), NumericField::to_int)
}

fn float_or(field: &Option<NumericField>, default: f64) -> CalcResult<f64> {
    field.as_ref().map_or(Ok(default), NumericField::to_float)
}

/// POST /trigonometry
/// Body: { perpendicular: 7, base: 24 }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrigonometryRequest {
    pub perpendicular: Option<NumericField>,
    pub base: Option<NumericField>,
}

impl TrigonometryRequest {
    pub fn perpendicular(&self) -> CalcResult<i64> {
        int_or(&self.perpendicular, 7)
    }

    pub fn base(&self) -> CalcResult<i64> {
        int_or(&self.base, 24)
    }
}

/// POST /interest/rate
/// Body: { principal: 12000, amount: 20736, time: 3 }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RateRequest {
    pub principal: Option<NumericField>,
    pub amount: Option<NumericField>,
    pub time: Option<NumericField>,
}

impl RateRequest {
    pub fn principal(&self) -> CalcResult<f64> {
        float_or(&self.principal, 12000.0)
    }

    pub fn amount(&self) -> CalcResult<f64> {
        float_or(&self.amount, 20736.0)
    }

    pub fn time(&self) -> CalcResult<i64> {
        int_or(&self.time, 3)
    }
}

/// POST /interest/amount
/// Body: { principal: 12000, rate: 20, time: 2 }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AmountRequest {
    pub principal: Option<NumericField>,
    pub rate: Option<NumericField>,
    pub time: Option<NumericField>,
}

impl AmountRequest {
    pub fn principal(&self) -> CalcResult<f64> {
        float_or(&self.principal, 12000.0)
    }

    pub fn rate(&self) -> CalcResult<f64> {
        float_or(&self.rate, 20.0)
    }

    pub fn time(&self) -> CalcResult<i64> {
        int_or(&self.time, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let t: TrigonometryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!((t.perpendicular().unwrap(), t.base().unwrap()), (7, 24));

        let r: RateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(r.principal().unwrap(), 12000.0);
        assert_eq!(r.amount().unwrap(), 20736.0);
        assert_eq!(r.time().unwrap(), 3);

        let a: AmountRequest = serde_json::from_str(r#"{"time": null}"#).unwrap();
        assert_eq!(a.principal().unwrap(), 12000.0);
        assert_eq!(a.rate().unwrap(), 20.0);
        assert_eq!(a.time().unwrap(), 2);
    }

    #[test]
    fn test_lenient_coercion() {
        let t: TrigonometryRequest =
            serde_json::from_str(r#"{"perpendicular": "5", "base": 6.9}"#).unwrap();
        assert_eq!(t.perpendicular().unwrap(), 5);
        assert_eq!(t.base().unwrap(), 6);

        let r: RateRequest =
            serde_json::from_str(r#"{"principal": " 1500.5 ", "amount": 2000, "time": true}"#).unwrap();
        assert_eq!(r.principal().unwrap(), 1500.5);
        assert_eq!(r.amount().unwrap(), 2000.0);
        assert_eq!(r.time().unwrap(), 1);
    }

    #[test]
    fn test_bad_values_are_computation_errors() {
        let t: TrigonometryRequest = serde_json::from_str(r#"{"base": "abc"}"#).unwrap();
        assert!(matches!(t.base(), Err(CalcError::Computation(_))));

        let t: TrigonometryRequest = serde_json::from_str(r#"{"base": "2.5"}"#).unwrap();
        assert!(t.base().is_err());

        let a: AmountRequest = serde_json::from_str(r#"{"rate": "nan"}"#).unwrap();
        assert!(matches!(a.rate(), Err(CalcError::Computation(_))));

        assert!(serde_json::from_str::<RateRequest>(r#"{"time": [1]}"#).is_err());
    }
}
