//! Decimal quantization and positivity checks shared by the contract types.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Decimal places kept on multipliers (a 0.1 step)
pub const MULTIPLIER_SCALE: u32 = 1;

/// Decimal places kept on strikes (a 0.001 step, so strike x 1000 is integral)
pub const STRIKE_SCALE: u32 = 3;

/// A numeric input as handed over by a caller.
///
/// Decimals are exact and always finite. Floats arrive from external feeds
/// and may be NaN, infinite, or outside the range a `Decimal` can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    Decimal(Decimal),
    Float(f64),
}

impl NumericInput {
    /// The exact decimal value, or `None` when the input is not finite
    pub fn to_decimal(self) -> Option<Decimal> {
        match self {
            NumericInput::Decimal(d) => Some(d),
            NumericInput::Float(f) if f.is_finite() => Decimal::try_from(f).ok(),
            NumericInput::Float(_) => None,
        }
    }
}

impl From<Decimal> for NumericInput {
    fn from(d: Decimal) -> Self {
        NumericInput::Decimal(d)
    }
}

impl From<f64> for NumericInput {
    fn from(f: f64) -> Self {
        NumericInput::Float(f)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Decimal(d) => write!(f, "{}", d),
            NumericInput::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Round to `scale` decimal places, half to even, and pin the scale so the
/// value always carries exactly that many places.
pub fn quantize(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(scale);
    rounded
}

pub fn quantize_multiplier(multiplier: Decimal) -> Decimal {
    quantize(multiplier, MULTIPLIER_SCALE)
}

pub fn quantize_strike(strike: Decimal) -> Decimal {
    quantize(strike, STRIKE_SCALE)
}

/// Validate a contract multiplier and quantize it to the multiplier step.
///
/// The quantized value must stay positive; errors carry the caller's input.
pub(crate) fn checked_multiplier(input: impl Into<NumericInput>) -> ModelResult<Decimal> {
    let input = input.into();
    let multiplier = input
        .to_decimal()
        .ok_or_else(|| ModelError::NonFiniteMultiplier(input.to_string()))?;
    let quantized = quantize_multiplier(multiplier);
    if quantized <= Decimal::ZERO {
        return Err(ModelError::NonPositiveMultiplier(multiplier));
    }
    Ok(quantized)
}

/// Validate a strike price and quantize it to the strike step.
///
/// The quantized value must stay positive; errors carry the caller's input.
pub(crate) fn checked_strike(input: impl Into<NumericInput>) -> ModelResult<Decimal> {
    let input = input.into();
    let strike = input
        .to_decimal()
        .ok_or_else(|| ModelError::NonFiniteStrike(input.to_string()))?;
    let quantized = quantize_strike(strike);
    if quantized <= Decimal::ZERO {
        return Err(ModelError::NonPositiveStrike(strike));
    }
    Ok(quantized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_multiplier_rounds_half_to_even() {
        assert_eq!(quantize_multiplier(dec!(100.04)), dec!(100.0));
        assert_eq!(quantize_multiplier(dec!(100.05)), dec!(100.0));
        assert_eq!(quantize_multiplier(dec!(100.15)), dec!(100.2));
        assert_eq!(quantize_multiplier(dec!(100.16)), dec!(100.2));
    }

    #[test]
    fn test_quantize_pins_scale() {
        assert_eq!(quantize_multiplier(dec!(100)).scale(), 1);
        assert_eq!(quantize_multiplier(dec!(100)).to_string(), "100.0");
        assert_eq!(quantize_strike(dec!(150)).to_string(), "150.000");
        assert_eq!(quantize_strike(dec!(12.34567)).to_string(), "12.346");
    }

    #[test]
    fn test_strike_rounds_half_to_even() {
        assert_eq!(quantize_strike(dec!(1.0005)), dec!(1.000));
        assert_eq!(quantize_strike(dec!(1.0015)), dec!(1.002));
    }

    #[test]
    fn test_checked_strike() {
        assert_eq!(checked_strike(dec!(150.00)), Ok(dec!(150.000)));
        assert_eq!(checked_strike(2.5), Ok(dec!(2.500)));
        assert_eq!(
            checked_strike(dec!(0)),
            Err(ModelError::NonPositiveStrike(dec!(0)))
        );
        assert_eq!(
            checked_strike(dec!(-3)),
            Err(ModelError::NonPositiveStrike(dec!(-3)))
        );
        assert_eq!(
            checked_strike(f64::NAN),
            Err(ModelError::NonFiniteStrike("NaN".to_string()))
        );
        assert_eq!(
            checked_strike(f64::INFINITY),
            Err(ModelError::NonFiniteStrike("inf".to_string()))
        );
    }

    #[test]
    fn test_checked_multiplier() {
        assert_eq!(checked_multiplier(dec!(100.05)), Ok(dec!(100.0)));
        assert_eq!(checked_multiplier(50.0), Ok(dec!(50.0)));
        assert_eq!(
            checked_multiplier(dec!(0.0)),
            Err(ModelError::NonPositiveMultiplier(dec!(0)))
        );
        assert_eq!(
            checked_multiplier(f64::NEG_INFINITY),
            Err(ModelError::NonFiniteMultiplier("-inf".to_string()))
        );
    }

    #[test]
    fn test_values_rounding_to_zero_are_rejected() {
        assert_eq!(
            checked_multiplier(dec!(0.04)),
            Err(ModelError::NonPositiveMultiplier(dec!(0.04)))
        );
        assert_eq!(
            checked_multiplier(dec!(0.05)),
            Err(ModelError::NonPositiveMultiplier(dec!(0.05)))
        );
        assert_eq!(checked_multiplier(dec!(0.06)), Ok(dec!(0.1)));
        assert_eq!(
            checked_strike(dec!(0.0004)),
            Err(ModelError::NonPositiveStrike(dec!(0.0004)))
        );
        assert_eq!(
            checked_strike(dec!(-0.0001)),
            Err(ModelError::NonPositiveStrike(dec!(-0.0001)))
        );
        assert_eq!(checked_strike(dec!(0.0006)), Ok(dec!(0.001)));
    }

    #[test]
    fn test_out_of_range_float_is_not_finite() {
        assert_eq!(NumericInput::Float(1e300).to_decimal(), None);
        assert!(matches!(
            checked_multiplier(1e300),
            Err(ModelError::NonFiniteMultiplier(_))
        ));
    }
}
