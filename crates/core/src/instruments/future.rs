use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::spec::{checked_currency, checked_symbol};
use super::{InstrumentKind, InstrumentSpec};
use crate::error::{ModelError, ModelResult};
use crate::values::{checked_multiplier, Currency, NumericInput};

/// A futures contract (e.g., ESH1)
///
/// Future symbols are exchange contract codes and are always supplied by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FutureDef")]
pub struct FutureContract {
    symbol: String,
    currency: Currency,
    multiplier: Decimal,
    expiration: NaiveDate,
}

impl FutureContract {
    /// Create a new futures contract; the multiplier is quantized to 0.1
    pub fn new(
        symbol: impl Into<String>,
        currency: Currency,
        multiplier: impl Into<NumericInput>,
        expiration: NaiveDate,
    ) -> ModelResult<Self> {
        let multiplier = checked_multiplier(multiplier)?;
        Ok(Self {
            symbol: checked_symbol(InstrumentKind::Future, symbol.into())?,
            currency,
            multiplier,
            expiration,
        })
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }
}

#[derive(Deserialize)]
struct FutureDef {
    symbol: String,
    currency: Option<Currency>,
    multiplier: Decimal,
    expiration: NaiveDate,
}

impl TryFrom<FutureDef> for FutureContract {
    type Error = ModelError;

    fn try_from(def: FutureDef) -> ModelResult<Self> {
        let currency = checked_currency(InstrumentKind::Future, def.currency)?;
        Self::new(def.symbol, currency, def.multiplier, def.expiration)
    }
}

impl InstrumentSpec for FutureContract {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Future
    }

    fn multiplier(&self) -> Decimal {
        self.multiplier
    }
}

impl std::fmt::Display for FutureContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 19).unwrap()
    }

    #[test]
    fn test_future_creation() {
        let future = FutureContract::new("ESH1", Currency::USD, dec!(50), make_expiry()).unwrap();

        assert_eq!(future.symbol(), "ESH1");
        assert_eq!(future.currency(), Currency::USD);
        assert_eq!(future.multiplier(), dec!(50.0));
        assert_eq!(future.multiplier().scale(), 1);
        assert_eq!(future.expiration(), make_expiry());
        assert_eq!(format!("{}", future), "ESH1");
    }

    #[test]
    fn test_future_multiplier_quantized() {
        let future = FutureContract::new("/ZB", Currency::USD, dec!(1000.05), make_expiry())
            .unwrap();
        assert_eq!(future.multiplier(), dec!(1000.0));

        let future = FutureContract::new("/ZB", Currency::USD, dec!(12.55), make_expiry())
            .unwrap();
        assert_eq!(future.multiplier(), dec!(12.6));
    }

    #[test]
    fn test_future_invalid_multiplier() {
        assert_eq!(
            FutureContract::new("ESH1", Currency::USD, dec!(0), make_expiry()),
            Err(ModelError::NonPositiveMultiplier(dec!(0)))
        );
        assert_eq!(
            FutureContract::new("ESH1", Currency::USD, f64::NAN, make_expiry()),
            Err(ModelError::NonFiniteMultiplier("NaN".to_string()))
        );
    }

    #[test]
    fn test_future_multiplier_checked_before_symbol() {
        assert_eq!(
            FutureContract::new("", Currency::USD, dec!(-1), make_expiry()),
            Err(ModelError::NonPositiveMultiplier(dec!(-1)))
        );
        assert_eq!(
            FutureContract::new("", Currency::USD, dec!(50), make_expiry()),
            Err(ModelError::EmptySymbol(InstrumentKind::Future))
        );
    }

    #[test]
    fn test_future_multiplier_rounding_to_zero() {
        assert_eq!(
            FutureContract::new("X", Currency::USD, dec!(0.04), make_expiry()),
            Err(ModelError::NonPositiveMultiplier(dec!(0.04)))
        );

        let json = r#"{"symbol": "X", "currency": "USD", "multiplier": "0.04", "expiration": "2021-03-19"}"#;
        let err = serde_json::from_str::<FutureContract>(json).unwrap_err();
        assert!(err.to_string().contains("Expected positive multiplier: 0.04"));
    }

    #[test]
    fn test_future_cash_value() {
        let future = FutureContract::new("ESH1", Currency::USD, dec!(50), make_expiry()).unwrap();
        assert_eq!(future.cash_value(dec!(3900.25), dec!(2)), dec!(390025));
    }

    #[test]
    fn test_future_deserialize() {
        let json = r#"{"symbol": "ESH1", "currency": "USD", "multiplier": 50, "expiration": "2021-03-19"}"#;
        let future: FutureContract = serde_json::from_str(json).unwrap();
        assert_eq!(
            future,
            FutureContract::new("ESH1", Currency::USD, dec!(50), make_expiry()).unwrap()
        );

        let json = r#"{"symbol": "ESH1", "currency": "USD", "multiplier": "-5", "expiration": "2021-03-19"}"#;
        let err = serde_json::from_str::<FutureContract>(json).unwrap_err();
        assert!(err.to_string().contains("Expected positive multiplier"));
    }
}
