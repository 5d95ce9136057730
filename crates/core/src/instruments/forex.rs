use serde::{Deserialize, Serialize};

use super::spec::checked_currency;
use super::{InstrumentKind, InstrumentSpec};
use crate::error::{ModelError, ModelResult};
use crate::values::Currency;

/// A foreign-exchange pair (e.g., USDEUR)
///
/// The pair settles in its quote currency, which is also what
/// [`InstrumentSpec::currency`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ForexDef")]
pub struct ForexPair {
    symbol: String,
    base_currency: Currency,
    #[serde(rename = "quote_currency")]
    currency: Currency,
}

impl ForexPair {
    /// Create a pair; the symbol is the base code followed by the quote code
    pub fn new(base_currency: Currency, quote_currency: Currency) -> ModelResult<Self> {
        if base_currency == quote_currency {
            return Err(ModelError::IdenticalForexCurrencies(base_currency));
        }
        Ok(Self {
            symbol: format!("{}{}", base_currency.code(), quote_currency.code()),
            base_currency,
            currency: quote_currency,
        })
    }

    /// Currency being bought or sold
    pub fn base_currency(&self) -> Currency {
        self.base_currency
    }

    /// Currency the pair is priced and settled in
    pub fn quote_currency(&self) -> Currency {
        self.currency
    }
}

#[derive(Deserialize)]
struct ForexDef {
    base_currency: Option<Currency>,
    quote_currency: Option<Currency>,
}

impl TryFrom<ForexDef> for ForexPair {
    type Error = ModelError;

    fn try_from(def: ForexDef) -> ModelResult<Self> {
        let base = checked_currency(InstrumentKind::Forex, def.base_currency)?;
        let quote = checked_currency(InstrumentKind::Forex, def.quote_currency)?;
        Self::new(base, quote)
    }
}

impl InstrumentSpec for ForexPair {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Forex
    }
}

impl std::fmt::Display for ForexPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_forex_creation() {
        let pair = ForexPair::new(Currency::USD, Currency::EUR).unwrap();
        assert_eq!(pair.symbol(), "USDEUR");
        assert_eq!(pair.base_currency(), Currency::USD);
        assert_eq!(pair.quote_currency(), Currency::EUR);
        assert_eq!(pair.currency(), Currency::EUR);
        assert_eq!(pair.multiplier(), Decimal::ONE);
        assert_eq!(format!("{}", pair), "USDEUR");
    }

    #[test]
    fn test_forex_identical_currencies() {
        assert_eq!(
            ForexPair::new(Currency::USD, Currency::USD),
            Err(ModelError::IdenticalForexCurrencies(Currency::USD))
        );
    }

    #[test]
    fn test_forex_serde() {
        let pair = ForexPair::new(Currency::AUD, Currency::NZD).unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(
            json,
            r#"{"symbol":"AUDNZD","base_currency":"AUD","quote_currency":"NZD"}"#
        );
        let parsed: ForexPair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);

        let err = serde_json::from_str::<ForexPair>(
            r#"{"base_currency": "EUR", "quote_currency": "EUR"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("different currencies"));

        let err = serde_json::from_str::<ForexPair>(r#"{"base_currency": "EUR"}"#).unwrap_err();
        assert!(err.to_string().contains("Expected currency for Forex"));
    }
}
