use serde::{Deserialize, Serialize};

use super::spec::{checked_currency, checked_symbol};
use super::{InstrumentKind, InstrumentSpec};
use crate::error::{ModelError, ModelResult};
use crate::values::Currency;

/// An equity or ETF listing (e.g., AAPL, SPY)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StockDef")]
pub struct Stock {
    symbol: String,
    currency: Currency,
}

impl Stock {
    /// Create a new stock
    pub fn new(symbol: impl Into<String>, currency: Currency) -> ModelResult<Self> {
        Ok(Self {
            symbol: checked_symbol(InstrumentKind::Stock, symbol.into())?,
            currency,
        })
    }
}

#[derive(Deserialize)]
struct StockDef {
    symbol: String,
    currency: Option<Currency>,
}

impl TryFrom<StockDef> for Stock {
    type Error = ModelError;

    fn try_from(def: StockDef) -> ModelResult<Self> {
        let currency = checked_currency(InstrumentKind::Stock, def.currency)?;
        Self::new(def.symbol, currency)
    }
}

impl InstrumentSpec for Stock {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Stock
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stock_creation() {
        let stock = Stock::new("SPY", Currency::USD).unwrap();
        assert_eq!(stock.symbol(), "SPY");
        assert_eq!(stock.currency(), Currency::USD);
        assert_eq!(stock.multiplier(), Decimal::ONE);
        assert_eq!(stock.kind(), InstrumentKind::Stock);
    }

    #[test]
    fn test_stock_empty_symbol() {
        assert_eq!(
            Stock::new("", Currency::USD),
            Err(ModelError::EmptySymbol(InstrumentKind::Stock))
        );
    }

    #[test]
    fn test_stock_display() {
        let stock = Stock::new("VT", Currency::USD).unwrap();
        assert_eq!(format!("{}", stock), "VT");
        assert_eq!(format!("{:<6}|", stock), "VT    |");
        assert!(format!("{:?}", stock).contains("currency: USD"));
    }

    #[test]
    fn test_stock_cash_value() {
        let stock = Stock::new("AAPL", Currency::USD).unwrap();
        assert_eq!(stock.cash_value(dec!(150.25), dec!(10)), dec!(1502.50));
    }

    #[test]
    fn test_stock_equality() {
        let a = Stock::new("SPY", Currency::USD).unwrap();
        let b = Stock::new("SPY", Currency::USD).unwrap();
        let c = Stock::new("SPY", Currency::GBP).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stock_deserialize_validates() {
        let stock: Stock =
            serde_json::from_str(r#"{"symbol": "AAPL", "currency": "USD"}"#).unwrap();
        assert_eq!(stock, Stock::new("AAPL", Currency::USD).unwrap());

        let err = serde_json::from_str::<Stock>(r#"{"symbol": "AAPL"}"#).unwrap_err();
        assert!(err.to_string().contains("Expected currency for Stock"));

        let err = serde_json::from_str::<Stock>(r#"{"symbol": "", "currency": "USD"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Expected non-empty symbol"));
    }
}
