use rust_decimal::Decimal;
use std::cmp::Ordering;

use super::InstrumentKind;
use crate::error::{ModelError, ModelResult};
use crate::values::{Currency, Price, Quantity};

/// Common specification trait for all instruments
///
/// Every instrument kind exposes a symbol, a settlement currency and a
/// contract multiplier. Ordering and display are defined on the symbol alone.
pub trait InstrumentSpec {
    /// Display/lookup symbol, unique within its instrument kind
    fn symbol(&self) -> &str;

    /// Settlement currency
    fn currency(&self) -> Currency;

    fn kind(&self) -> InstrumentKind;

    /// Factor converting one unit's quoted price into cash value
    fn multiplier(&self) -> Decimal {
        Decimal::ONE
    }

    /// Cash value of `quantity` units quoted at `price`
    fn cash_value(&self, price: Price, quantity: Quantity) -> Decimal {
        price * quantity * self.multiplier()
    }

    /// Compare by symbol only, across instrument kinds.
    ///
    /// Two instruments of different kinds sharing a symbol compare `Equal`
    /// here even though they are not `==`.
    fn cmp_symbol(&self, other: &dyn InstrumentSpec) -> Ordering {
        self.symbol().cmp(other.symbol())
    }
}

/// Comparator for `sort_by` over instruments of one type.
///
/// ```
/// use bankroll_core::{by_symbol, Currency, Instrument, Stock};
///
/// let mut instruments: Vec<Instrument> = vec![
///     Stock::new("SPY", Currency::USD).unwrap().into(),
///     Stock::new("AAPL", Currency::USD).unwrap().into(),
/// ];
/// instruments.sort_by(by_symbol);
/// assert_eq!(instruments[0].to_string(), "AAPL");
/// ```
pub fn by_symbol<T: InstrumentSpec + ?Sized>(a: &T, b: &T) -> Ordering {
    a.symbol().cmp(b.symbol())
}

/// Reject empty or blank symbols
pub(crate) fn checked_symbol(kind: InstrumentKind, symbol: String) -> ModelResult<String> {
    if symbol.trim().is_empty() {
        return Err(ModelError::EmptySymbol(kind));
    }
    Ok(symbol)
}

/// Reject an absent currency (raw inputs from builders and deserializers)
pub(crate) fn checked_currency(
    kind: InstrumentKind,
    currency: Option<Currency>,
) -> ModelResult<Currency> {
    currency.ok_or(ModelError::MissingCurrency(kind))
}
