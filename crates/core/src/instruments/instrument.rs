use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    Bond, ForexPair, FutureContract, FutureOptionContract, InstrumentSpec, OptionContract, Stock,
};
use crate::values::Currency;

/// Discriminant of the [`Instrument`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Stock,
    Bond,
    Option,
    FutureOption,
    Future,
    Forex,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InstrumentKind::Stock => "Stock",
            InstrumentKind::Bond => "Bond",
            InstrumentKind::Option => "Option",
            InstrumentKind::FutureOption => "FutureOption",
            InstrumentKind::Future => "Future",
            InstrumentKind::Forex => "Forex",
        };
        f.pad(name)
    }
}

/// Enumeration of all supported instrument types
///
/// Each variant holds a fully validated instrument, and shared properties
/// are reached through the `InstrumentSpec` trait. Serialized form is
/// internally tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instrument {
    /// Equity or ETF
    Stock(Stock),
    /// Bond identified by CUSIP
    Bond(Bond),
    /// Listed option with OCC symbol
    Option(OptionContract),
    /// Option on a futures contract
    FutureOption(FutureOptionContract),
    /// Futures contract
    Future(FutureContract),
    /// Foreign-exchange pair
    Forex(ForexPair),
}

impl Instrument {
    /// Underlying symbol, for kinds that have one
    pub fn underlying(&self) -> Option<&str> {
        match self {
            Instrument::Option(o) => Some(o.underlying()),
            Instrument::FutureOption(o) => Some(o.underlying()),
            Instrument::Stock(_)
            | Instrument::Bond(_)
            | Instrument::Future(_)
            | Instrument::Forex(_) => None,
        }
    }

    /// Expiration date, for kinds that expire
    pub fn expiration(&self) -> Option<NaiveDate> {
        match self {
            Instrument::Option(o) => Some(o.expiration()),
            Instrument::FutureOption(o) => Some(o.expiration()),
            Instrument::Future(f) => Some(f.expiration()),
            Instrument::Stock(_) | Instrument::Bond(_) | Instrument::Forex(_) => None,
        }
    }

    /// Check if this is a derivative
    pub fn is_derivative(&self) -> bool {
        matches!(
            self,
            Instrument::Option(_) | Instrument::FutureOption(_) | Instrument::Future(_)
        )
    }

    /// Option terms for plain options and future options
    pub fn as_option(&self) -> Option<&OptionContract> {
        match self {
            Instrument::Option(o) => Some(o),
            Instrument::FutureOption(o) => Some(o.as_option()),
            _ => None,
        }
    }

    fn spec(&self) -> &dyn InstrumentSpec {
        match self {
            Instrument::Stock(s) => s,
            Instrument::Bond(b) => b,
            Instrument::Option(o) => o,
            Instrument::FutureOption(o) => o,
            Instrument::Future(f) => f,
            Instrument::Forex(x) => x,
        }
    }
}

// Implement InstrumentSpec for Instrument by delegating to the inner type
impl InstrumentSpec for Instrument {
    fn symbol(&self) -> &str {
        self.spec().symbol()
    }

    fn currency(&self) -> Currency {
        self.spec().currency()
    }

    fn kind(&self) -> InstrumentKind {
        self.spec().kind()
    }

    fn multiplier(&self) -> Decimal {
        self.spec().multiplier()
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.symbol())
    }
}

// Convenient From implementations
impl From<Stock> for Instrument {
    fn from(stock: Stock) -> Self {
        Instrument::Stock(stock)
    }
}

impl From<Bond> for Instrument {
    fn from(bond: Bond) -> Self {
        Instrument::Bond(bond)
    }
}

impl From<OptionContract> for Instrument {
    fn from(option: OptionContract) -> Self {
        Instrument::Option(option)
    }
}

impl From<FutureOptionContract> for Instrument {
    fn from(option: FutureOptionContract) -> Self {
        Instrument::FutureOption(option)
    }
}

impl From<FutureContract> for Instrument {
    fn from(future: FutureContract) -> Self {
        Instrument::Future(future)
    }
}

impl From<ForexPair> for Instrument {
    fn from(pair: ForexPair) -> Self {
        Instrument::Forex(pair)
    }
}
