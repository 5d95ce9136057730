//! Instrument construction errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::instruments::InstrumentKind;
use crate::values::Currency;

/// Validation failures raised while constructing an instrument.
///
/// Every variant aborts construction; no partially built instrument is ever
/// returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Expected non-empty symbol for {0}")]
    EmptySymbol(InstrumentKind),

    #[error("Expected currency for {0}")]
    MissingCurrency(InstrumentKind),

    #[error("Expected symbol to be a bond CUSIP: {0:?}")]
    InvalidCusip(String),

    #[error("Expected non-empty underlying symbol for {0}")]
    EmptyUnderlying(InstrumentKind),

    #[error("Expected positive strike price: {0}")]
    NonPositiveStrike(Decimal),

    #[error("Expected finite strike price: {0}")]
    NonFiniteStrike(String),

    #[error("Expected positive multiplier: {0}")]
    NonPositiveMultiplier(Decimal),

    #[error("Expected finite multiplier: {0}")]
    NonFiniteMultiplier(String),

    #[error("Forex pair must be composed of different currencies, got {0} and {0}")]
    IdenticalForexCurrencies(Currency),

    #[error("Missing required field for {kind}: {field}")]
    MissingField {
        kind: InstrumentKind,
        field: &'static str,
    },
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
