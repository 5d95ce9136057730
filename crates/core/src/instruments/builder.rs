use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::spec::{checked_currency, checked_symbol};
use super::{FutureOptionContract, InstrumentKind, OptionContract, OptionType};
use crate::error::{ModelError, ModelResult};
use crate::values::{checked_multiplier, checked_strike, Currency, NumericInput};

/// Collects raw option inputs; nothing is validated until [`build`] or
/// [`build_future_option`] runs the whole pipeline at once.
///
/// [`build`]: OptionBuilder::build
/// [`build_future_option`]: OptionBuilder::build_future_option
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionBuilder {
    underlying: Option<String>,
    currency: Option<Currency>,
    option_type: Option<OptionType>,
    expiration: Option<NaiveDate>,
    strike: Option<NumericInput>,
    multiplier: Option<NumericInput>,
    symbol: Option<String>,
}

impl OptionBuilder {
    pub fn underlying(mut self, underlying: impl Into<String>) -> Self {
        self.underlying = Some(underlying.into());
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    pub fn expiration(mut self, expiration: NaiveDate) -> Self {
        self.expiration = Some(expiration);
        self
    }

    pub fn strike(mut self, strike: impl Into<NumericInput>) -> Self {
        self.strike = Some(strike.into());
        self
    }

    /// Contract multiplier; defaults to 100 for plain options
    pub fn multiplier(mut self, multiplier: impl Into<NumericInput>) -> Self {
        self.multiplier = Some(multiplier.into());
        self
    }

    /// Explicit symbol; when unset, `build` derives the OCC symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Validate and build an option
    pub fn build(self) -> ModelResult<OptionContract> {
        self.validate(InstrumentKind::Option)
    }

    /// Validate and build a future option. The symbol and multiplier are
    /// required.
    pub fn build_future_option(self) -> ModelResult<FutureOptionContract> {
        self.validate(InstrumentKind::FutureOption)
            .map(FutureOptionContract::from_validated)
    }

    /// Validation order: underlying, strike, multiplier, option type,
    /// expiration, symbol, currency. Plain options default the multiplier
    /// and derive the symbol; future options must supply both.
    fn validate(self, kind: InstrumentKind) -> ModelResult<OptionContract> {
        let listed = kind == InstrumentKind::Option;
        let underlying = self.underlying.unwrap_or_default();
        if underlying.trim().is_empty() {
            return Err(ModelError::EmptyUnderlying(kind));
        }
        let strike = checked_strike(self.strike.unwrap_or(NumericInput::Decimal(Decimal::ZERO)))?;
        let multiplier = match self.multiplier {
            Some(multiplier) => checked_multiplier(multiplier)?,
            None if listed => checked_multiplier(OptionContract::DEFAULT_MULTIPLIER)?,
            None => {
                return Err(ModelError::MissingField {
                    kind,
                    field: "multiplier",
                });
            }
        };
        let option_type = self.option_type.ok_or(ModelError::MissingField {
            kind,
            field: "option_type",
        })?;
        let expiration = self.expiration.ok_or(ModelError::MissingField {
            kind,
            field: "expiration",
        })?;
        let symbol = match self.symbol {
            Some(symbol) => symbol,
            None if listed => {
                OptionContract::occ_symbol(&underlying, expiration, option_type, strike)
            }
            None => return Err(ModelError::EmptySymbol(kind)),
        };
        let symbol = checked_symbol(kind, symbol)?;
        let currency = checked_currency(kind, self.currency)?;

        Ok(OptionContract::from_parts(
            symbol,
            currency,
            underlying,
            option_type,
            expiration,
            strike,
            multiplier,
        ))
    }
}
