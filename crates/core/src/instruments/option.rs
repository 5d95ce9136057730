use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InstrumentKind, InstrumentSpec, OptionBuilder};
use crate::error::{ModelError, ModelResult};
use crate::values::{quantize_strike, Currency, NumericInput, STRIKE_SCALE};

/// Option type: Call (right to buy) or Put (right to sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionType {
    Put,
    Call,
}

impl OptionType {
    /// Single-letter code used in OCC symbology
    pub fn code(&self) -> char {
        match self {
            OptionType::Put => 'P',
            OptionType::Call => 'C',
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An exchange-listed option contract (e.g., `AAPL  210115P00150000`)
///
/// Strikes are kept to 0.001 and multipliers to 0.1, both rounded half to
/// even. When no symbol is supplied the OCC symbol is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OptionDef")]
pub struct OptionContract {
    symbol: String,
    currency: Currency,
    underlying: String,
    option_type: OptionType,
    expiration: NaiveDate,
    strike: Decimal,
    multiplier: Decimal,
}

impl OptionContract {
    /// Shares per contract for a standard equity option
    pub const DEFAULT_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

    /// Width the underlying is padded or truncated to in an OCC symbol
    pub const OCC_UNDERLYING_WIDTH: usize = 6;

    /// Create an option with the default multiplier and a derived OCC symbol
    pub fn new(
        underlying: impl Into<String>,
        currency: Currency,
        option_type: OptionType,
        expiration: NaiveDate,
        strike: impl Into<NumericInput>,
    ) -> ModelResult<Self> {
        Self::builder()
            .underlying(underlying)
            .currency(currency)
            .option_type(option_type)
            .expiration(expiration)
            .strike(strike)
            .build()
    }

    /// Start a builder for options with a custom multiplier or symbol
    pub fn builder() -> OptionBuilder {
        OptionBuilder::default()
    }

    /// Assemble already validated parts
    pub(super) fn from_parts(
        symbol: String,
        currency: Currency,
        underlying: String,
        option_type: OptionType,
        expiration: NaiveDate,
        strike: Decimal,
        multiplier: Decimal,
    ) -> Self {
        Self {
            symbol,
            currency,
            underlying,
            option_type,
            expiration,
            strike,
            multiplier,
        }
    }

    /// OCC option symbol: underlying padded/truncated to six characters,
    /// `YYMMDD` expiration, `P`/`C`, and strike x 1000 as eight digits.
    ///
    /// The strike is quantized to 0.001 before encoding. Strikes of 100000
    /// or more need more than eight digits and are written in full.
    pub fn occ_symbol(
        underlying: &str,
        expiration: NaiveDate,
        option_type: OptionType,
        strike: Decimal,
    ) -> String {
        let strike = quantize_strike(strike);
        let mills =
            strike.mantissa().abs() * 10_i128.pow(STRIKE_SCALE.saturating_sub(strike.scale()));
        format!(
            "{:<width$.width$}{}{}{:08}",
            underlying,
            expiration.format("%y%m%d"),
            option_type.code(),
            mills,
            width = Self::OCC_UNDERLYING_WIDTH,
        )
    }

    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn strike(&self) -> Decimal {
        self.strike
    }
}

#[derive(Deserialize)]
struct OptionDef {
    symbol: Option<String>,
    currency: Option<Currency>,
    underlying: String,
    option_type: OptionType,
    expiration: NaiveDate,
    strike: Decimal,
    multiplier: Option<Decimal>,
}

impl From<OptionDef> for OptionBuilder {
    fn from(def: OptionDef) -> Self {
        let mut builder = OptionBuilder::default()
            .underlying(def.underlying)
            .option_type(def.option_type)
            .expiration(def.expiration)
            .strike(def.strike);
        if let Some(currency) = def.currency {
            builder = builder.currency(currency);
        }
        if let Some(multiplier) = def.multiplier {
            builder = builder.multiplier(multiplier);
        }
        if let Some(symbol) = def.symbol {
            builder = builder.symbol(symbol);
        }
        builder
    }
}

impl TryFrom<OptionDef> for OptionContract {
    type Error = ModelError;

    fn try_from(def: OptionDef) -> ModelResult<Self> {
        OptionBuilder::from(def).build()
    }
}

impl InstrumentSpec for OptionContract {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Option
    }

    fn multiplier(&self) -> Decimal {
        self.multiplier
    }
}

impl std::fmt::Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.symbol)
    }
}
