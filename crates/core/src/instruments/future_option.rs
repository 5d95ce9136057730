use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InstrumentKind, InstrumentSpec, OptionBuilder, OptionContract, OptionType};
use crate::error::{ModelError, ModelResult};
use crate::values::{Currency, NumericInput};

/// An option on a futures contract (e.g., `ESH1 P1500`)
///
/// Validated like [`OptionContract`], but exchanges assign future-option
/// symbols, so the symbol is always supplied and never derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FutureOptionDef")]
pub struct FutureOptionContract {
    #[serde(flatten)]
    contract: OptionContract,
}

impl FutureOptionContract {
    /// Create a new future option
    pub fn new(
        symbol: impl Into<String>,
        underlying: impl Into<String>,
        currency: Currency,
        option_type: OptionType,
        expiration: NaiveDate,
        strike: impl Into<NumericInput>,
        multiplier: impl Into<NumericInput>,
    ) -> ModelResult<Self> {
        OptionContract::builder()
            .symbol(symbol)
            .underlying(underlying)
            .currency(currency)
            .option_type(option_type)
            .expiration(expiration)
            .strike(strike)
            .multiplier(multiplier)
            .build_future_option()
    }

    pub(super) fn from_validated(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// The option terms shared with plain options
    pub fn as_option(&self) -> &OptionContract {
        &self.contract
    }

    pub fn underlying(&self) -> &str {
        self.contract.underlying()
    }

    pub fn option_type(&self) -> OptionType {
        self.contract.option_type()
    }

    pub fn expiration(&self) -> NaiveDate {
        self.contract.expiration()
    }

    pub fn strike(&self) -> Decimal {
        self.contract.strike()
    }
}

#[derive(Deserialize)]
struct FutureOptionDef {
    symbol: String,
    currency: Option<Currency>,
    underlying: String,
    option_type: OptionType,
    expiration: NaiveDate,
    strike: Decimal,
    multiplier: Decimal,
}

impl TryFrom<FutureOptionDef> for FutureOptionContract {
    type Error = ModelError;

    fn try_from(def: FutureOptionDef) -> ModelResult<Self> {
        let mut builder = OptionBuilder::default()
            .symbol(def.symbol)
            .underlying(def.underlying)
            .option_type(def.option_type)
            .expiration(def.expiration)
            .strike(def.strike)
            .multiplier(def.multiplier);
        if let Some(currency) = def.currency {
            builder = builder.currency(currency);
        }
        builder.build_future_option()
    }
}

impl InstrumentSpec for FutureOptionContract {
    fn symbol(&self) -> &str {
        self.contract.symbol()
    }

    fn currency(&self) -> Currency {
        self.contract.currency()
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::FutureOption
    }

    fn multiplier(&self) -> Decimal {
        self.contract.multiplier()
    }
}

impl std::fmt::Display for FutureOptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.symbol())
    }
}
