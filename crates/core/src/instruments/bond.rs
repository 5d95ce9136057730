use serde::{Deserialize, Serialize};

use super::spec::{checked_currency, checked_symbol};
use super::{InstrumentKind, InstrumentSpec};
use crate::error::{ModelError, ModelResult};
use crate::values::Currency;

/// Length of a CUSIP identifier
pub const CUSIP_LEN: usize = 9;

/// Marker proving the caller has already validated a bond symbol.
///
/// Passed to [`Bond::new_pre_validated`] when replaying records from a source
/// that was checked upstream. Search for this type to find every bypass site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreValidated;

/// A bond identified by its CUSIP
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BondDef", into = "BondDef")]
pub struct Bond {
    symbol: String,
    currency: Currency,
}

impl Bond {
    /// Create a bond whose symbol must be a CUSIP
    pub fn new(symbol: impl Into<String>, currency: Currency) -> ModelResult<Self> {
        let symbol = symbol.into();
        if !Self::is_cusip(&symbol) {
            return Err(ModelError::InvalidCusip(symbol));
        }
        Self::new_pre_validated(symbol, currency, PreValidated)
    }

    /// Create a bond without checking the CUSIP shape; the symbol must still
    /// be non-empty.
    pub fn new_pre_validated(
        symbol: impl Into<String>,
        currency: Currency,
        _: PreValidated,
    ) -> ModelResult<Self> {
        Ok(Self {
            symbol: checked_symbol(InstrumentKind::Bond, symbol.into())?,
            currency,
        })
    }

    /// Whether `symbol` has the CUSIP shape: 3 digits, 5 uppercase
    /// alphanumerics, 1 digit. The check digit is not verified.
    pub fn is_cusip(symbol: &str) -> bool {
        let bytes = symbol.as_bytes();
        bytes.len() == CUSIP_LEN
            && bytes[..3].iter().all(u8::is_ascii_digit)
            && bytes[3..8]
                .iter()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
            && bytes[8].is_ascii_digit()
    }
}

/// Serialized form; a bond whose symbol is not CUSIP-shaped can only have
/// been pre-validated, so it is written back with the flag set.
#[derive(Serialize, Deserialize)]
struct BondDef {
    symbol: String,
    currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pre_validated: bool,
}

impl From<Bond> for BondDef {
    fn from(bond: Bond) -> Self {
        Self {
            pre_validated: !Bond::is_cusip(&bond.symbol),
            symbol: bond.symbol,
            currency: Some(bond.currency),
        }
    }
}

impl TryFrom<BondDef> for Bond {
    type Error = ModelError;

    fn try_from(def: BondDef) -> ModelResult<Self> {
        let currency = checked_currency(InstrumentKind::Bond, def.currency)?;
        if def.pre_validated {
            Self::new_pre_validated(def.symbol, currency, PreValidated)
        } else {
            Self::new(def.symbol, currency)
        }
    }
}

impl InstrumentSpec for Bond {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Bond
    }
}

impl std::fmt::Display for Bond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.symbol)
    }
}
