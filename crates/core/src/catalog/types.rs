use serde::{Deserialize, Serialize};

use crate::instruments::{by_symbol, Instrument, InstrumentKind, InstrumentSpec};

/// On-disk layout of a catalog file
///
/// ```json
/// { "instruments": [ { "kind": "stock", "symbol": "SPY", "currency": "USD" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

/// A validated set of instruments, unique by kind and symbol
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub(super) fn from_unique(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// Instruments in file order
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Get an instrument by kind and symbol
    pub fn get(&self, kind: InstrumentKind, symbol: &str) -> Option<&Instrument> {
        self.instruments
            .iter()
            .find(|i| i.kind() == kind && i.symbol() == symbol)
    }

    /// Every instrument with `symbol`, whatever its kind
    pub fn with_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Instrument> {
        self.instruments.iter().filter(move |i| i.symbol() == symbol)
    }

    /// Instruments ordered by symbol; ties keep file order
    pub fn sorted(&self) -> Vec<&Instrument> {
        let mut sorted: Vec<&Instrument> = self.instruments.iter().collect();
        sorted.sort_by(|a, b| by_symbol(*a, *b));
        sorted
    }

    /// Back to the on-disk layout
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            instruments: self.instruments.clone(),
        }
    }
}
