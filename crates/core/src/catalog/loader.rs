use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::{CatalogFile, InstrumentCatalog};
use crate::instruments::{Bond, Instrument, InstrumentKind, InstrumentSpec};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Duplicate {kind} symbol in catalog: {symbol:?}")]
    DuplicateSymbol { kind: InstrumentKind, symbol: String },
}

/// Load an instrument catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InstrumentCatalog, CatalogError> {
    let path = path.as_ref();
    debug!("Loading instrument catalog from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    load_catalog_from_str(&content)
}

/// Load an instrument catalog from a JSON string
pub fn load_catalog_from_str(json: &str) -> Result<InstrumentCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    InstrumentCatalog::try_from(file)
}

impl TryFrom<CatalogFile> for InstrumentCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, CatalogError> {
        check_entries(&file.instruments)?;
        debug!("Loaded {} instruments", file.instruments.len());
        Ok(InstrumentCatalog::from_unique(file.instruments))
    }
}

/// Reject duplicate (kind, symbol) pairs and flag bonds admitted without a
/// CUSIP check
fn check_entries(instruments: &[Instrument]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(instruments.len());
    for instrument in instruments {
        if !seen.insert((instrument.kind(), instrument.symbol())) {
            return Err(CatalogError::DuplicateSymbol {
                kind: instrument.kind(),
                symbol: instrument.symbol().to_string(),
            });
        }
        if let Instrument::Bond(bond) = instrument {
            if !Bond::is_cusip(bond.symbol()) {
                warn!(
                    "Bond {:?} accepted without CUSIP validation (pre_validated)",
                    bond.symbol()
                );
            }
        }
    }
    Ok(())
}
