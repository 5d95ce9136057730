//! Bankroll Core Instrument Model
//!
//! Immutable, validated value types for the instruments a portfolio can
//! hold: stocks, bonds, options, future options, futures and forex pairs.
//! Every instrument is built through a validating constructor, so a value
//! that exists always satisfies its invariants.
//!
//! The model itself does no I/O; the `catalog` module loads instrument
//! definitions from JSON through the same constructors.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use catalog::{load_catalog, load_catalog_from_str, CatalogError, InstrumentCatalog};
pub use error::{ModelError, ModelResult};
pub use instruments::{
    by_symbol, Bond, ForexPair, FutureContract, FutureOptionContract, Instrument, InstrumentKind,
    InstrumentSpec, OptionBuilder, OptionContract, OptionType, PreValidated, Stock,
};
pub use values::{Currency, NumericInput, Price, Quantity};
