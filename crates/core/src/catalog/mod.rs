//! Instrument catalogs loaded from JSON

pub mod loader;
pub mod types;

pub use loader::{load_catalog, load_catalog_from_str, CatalogError};
pub use types::{CatalogFile, InstrumentCatalog};
