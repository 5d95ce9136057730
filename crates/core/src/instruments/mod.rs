//! Instrument definitions for tradeable assets
//!
//! This module provides validated value types for each instrument kind:
//! - Stocks and ETFs (SPY)
//! - Bonds, identified by CUSIP (912828U24)
//! - Options, with OCC symbology (AAPL  210115P00150000)
//! - Future options (ESH1 P3700)
//! - Futures (ESH1)
//! - Forex pairs (USDEUR)

mod bond;
mod builder;
mod forex;
mod future;
mod future_option;
mod instrument;
mod option;
mod spec;
mod stock;

pub use bond::{Bond, PreValidated, CUSIP_LEN};
pub use builder::OptionBuilder;
pub use forex::ForexPair;
pub use future::FutureContract;
pub use future_option::FutureOptionContract;
pub use instrument::{Instrument, InstrumentKind};
pub use option::{OptionContract, OptionType};
pub use spec::{by_symbol, InstrumentSpec};
pub use stock::Stock;
