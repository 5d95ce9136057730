use rust_decimal::Decimal;

mod currency;
mod quantize;

pub use currency::{Currency, UnknownCurrency};
pub(crate) use quantize::{checked_multiplier, checked_strike};
pub use quantize::{
    quantize, quantize_multiplier, quantize_strike, NumericInput, MULTIPLIER_SCALE, STRIKE_SCALE,
};

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;
