//! Pure domain types: the three transient response shapes and their invariants.

mod conversion;
mod quote;
mod weather;

pub use conversion::{ConversionResult, CurrencyCode, InvalidCurrencyCode};
pub use quote::Quote;
pub use weather::WeatherReport;
