//! FX (Foreign Exchange) module - conversion models, service, and traits.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use fx_errors::FxError;
pub use fx_model::{ConversionInput, ConversionRequest, ConversionResult};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;

pub use fxdesk_market_data::{CurrencyCode, RateSheet};
