//! fxdesk Market Data Crate
//!
//! This crate provides exchange-rate lookups for the fxdesk conversion
//! service.
//!
//! # Overview
//!
//! Two interchangeable rate sources are supported:
//! - a static, hard-coded [`RateTable`] built once at process start
//! - a live upstream quoting service that returns a full rate sheet per base
//!   currency, queried once per request and never cached
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   CurrencyCode   |  (normalized, upper-case)
//! +------------------+
//!          |
//!          v
//! +------------------+     +---------------------+
//! |   RateProvider   | --> | StaticTableProvider |  (RateTable, read-only)
//! +------------------+     +---------------------+
//!          |
//!          v
//! +------------------------+
//! | ExchangeRateApiProvider|  (one outbound call per lookup)
//! +------------------------+
//! ```
//!
//! Neither provider derives inverse rates or triangulates through a third
//! currency: a pair is either present as given or it is not.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CurrencyCode, RateSheet, RateTable};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::static_table::StaticTableProvider;
pub use provider::RateProvider;
