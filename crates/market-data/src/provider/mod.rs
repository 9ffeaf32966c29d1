//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that every rate source implements
//! - `StaticTableProvider`, backed by an immutable [`RateTable`](crate::RateTable)
//! - `ExchangeRateApiProvider`, which queries a live quoting service per request
//!
//! Providers are interchangeable: the conversion service only sees the trait.

mod traits;

pub mod exchange_rate_api;
pub mod static_table;

pub use traits::RateProvider;
