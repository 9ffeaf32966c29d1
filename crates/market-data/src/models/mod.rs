//! Market data models
//!
//! - `currency` - Normalized currency code (CurrencyCode)
//! - `rate_table` - Static ordered-pair rate table (RateTable)
//! - `rate_sheet` - All rates known for one base currency (RateSheet)

mod currency;
mod rate_sheet;
mod rate_table;

pub use currency::CurrencyCode;
pub use rate_sheet::RateSheet;
pub use rate_table::RateTable;
