//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSheet};

/// Trait for exchange-rate sources.
///
/// Implementations must be safe to call concurrently; every call is an
/// independent lookup with no shared mutable state.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fxdesk_market_data::{CurrencyCode, MarketDataError, RateProvider, RateSheet};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl RateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_rate_sheet(&self, base: &CurrencyCode) -> Result<RateSheet, MarketDataError> {
///         Ok(RateSheet::new(base.clone(), Default::default()))
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch every rate quoted against `base`.
    async fn get_rate_sheet(&self, base: &CurrencyCode) -> Result<RateSheet, MarketDataError>;

    /// Fetch the direct rate for the ordered pair `from -> to`.
    ///
    /// The default implementation pulls the full sheet for `from` and picks
    /// the `to` entry out of it.
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, MarketDataError> {
        let sheet = self.get_rate_sheet(from).await?;
        sheet.rate(to).ok_or_else(|| MarketDataError::RateNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
