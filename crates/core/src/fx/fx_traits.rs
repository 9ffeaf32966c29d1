use super::fx_model::{ConversionRequest, ConversionResult};
use crate::errors::Result;
use async_trait::async_trait;
use fxdesk_market_data::RateSheet;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Identifier of the rate source behind this service.
    fn rate_source(&self) -> &'static str;

    async fn convert(&self, request: ConversionRequest) -> Result<ConversionResult>;

    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult>;

    async fn get_rate_sheet(&self, base_currency: &str) -> Result<RateSheet>;
}
