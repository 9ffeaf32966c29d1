use super::fx_errors::FxError;
use super::fx_model::{ConversionRequest, ConversionResult};
use super::fx_traits::FxServiceTrait;
use crate::errors::Result;
use async_trait::async_trait;
use fxdesk_market_data::{CurrencyCode, RateProvider, RateSheet};
use std::sync::Arc;

/// Resolves conversions against a single rate provider.
///
/// Holds no mutable state; one instance serves every request concurrently.
#[derive(Clone)]
pub struct FxService {
    provider: Arc<dyn RateProvider>,
}

impl FxService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn rate_source(&self) -> &'static str {
        self.provider.id()
    }

    async fn convert(&self, request: ConversionRequest) -> Result<ConversionResult> {
        // Same currency never reaches the provider.
        if request.is_identity() {
            return Ok(ConversionResult::identity(&request));
        }

        let rate = self
            .provider
            .get_rate(request.from_currency(), request.to_currency())
            .await
            .map_err(|e| {
                log::warn!(
                    "Rate lookup {} -> {} via {} failed: {}",
                    request.from_currency(),
                    request.to_currency(),
                    self.provider.id(),
                    e
                );
                e
            })?;

        let result = ConversionResult::with_rate(&request, rate);
        if !result.converted_amount.is_finite() {
            return Err(FxError::InvalidAmount(format!(
                "{} is too large to convert",
                request.amount()
            ))
            .into());
        }

        log::debug!(
            "Converted {} {} to {} {} at {}",
            result.original_amount,
            result.from_currency,
            result.converted_amount,
            result.to_currency,
            result.exchange_rate
        );
        Ok(result)
    }

    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult> {
        let request = ConversionRequest::new(amount, from_currency, to_currency)?;
        self.convert(request).await
    }

    async fn get_rate_sheet(&self, base_currency: &str) -> Result<RateSheet> {
        let base = CurrencyCode::parse(base_currency)
            .ok_or_else(|| FxError::MissingParameter("base currency".to_string()))?;
        Ok(self.provider.get_rate_sheet(&base).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use fxdesk_market_data::{MarketDataError, RateTable, StaticTableProvider};
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn static_service() -> FxService {
        FxService::new(Arc::new(StaticTableProvider::reference()))
    }

    /// Provider that counts calls and fails every lookup.
    struct CountingProvider {
        calls: AtomicUsize,
        error: fn() -> MarketDataError,
    }

    impl CountingProvider {
        fn failing_with(error: fn() -> MarketDataError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                error,
            }
        }
    }

    #[async_trait]
    impl RateProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        async fn get_rate_sheet(
            &self,
            _base: &CurrencyCode,
        ) -> std::result::Result<RateSheet, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_usd_to_try_reference_rate() {
        let result = static_service()
            .convert_currency(100.0, "USD", "TRY")
            .await
            .unwrap();
        assert_eq!(result.exchange_rate, 32.5);
        assert_eq!(result.converted_amount, 3250.0);
        assert_eq!(result.original_amount, 100.0);
    }

    #[tokio::test]
    async fn test_lower_case_input_matches_upper_case() {
        let service = static_service();
        let lower = service.convert_currency(100.0, "usd", "eur").await.unwrap();
        let upper = service.convert_currency(100.0, "USD", "EUR").await.unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.from_currency.as_str(), "USD");
        assert_eq!(lower.to_currency.as_str(), "EUR");
    }

    #[tokio::test]
    async fn test_identity_skips_provider() {
        let provider = Arc::new(CountingProvider::failing_with(|| {
            MarketDataError::UpstreamUnavailable {
                provider: "COUNTING".to_string(),
                message: "down".to_string(),
            }
        }));
        let service = FxService::new(provider.clone());

        let result = service.convert_currency(42.0, "jpy", "JPY").await.unwrap();
        assert_eq!(result.exchange_rate, 1.0);
        assert_eq!(result.converted_amount, 42.0);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_inverse_pair_is_not_derived() {
        let table = RateTable::from_pairs([("USD", "JPY", 150.0)]).unwrap();
        let service = FxService::new(Arc::new(StaticTableProvider::new(Arc::new(table))));

        assert!(service.convert_currency(1.0, "USD", "JPY").await.is_ok());
        let err = service
            .convert_currency(150.0, "JPY", "USD")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fx(FxError::RateNotFound { .. })));
    }

    #[tokio::test]
    async fn test_no_triangulation_through_third_currency() {
        // USD -> EUR and EUR -> CHF exist, USD -> CHF does not.
        let table =
            RateTable::from_pairs([("USD", "EUR", 0.92), ("EUR", "CHF", 0.96)]).unwrap();
        let service = FxService::new(Arc::new(StaticTableProvider::new(Arc::new(table))));

        let err = service
            .convert_currency(10.0, "USD", "CHF")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fx(FxError::RateNotFound { .. })));
    }

    #[tokio::test]
    async fn test_invalid_amounts_are_rejected() {
        let service = static_service();
        for amount in [-5.0, 0.0] {
            let err = service
                .convert_currency(amount, "USD", "EUR")
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Fx(FxError::InvalidAmount(_))));
            assert!(err.is_client_error());
        }
    }

    #[tokio::test]
    async fn test_overflowing_result_is_rejected() {
        let err = static_service()
            .convert_currency(f64::MAX, "USD", "TRY")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fx(FxError::InvalidAmount(_))));
    }

    #[tokio::test]
    async fn test_upstream_timeout_surfaces_as_unavailable() {
        let provider = Arc::new(CountingProvider::failing_with(|| MarketDataError::Timeout {
            provider: "COUNTING".to_string(),
        }));
        let service = FxService::new(provider.clone());

        let err = service
            .convert_currency(100.0, "USD", "EUR")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fx(FxError::UpstreamUnavailable(_))));
        assert!(!err.is_client_error());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_sheet_for_static_source() {
        let service = static_service();
        let sheet = service.get_rate_sheet("eur").await.unwrap();
        assert_eq!(sheet.base.as_str(), "EUR");
        assert_eq!(sheet.rates.len(), 3);
        assert_eq!(service.rate_source(), "STATIC_TABLE");
    }

    proptest! {
        #[test]
        fn prop_identity_conversion(
            code in "[A-Za-z]{3}",
            amount in 0.000_001f64..1.0e12,
        ) {
            let result = runtime()
                .block_on(static_service().convert_currency(amount, &code, &code))
                .unwrap();
            prop_assert_eq!(result.exchange_rate, 1.0);
            prop_assert_eq!(result.converted_amount, amount);
        }

        #[test]
        fn prop_static_pairs_multiply(amount in 0.000_001f64..1.0e12) {
            let service = static_service();
            let rt = runtime();
            for from in ["USD", "EUR", "TRY", "GBP"] {
                for to in ["USD", "EUR", "TRY", "GBP"] {
                    if from == to {
                        continue;
                    }
                    let rate = RateTable::reference()
                        .rate(
                            &CurrencyCode::parse(from).unwrap(),
                            &CurrencyCode::parse(to).unwrap(),
                        )
                        .unwrap();
                    let result = rt
                        .block_on(service.convert_currency(amount, from, to))
                        .unwrap();
                    prop_assert_eq!(result.exchange_rate, rate);
                    prop_assert_eq!(result.converted_amount, amount * rate);
                }
            }
        }
    }
}
