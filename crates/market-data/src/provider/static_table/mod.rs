//! Static rate table provider.
//!
//! Serves lookups from a [`RateTable`] that is built once at startup and
//! shared read-only. No network access, no inversion, no triangulation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSheet, RateTable};
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "STATIC_TABLE";

pub struct StaticTableProvider {
    table: Arc<RateTable>,
}

impl StaticTableProvider {
    pub fn new(table: Arc<RateTable>) -> Self {
        Self { table }
    }

    /// Provider over the hard-coded reference table.
    pub fn reference() -> Self {
        Self::new(Arc::new(RateTable::reference()))
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

#[async_trait]
impl RateProvider for StaticTableProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rate_sheet(&self, base: &CurrencyCode) -> Result<RateSheet, MarketDataError> {
        Ok(RateSheet::new(base.clone(), self.table.row(base)))
    }

    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, MarketDataError> {
        self.table
            .rate(from, to)
            .ok_or_else(|| MarketDataError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CurrencyCode {
        CurrencyCode::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_direct_lookup() {
        let provider = StaticTableProvider::reference();
        let rate = provider.get_rate(&code("USD"), &code("TRY")).await.unwrap();
        assert_eq!(rate, 32.5);
    }

    #[tokio::test]
    async fn test_missing_pair_is_rate_not_found() {
        let table = RateTable::from_pairs([("EUR", "JPY", 162.0)]).unwrap();
        let provider = StaticTableProvider::new(Arc::new(table));

        let err = provider
            .get_rate(&code("JPY"), &code("EUR"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::RateNotFound { ref from, ref to } if from == "JPY" && to == "EUR"
        ));
    }

    #[tokio::test]
    async fn test_rate_sheet_is_table_row() {
        let provider = StaticTableProvider::reference();
        let sheet = provider.get_rate_sheet(&code("GBP")).await.unwrap();
        assert_eq!(sheet.base.as_str(), "GBP");
        assert_eq!(sheet.rates.len(), 3);
        assert_eq!(sheet.rate(&code("EUR")), Some(1.16));
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(StaticTableProvider::reference().id(), "STATIC_TABLE");
    }
}
