//! ExchangeRate-API provider for live exchange rates.
//!
//! Fetches the full rate sheet for one base currency from an endpoint shaped
//! like `GET {base_url}/{BASE}` that answers with:
//!
//! ```json
//! { "base": "USD", "rates": { "EUR": 0.92, "TRY": 32.5 } }
//! ```
//!
//! Every lookup is one outbound request. Results are never cached and failed
//! requests are never retried; the only bound on a slow upstream is the
//! client timeout.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSheet};
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Public endpoint used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API response from the rate sheet endpoint
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Base currency echoed by the upstream
    base: Option<String>,
    /// Rates per target currency (1 base = rate target)
    rates: HashMap<String, f64>,
}

pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    /// Create a provider against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a provider around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn sheet_url(&self, base: &CurrencyCode) -> String {
        format!("{}/{}", self.base_url, encode(base.as_str()))
    }

    fn transport_error(error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::UpstreamUnavailable {
                provider: PROVIDER_ID.to_string(),
                message: error.to_string(),
            }
        }
    }

    fn into_sheet(
        base: &CurrencyCode,
        payload: LatestRatesResponse,
    ) -> Result<RateSheet, MarketDataError> {
        if let Some(echoed) = payload.base.as_deref().and_then(CurrencyCode::parse) {
            if &echoed != base {
                return Err(MarketDataError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("requested rates for {} but received {}", base, echoed),
                });
            }
        }

        let mut rates = BTreeMap::new();
        for (raw_code, rate) in payload.rates {
            let Some(code) = CurrencyCode::parse(&raw_code) else {
                continue;
            };
            // Zero or negative quotes are unusable; treat them as absent.
            if !rate.is_finite() || rate <= 0.0 {
                tracing::debug!(base = %base, target = %code, rate, "Dropping unusable upstream rate");
                continue;
            }
            rates.insert(code, rate);
        }

        Ok(RateSheet::new(base.clone(), rates))
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rate_sheet(&self, base: &CurrencyCode) -> Result<RateSheet, MarketDataError> {
        let url = self.sheet_url(base);
        tracing::debug!(%url, "Fetching rate sheet");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::UpstreamUnavailable {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response.bytes().await.map_err(Self::transport_error)?;
        let payload: LatestRatesResponse =
            serde_json::from_slice(&body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        Self::into_sheet(base, payload)
    }
}
