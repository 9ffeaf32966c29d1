use fxdesk_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Missing required parameters: {0}")]
    MissingParameter(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Exchange rate not found for {from} to {to}")]
    RateNotFound { from: String, to: String },

    #[error("Exchange rate service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Exchange rate service returned an unreadable response: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Rate source misconfigured: {0}")]
    Configuration(String),
}

impl FxError {
    /// Input validation failures, as opposed to resolution failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FxError::MissingParameter(_) | FxError::InvalidAmount(_) | FxError::InvalidCurrency(_)
        )
    }
}

impl From<MarketDataError> for FxError {
    fn from(err: MarketDataError) -> Self {
        let message = err.to_string();
        match err {
            MarketDataError::RateNotFound { from, to } => FxError::RateNotFound { from, to },
            MarketDataError::MalformedResponse { .. } => FxError::MalformedUpstreamResponse(message),
            MarketDataError::InvalidRateTable(_) => FxError::Configuration(message),
            MarketDataError::UpstreamUnavailable { .. }
            | MarketDataError::Timeout { .. }
            | MarketDataError::Network(_) => FxError::UpstreamUnavailable(message),
        }
    }
}
