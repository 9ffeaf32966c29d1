//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while looking up exchange rates.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No rate is available for the ordered pair.
    /// Inverse pairs are never consulted.
    #[error("Exchange rate not found for {from} to {to}")]
    RateNotFound {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },

    /// The upstream answered with a non-success status or could not be reached.
    #[error("Upstream unavailable: {provider} - {message}")]
    UpstreamUnavailable {
        /// The provider that failed
        provider: String,
        /// Transport or status detail
        message: String,
    },

    /// The request to the upstream exceeded the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The upstream answered, but the payload could not be decoded.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// Decoding error detail
        message: String,
    },

    /// A rate table was built from invalid entries.
    #[error("Invalid rate table: {0}")]
    InvalidRateTable(String),

    /// The HTTP client could not be constructed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether this error means the upstream could not deliver a usable answer.
    ///
    /// Timeouts count as unavailability; a missing pair does not.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::Timeout { .. } | Self::Network(_)
        )
    }
}
