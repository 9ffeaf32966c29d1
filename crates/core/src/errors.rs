//! Core error types for the fxdesk service.
//!
//! Every failure is reported to the caller of the failing request and never
//! outlives it: there is no retry and nothing here is fatal to the process.

use fxdesk_market_data::MarketDataError;
use thiserror::Error;

use crate::chat::ChatError;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the conversion service.
///
/// The display text of each variant is the human-readable message sent back
/// to the chat client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Fx(#[from] FxError),

    #[error("{0}")]
    Chat(#[from] ChatError),
}

impl Error {
    /// Whether the failure was caused by the caller's input rather than by
    /// rate resolution or an upstream service.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Fx(e) => e.is_client_error(),
            Error::Chat(e) => e.is_client_error(),
        }
    }
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        Error::Fx(err.into())
    }
}
