//! fxdesk Core - Conversion domain, services, and traits.
//!
//! This crate contains the business logic behind the fxdesk HTTP service:
//! request validation, the currency conversion algorithm on top of a
//! pluggable rate provider, and the relay to an external chat agent.

pub mod chat;
pub mod errors;
pub mod fx;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
