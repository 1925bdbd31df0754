//! Error types and Result alias for the Ambet widget clients

use crate::types::ActionKey;
use thiserror::Error;

/// Main error type for the Ambet widget clients
#[derive(Error, Debug)]
pub enum Error {
    /// No usable credential in the cookie string. Raised before any
    /// network call is attempted.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    /// Malformed GraphQL envelope or payload. Widget callers treat this
    /// the same as a network failure.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The open-box mutation succeeded but none of the awarded action
    /// keys correspond to a reward option that was visible at selection
    /// time. The box must NOT be marked resolved.
    #[error("No matching reward for awarded actions: {0:?}")]
    NoMatchingReward(Vec<ActionKey>),

    #[error("Cookie error: {0}")]
    CookieError(String),

    #[error("Not enough money for this purchase")]
    InsufficientFunds,

    #[error("Purchase failed: {0}")]
    PurchaseError(String),

    #[error("Invalid widget state: {0}")]
    InvalidState(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidResponse(err.to_string())
    }
}
