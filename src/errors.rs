/// Structured error types for the gacha log fetcher
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The query signature in the shared gacha-log URL has expired.
    /// Hard stop: one expired pool invalidates the whole multi-pool batch.
    #[error("gacha log authkey has expired")]
    AuthkeyExpired,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid gacha log url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Distinguishes the expiry sentinel from generic failures so the
    /// request layer can map it to its own user-facing message
    pub fn is_expired(&self) -> bool {
        matches!(self, FetchError::AuthkeyExpired)
    }
}
