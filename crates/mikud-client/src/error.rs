use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The service answered with a bot-mitigation interstitial instead of a
    /// lookup result. Callers should back off rather than retry.
    #[error("request blocked by the service ({reason})")]
    Blocked { reason: &'static str },

    #[error(transparent)]
    InvalidAddress(#[from] mikud_core::InvalidAddress),
}
