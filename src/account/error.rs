use thiserror::Error;

/// Failures returned by the account store.
///
/// `DuplicateUsername`, `NotFound` and `InvalidPassword` are expected outcomes
/// the caller maps to client errors; `Storage` and `Hashing` are internal.
/// None of the messages carry a password or a password hash.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("username already registered")]
    DuplicateUsername,
    #[error("account not found")]
    NotFound,
    #[error("invalid password")]
    InvalidPassword,
    #[error("missing required field: {0}")]
    InvalidInput(&'static str),
    #[error("storage error: {0:#}")]
    Storage(#[source] anyhow::Error),
    #[error("password hashing error: {0:#}")]
    Hashing(#[source] anyhow::Error),
}

impl AccountError {
    /// True for outcomes caused by the request rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername | Self::NotFound | Self::InvalidPassword | Self::InvalidInput(_)
        )
    }
}
