//! Repository error types

use thiserror::Error;

/// Result type alias using this crate's error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by repository operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The repository exposes a fetching method it does not actually
    /// support.
    #[error("fetching method not implemented")]
    FetcherMethodNotImplemented,

    /// The repository exposes a storing method it does not actually
    /// support.
    #[error("storing method not implemented")]
    StorerMethodNotImplemented,

    /// Backend-specific failure surfaced by a repository implementation.
    /// Implementations may retry transient failures before returning this;
    /// the core never retries.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a backend-specific failure.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Backend(err.into())
    }
}
